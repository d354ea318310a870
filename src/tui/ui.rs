use crate::reservation::models::{Reservation, Status};
use crate::tui::app::{App, Pane};
use crate::tui::form::FormField;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Stack panel
            Constraint::Length(6), // Form
            Constraint::Min(0),    // Queue | History
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_stack_panel(frame, chunks[1], app);
    draw_form(frame, chunks[2], app);
    draw_lists(frame, chunks[3], app);
    draw_footer(frame, chunks[4], app);

    if let Some(reservation) = &app.detail {
        draw_detail(frame, reservation);
    }
    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("★ Restaurant Reservations ★")
        .block(Block::default().borders(Borders::ALL).title("Reserve"))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn draw_stack_panel(frame: &mut Frame, area: Rect, app: &App) {
    let manager = &app.manager;
    let text = format!(
        "Undo Stack: {} | Redo Stack: {} | Queue: {} | History: {}",
        manager.undo_stack().len(),
        manager.redo_stack().len(),
        manager.queue().len(),
        manager.history().len()
    );

    let enabled = |on: bool| {
        if on {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let line = Line::from(vec![
        Span::raw(text),
        Span::raw("   "),
        Span::styled("u: undo", enabled(manager.can_undo())),
        Span::raw("  "),
        Span::styled("r: redo", enabled(manager.can_redo())),
        Span::raw("  "),
        Span::styled("C: clear", Style::default().fg(Color::Red)),
    ]);

    let panel = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Stack Information"));
    frame.render_widget(panel, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let text_field = app.form.field(field);
            let is_focused = app.form_mode && app.form.focused == field;
            let label = format!("{:<16}", format!("{}:", field.label()));

            if is_focused {
                let (before_cursor, after_cursor) = text_field.split_at_cursor();
                Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("{}█{}", before_cursor, after_cursor),
                        Style::default().bg(Color::Blue).fg(Color::White),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Gray)),
                    Span::raw(text_field.buffer.clone()),
                ])
            }
        })
        .collect();

    let (title, border_style) = if app.form_mode {
        (
            " New Reservation (Enter: reserve, Esc: close) ",
            Style::default().fg(Color::Yellow),
        )
    } else {
        (" New Reservation (a: open form) ", Style::default().fg(Color::DarkGray))
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(form, area);
}

fn draw_lists(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_reservation_list(
        frame,
        columns[0],
        "Current Queue",
        "No one is waiting",
        app.manager.queue(),
        (app.focus == Pane::Queue).then_some(app.queue_index),
    );
    draw_reservation_list(
        frame,
        columns[1],
        "Reservation History",
        "No history yet",
        app.manager.history(),
        (app.focus == Pane::History).then_some(app.history_index),
    );
}

fn draw_reservation_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    reservations: &[Reservation],
    selected: Option<usize>,
) {
    let border_style = if selected.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", title, reservations.len()))
        .border_style(border_style);

    if reservations.is_empty() {
        let empty = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = reservations
        .iter()
        .enumerate()
        .map(|(i, reservation)| reservation_card(i + 1, reservation))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(selected);

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn reservation_card(position: usize, reservation: &Reservation) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}. {} ", position, reservation.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            status_badge(reservation.status),
        ]),
        Line::from(format!("   {} people | {}", reservation.people, reservation.phone)),
    ];
    if let Some(note) = &reservation.note {
        lines.push(Line::from(format!("   Note: {}", note)));
    }
    lines.push(Line::from(Span::styled(
        format!("   {}", reservation.time),
        Style::default().fg(Color::DarkGray),
    )));

    ListItem::new(lines)
}

fn status_badge(status: Status) -> Span<'static> {
    let color = match status {
        Status::Waiting => Color::Yellow,
        Status::Called => Color::Blue,
        Status::Done => Color::Green,
    };
    Span::styled(
        format!("[{}]", status.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = match &app.status_message {
        Some(message) => message.clone(),
        None if app.form_mode => {
            "FORM | Tab/↓: next field | Shift+Tab/↑: previous | Enter: reserve | Esc: close".to_string()
        }
        None => "a: reserve | n: call next | Tab: switch list | Enter: detail | ?: help | q: quit".to_string(),
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_detail(frame: &mut Frame, reservation: &Reservation) {
    let label = |text: &'static str| Span::styled(text, Style::default().add_modifier(Modifier::BOLD));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Reservation ", Style::default().bg(Color::Green).fg(Color::Black)),
            Span::raw("  "),
            Span::styled(
                reservation.date_part().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(reservation.time_part().to_string()),
        ]),
        Line::from(""),
        Line::from(vec![label("Name:          "), Span::raw(reservation.name.clone())]),
        Line::from(vec![label("Phone:         "), Span::raw(reservation.phone.clone())]),
        Line::from(vec![label("Reservation ID:"), Span::raw(format!(" {}", reservation.reservation_id()))]),
        Line::from(vec![label("People:        "), Span::raw(format!("{} people", reservation.people))]),
    ];
    if let Some(note) = &reservation.note {
        lines.push(Line::from(vec![label("Note:          "), Span::raw(note.clone())]));
    }
    lines.push(Line::from(vec![label("Status:        "), status_badge(reservation.status)]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: close detail",
        Style::default().fg(Color::DarkGray),
    )));

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Reservation Detail ")
                .style(Style::default().fg(Color::White)),
        )
        .wrap(Wrap { trim: false });

    let area = centered_rect(60, 50, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(card, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Reservations - Keyboard Commands",
        "",
        "QUEUE:",
        "  a                 Open the reservation form",
        "  n                 Call the next reservation in the queue",
        "",
        "HISTORY:",
        "  u                 Undo the last change",
        "  r / Ctrl+R        Redo the last undone change",
        "  C                 Clear queue, history and undo/redo (cannot be undone)",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move selection",
        "  Tab               Switch between queue and history",
        "  Enter             Show reservation detail",
        "  Esc               Close reservation detail",
        "",
        "FORM:",
        "  Tab / Shift+Tab   Next / previous field",
        "  Ctrl+W            Delete word before cursor",
        "  Enter             Submit reservation",
        "  Esc               Close form (typed text is kept)",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
