use crate::reservation::intake;
use crate::reservation::manager::QueueHistoryManager;
use crate::reservation::models::Reservation;
use crate::tui::form::ReservationForm;
use crate::tui::handlers::{FormModeAction, HelpModeAction, KeyHandler, NormalModeAction};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Queue,
    History,
}

#[derive(Debug)]
pub struct App {
    pub manager: QueueHistoryManager,
    pub form: ReservationForm,
    pub form_mode: bool,
    pub help_mode: bool,
    pub focus: Pane,
    pub queue_index: usize,
    pub history_index: usize,
    /// Copy taken when the card was opened; later undo/redo does not touch it.
    pub detail: Option<Reservation>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    time_format: String,
}

impl App {
    pub fn new(time_format: String) -> Self {
        Self {
            manager: QueueHistoryManager::new(),
            form: ReservationForm::new(),
            form_mode: false,
            help_mode: false,
            focus: Pane::Queue,
            queue_index: 0,
            history_index: 0,
            detail: None,
            status_message: None,
            should_quit: false,
            time_format,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else if self.form_mode {
            self.handle_form_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::None => {}
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::SwitchPane => self.switch_pane(),
            NormalModeAction::OpenDetail => self.open_detail(),
            NormalModeAction::CloseDetail => self.detail = None,
            NormalModeAction::OpenForm => {
                self.form_mode = true;
                self.status_message = None;
            }
            NormalModeAction::CallNext => self.call_next(),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::Redo => self.redo(),
            NormalModeAction::ClearHistory => self.clear_history(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    fn handle_form_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_form_mode_key(key_event) {
            FormModeAction::None => {}
            // typed text is kept so the form can be resumed
            FormModeAction::Cancel => self.form_mode = false,
            FormModeAction::Submit => self.submit_form(),
            FormModeAction::NextField => self.form.focus_next(),
            FormModeAction::PreviousField => self.form.focus_previous(),
            FormModeAction::Backspace => self.form.focused_field_mut().backspace(),
            FormModeAction::Delete => self.form.focused_field_mut().delete(),
            FormModeAction::DeleteWordBackward => self.form.focused_field_mut().delete_word_backward(),
            FormModeAction::MoveCursorLeft => self.form.focused_field_mut().move_cursor_left(),
            FormModeAction::MoveCursorRight => self.form.focused_field_mut().move_cursor_right(),
            FormModeAction::MoveCursorHome => self.form.focused_field_mut().move_cursor_home(),
            FormModeAction::MoveCursorEnd => self.form.focused_field_mut().move_cursor_end(),
            FormModeAction::InsertChar(c) => self.form.focused_field_mut().insert_char(c),
        }
    }

    fn submit_form(&mut self) {
        self.submit_form_at(Local::now());
    }

    fn submit_form_at(&mut self, now: DateTime<Local>) {
        let time = intake::stamp(now, &self.time_format);
        match self.form.to_input().validate(time) {
            Ok(reservation) => {
                self.status_message = Some(format!("Reserved for {}", reservation.name));
                self.manager.add_reservation(reservation);
                self.form.reset();
                self.form_mode = false;
                self.clamp_selection();
            }
            Err(e) => {
                warn!(error = %e, "reservation form rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn call_next(&mut self) {
        self.status_message = match self.manager.call_next() {
            Some(served) => Some(format!("Called {}", served.name)),
            None => Some("Queue is empty".to_string()),
        };
        self.clamp_selection();
    }

    fn undo(&mut self) {
        self.status_message = if self.manager.undo() {
            Some("Undone".to_string())
        } else {
            Some("Nothing to undo".to_string())
        };
        self.clamp_selection();
    }

    fn redo(&mut self) {
        self.status_message = if self.manager.redo() {
            Some("Redone".to_string())
        } else {
            Some("Nothing to redo".to_string())
        };
        self.clamp_selection();
    }

    fn clear_history(&mut self) {
        self.manager.clear_history();
        self.detail = None;
        self.status_message = Some("Cleared queue, history and undo/redo stacks".to_string());
        self.clamp_selection();
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Pane::Queue => self.manager.queue().len(),
            Pane::History => self.manager.history().len(),
        }
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Queue => &mut self.queue_index,
            Pane::History => &mut self.history_index,
        }
    }

    fn move_selection_up(&mut self) {
        let index = self.focused_index_mut();
        *index = index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        let last = self.focused_len().saturating_sub(1);
        let index = self.focused_index_mut();
        if *index < last {
            *index += 1;
        }
    }

    fn switch_pane(&mut self) {
        self.focus = match self.focus {
            Pane::Queue => Pane::History,
            Pane::History => Pane::Queue,
        };
    }

    fn open_detail(&mut self) {
        let selected = match self.focus {
            Pane::Queue => self.manager.queue().get(self.queue_index),
            Pane::History => self.manager.history().get(self.history_index),
        };
        if let Some(reservation) = selected {
            info!(id = %reservation.reservation_id(), "opened reservation detail");
            self.detail = Some(reservation.clone());
        }
    }

    fn clamp_selection(&mut self) {
        self.queue_index = self.queue_index.min(self.manager.queue().len().saturating_sub(1));
        self.history_index = self.history_index.min(self.manager.history().len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::models::Status;
    use crate::tui::form::FormField;
    use chrono::TimeZone;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_form(app: &mut App, name: &str, phone: &str, people: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, phone);
        press(app, KeyCode::Tab);
        type_text(app, people);
    }

    fn reserve(app: &mut App, name: &str) {
        fill_form(app, name, "081234567890", "2");
        let now = Local.with_ymd_and_hms(2026, 10, 19, 19, 0, 0).unwrap();
        app.submit_form_at(now);
    }

    fn queue_names(app: &App) -> Vec<String> {
        app.manager.queue().iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_submit_form_adds_to_queue() {
        let mut app = App::new("%d %b %Y, %H:%M".to_string());
        reserve(&mut app, "Andi");

        assert!(!app.form_mode);
        assert_eq!(queue_names(&app), vec!["Andi"]);
        let reservation = &app.manager.queue()[0];
        assert_eq!(reservation.status, Status::Waiting);
        assert_eq!(reservation.people, 2);
        assert_eq!(reservation.time, "19 Oct 2026, 19:00");
        assert_eq!(app.form.to_input().name, "");
        assert_eq!(app.form.focused, FormField::Name);
    }

    #[test]
    fn test_invalid_form_stays_open_and_does_not_touch_manager() {
        let mut app = App::new("%H:%M".to_string());
        fill_form(&mut app, "Andi", "0812", "0");
        press(&mut app, KeyCode::Enter);

        assert!(app.form_mode);
        assert!(app.manager.queue().is_empty());
        assert!(app.manager.undo_stack().is_empty());
        assert!(app.status_message.as_deref().unwrap().contains("at least 1"));
        assert_eq!(app.form.to_input().name, "Andi");
    }

    #[test]
    fn test_cancel_form_keeps_text() {
        let mut app = App::new("%H:%M".to_string());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "qn");
        press(&mut app, KeyCode::Esc);

        assert!(!app.form_mode);
        assert!(!app.should_quit);
        assert_eq!(app.form.to_input().name, "qn");
        assert!(app.manager.queue().is_empty());
    }

    #[test]
    fn test_call_next_undo_redo_keys() {
        let mut app = App::new("%H:%M".to_string());
        reserve(&mut app, "A");
        reserve(&mut app, "B");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(queue_names(&app), vec!["B"]);
        assert_eq!(app.manager.history()[0].name, "A");
        assert_eq!(app.status_message.as_deref(), Some("Called A"));

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(queue_names(&app), vec!["A", "B"]);
        assert!(app.manager.history().is_empty());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(queue_names(&app), vec!["B"]);
        assert_eq!(app.manager.history()[0].status, Status::Done);
    }

    #[test]
    fn test_noop_messages() {
        let mut app = App::new("%H:%M".to_string());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.status_message.as_deref(), Some("Queue is empty"));
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.status_message.as_deref(), Some("Nothing to undo"));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.status_message.as_deref(), Some("Nothing to redo"));
        assert!(app.manager.undo_stack().is_empty());
    }

    #[test]
    fn test_clear_history_key() {
        let mut app = App::new("%H:%M".to_string());
        reserve(&mut app, "A");
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.detail.is_some());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)).unwrap();

        assert!(app.manager.queue().is_empty());
        assert!(app.manager.history().is_empty());
        assert!(!app.manager.can_undo());
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_detail_follows_focused_pane() {
        let mut app = App::new("%H:%M".to_string());
        reserve(&mut app, "A");
        reserve(&mut app, "B");
        reserve(&mut app, "C");
        press(&mut app, KeyCode::Char('n'));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.detail.as_ref().unwrap().name, "C");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.name, "A");
        assert_eq!(detail.status, Status::Done);

        press(&mut app, KeyCode::Esc);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_selection_is_clamped_after_mutation() {
        let mut app = App::new("%H:%M".to_string());
        reserve(&mut app, "A");
        reserve(&mut app, "B");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.queue_index, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.queue_index, 0);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.queue_index, 0);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.queue_index, 0);
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = App::new("%H:%M".to_string());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_mode);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.help_mode);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.help_mode);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
