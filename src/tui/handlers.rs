use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => NormalModeAction::Quit,
            KeyCode::Char('r') if ctrl => NormalModeAction::Redo,
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Esc => NormalModeAction::CloseDetail,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Tab | KeyCode::BackTab => NormalModeAction::SwitchPane,
            KeyCode::Enter => NormalModeAction::OpenDetail,
            KeyCode::Char('a') => NormalModeAction::OpenForm,
            KeyCode::Char('n') => NormalModeAction::CallNext,
            KeyCode::Char('u') => NormalModeAction::Undo,
            KeyCode::Char('r') => NormalModeAction::Redo,
            KeyCode::Char('C') => NormalModeAction::ClearHistory,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => HelpModeAction::ExitHelpMode,
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_form_mode_key(key_event: KeyEvent) -> FormModeAction {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('w') => FormModeAction::DeleteWordBackward,
                KeyCode::Char('c') => FormModeAction::Cancel,
                _ => FormModeAction::None,
            };
        }

        match key_event.code {
            KeyCode::Esc => FormModeAction::Cancel,
            KeyCode::Enter => FormModeAction::Submit,
            KeyCode::Tab | KeyCode::Down => FormModeAction::NextField,
            KeyCode::BackTab | KeyCode::Up => FormModeAction::PreviousField,
            KeyCode::Backspace => FormModeAction::Backspace,
            KeyCode::Delete => FormModeAction::Delete,
            KeyCode::Left => FormModeAction::MoveCursorLeft,
            KeyCode::Right => FormModeAction::MoveCursorRight,
            KeyCode::Home => FormModeAction::MoveCursorHome,
            KeyCode::End => FormModeAction::MoveCursorEnd,
            KeyCode::Char(c) => FormModeAction::InsertChar(c),
            _ => FormModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    SwitchPane,
    OpenDetail,
    CloseDetail,
    OpenForm,
    CallNext,
    Undo,
    Redo,
    ClearHistory,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum FormModeAction {
    None,
    Cancel,
    Submit,
    NextField,
    PreviousField,
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_history_controls() {
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Char('u'))), NormalModeAction::Undo);
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Char('r'))), NormalModeAction::Redo);
        assert_eq!(KeyHandler::handle_normal_mode_key(ctrl('r')), NormalModeAction::Redo);
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            NormalModeAction::ClearHistory
        );
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Char('n'))), NormalModeAction::CallNext);
    }

    #[test]
    fn test_normal_mode_quit_keys() {
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Char('q'))), NormalModeAction::Quit);
        assert_eq!(KeyHandler::handle_normal_mode_key(ctrl('c')), NormalModeAction::Quit);
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Char('c'))), NormalModeAction::None);
    }

    #[test]
    fn test_normal_mode_navigation() {
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Up)), NormalModeAction::MoveSelectionUp);
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Char('j'))), NormalModeAction::MoveSelectionDown);
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Tab)), NormalModeAction::SwitchPane);
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Enter)), NormalModeAction::OpenDetail);
        assert_eq!(KeyHandler::handle_normal_mode_key(key(KeyCode::Esc)), NormalModeAction::CloseDetail);
    }

    #[test]
    fn test_help_mode_keys() {
        assert_eq!(KeyHandler::handle_help_mode_key(key(KeyCode::Esc)), HelpModeAction::ExitHelpMode);
        assert_eq!(KeyHandler::handle_help_mode_key(key(KeyCode::Char('?'))), HelpModeAction::ExitHelpMode);
        assert_eq!(KeyHandler::handle_help_mode_key(key(KeyCode::Char('n'))), HelpModeAction::None);
    }

    #[test]
    fn test_form_mode_keys() {
        assert_eq!(KeyHandler::handle_form_mode_key(key(KeyCode::Char('q'))), FormModeAction::InsertChar('q'));
        assert_eq!(KeyHandler::handle_form_mode_key(key(KeyCode::Enter)), FormModeAction::Submit);
        assert_eq!(KeyHandler::handle_form_mode_key(key(KeyCode::Tab)), FormModeAction::NextField);
        assert_eq!(KeyHandler::handle_form_mode_key(key(KeyCode::BackTab)), FormModeAction::PreviousField);
        assert_eq!(KeyHandler::handle_form_mode_key(ctrl('w')), FormModeAction::DeleteWordBackward);
        assert_eq!(KeyHandler::handle_form_mode_key(ctrl('c')), FormModeAction::Cancel);
        assert_eq!(
            KeyHandler::handle_form_mode_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            FormModeAction::InsertChar('A')
        );
    }
}
