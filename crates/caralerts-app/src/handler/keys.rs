//! Key event handlers - translate raw keys into semantic messages

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField, Screen};

/// Map a key press onto a semantic message for the current screen.
/// Returns `None` for keys with no meaning in the current context.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits, regardless of screen.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen {
        Screen::Landing => handle_landing_key(key),
        Screen::Form => handle_form_key(state, key),
        Screen::Results => handle_results_key(key),
    }
}

fn handle_landing_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('c') => Some(Message::ShowForm),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_results_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::RunAgain),
        InputKey::Char('n') | InputKey::Enter => Some(Message::NewAlert),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_form_key(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.focus;
    match key {
        InputKey::Esc => Some(Message::ShowLanding),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::CharCtrl('s') => Some(Message::Submit),

        InputKey::Enter => match focus {
            FormField::Submit => Some(Message::Submit),
            FormField::Brands | FormField::Models => Some(Message::ToggleSelected),
            FormField::Frequency => Some(Message::NextFrequency),
            _ => Some(Message::FocusNext),
        },

        // Up/Down navigate the picker list when one is focused,
        // otherwise move between fields.
        InputKey::Up => {
            if focus.is_list() {
                Some(Message::ListUp)
            } else {
                Some(Message::FocusPrev)
            }
        }
        InputKey::Down => {
            if focus.is_list() {
                Some(Message::ListDown)
            } else {
                Some(Message::FocusNext)
            }
        }

        InputKey::Left if focus == FormField::Frequency => Some(Message::PreviousFrequency),
        InputKey::Right if focus == FormField::Frequency => Some(Message::NextFrequency),

        InputKey::Space => match focus {
            FormField::Brands | FormField::Models => Some(Message::ToggleSelected),
            FormField::Frequency => Some(Message::NextFrequency),
            FormField::SearchName => Some(Message::InputChar(' ')),
            _ => None,
        },

        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_quits_on_every_screen() {
        let mut state = AppState::new();
        for screen in [Screen::Landing, Screen::Form, Screen::Results] {
            state.screen = screen;
            assert!(matches!(
                handle_key(&state, InputKey::CharCtrl('c')),
                Some(Message::Quit)
            ));
        }
    }

    #[test]
    fn test_landing_enter_opens_form() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::ShowForm)
        ));
    }

    #[test]
    fn test_form_updown_moves_fields_or_list() {
        let mut state = AppState::new();
        state.screen = Screen::Form;

        state.form.focus = FormField::SearchName;
        assert!(matches!(
            handle_key(&state, InputKey::Down),
            Some(Message::FocusNext)
        ));

        state.form.focus = FormField::Brands;
        assert!(matches!(
            handle_key(&state, InputKey::Down),
            Some(Message::ListDown)
        ));
    }

    #[test]
    fn test_form_enter_depends_on_focus() {
        let mut state = AppState::new();
        state.screen = Screen::Form;

        state.form.focus = FormField::Submit;
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::Submit)
        ));

        state.form.focus = FormField::Models;
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::ToggleSelected)
        ));
    }

    #[test]
    fn test_results_run_again() {
        let mut state = AppState::new();
        state.screen = Screen::Results;
        assert!(matches!(
            handle_key(&state, InputKey::Char('r')),
            Some(Message::RunAgain)
        ));
    }
}
