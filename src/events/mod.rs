//! Keyboard event handling.
//!
//! `handle_event` dispatches one terminal event: modals swallow keys
//! first, then a few global bindings, then the screen-specific handlers.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Modal, PageRequest, RecipeFetch, Screen};

mod category;
mod home;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    recipe_tx: &mpsc::UnboundedSender<RecipeFetch>,
    shop_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if app.modal.is_open() {
        if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
            app.modal = Modal::None;
        }
        return false;
    }

    if is_quit(&ke) {
        return true;
    }
    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Tab => {
            app.enter_screen(next_screen(app.screen));
            return false;
        }
        KeyCode::BackTab => {
            app.enter_screen(prev_screen(app.screen));
            return false;
        }
        _ => {}
    }

    match app.screen {
        Screen::Home => home::handle_key(app, &ke, recipe_tx, shop_tx),
        Screen::Recipes => search::handle_recipes_key(app, &ke, recipe_tx),
        Screen::Shopping => search::handle_shopping_key(app, &ke, shop_tx),
        Screen::Categories => category::handle_key(app, &ke, shop_tx),
    }
    false
}

/// Ctrl+C and Ctrl+Q exit from anywhere.
fn is_quit(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ke.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

/// Screen to the right of `screen` in tab order.
const fn next_screen(screen: Screen) -> Screen {
    match screen {
        Screen::Home => Screen::Recipes,
        Screen::Recipes => Screen::Shopping,
        Screen::Shopping => Screen::Categories,
        Screen::Categories => Screen::Home,
    }
}

/// Screen to the left of `screen` in tab order.
const fn prev_screen(screen: Screen) -> Screen {
    match screen {
        Screen::Home => Screen::Categories,
        Screen::Recipes => Screen::Home,
        Screen::Shopping => Screen::Recipes,
        Screen::Categories => Screen::Shopping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    /// Build a plain key press event.
    pub(crate) fn press(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    /// Channel pair helper for handler tests.
    pub(crate) fn test_channels() -> (
        mpsc::UnboundedSender<RecipeFetch>,
        mpsc::UnboundedReceiver<RecipeFetch>,
        mpsc::UnboundedSender<PageRequest>,
        mpsc::UnboundedReceiver<PageRequest>,
    ) {
        let (rtx, rrx) = mpsc::unbounded_channel();
        let (stx, srx) = mpsc::unbounded_channel();
        (rtx, rrx, stx, srx)
    }

    #[test]
    /// What: Tab cycles through all four screens and wraps
    ///
    /// - Input: Four Tab presses from Home
    /// - Output: Recipes → Shopping → Categories → Home
    fn events_tab_cycles_screens() {
        let (rtx, _rrx, stx, _srx) = test_channels();
        let mut app = AppState::default();
        let order = [
            Screen::Recipes,
            Screen::Shopping,
            Screen::Categories,
            Screen::Home,
        ];
        for expected in order {
            assert!(!handle_event(press(KeyCode::Tab), &mut app, &rtx, &stx));
            assert_eq!(app.screen, expected);
        }
    }

    #[test]
    /// What: Ctrl+C requests exit; plain keys do not
    ///
    /// - Input: Ctrl+C and a plain character
    /// - Output: `true` then `false`
    fn events_ctrl_c_quits() {
        let (rtx, _rrx, stx, _srx) = test_channels();
        let mut app = AppState::default();
        let quit = CEvent::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(handle_event(quit, &mut app, &rtx, &stx));
        assert!(!handle_event(press(KeyCode::Char('c')), &mut app, &rtx, &stx));
    }

    #[test]
    /// What: An open modal swallows keys and closes on Esc
    ///
    /// - Input: Alert modal, then a character, then Esc
    /// - Output: Modal stays open through the character, closes on Esc
    fn events_modal_swallows_and_closes() {
        let (rtx, _rrx, stx, _srx) = test_channels();
        let mut app = AppState::default();
        app.modal = Modal::Alert {
            message: "oops".to_owned(),
        };
        handle_event(press(KeyCode::Char('x')), &mut app, &rtx, &stx);
        assert!(app.modal.is_open());
        handle_event(press(KeyCode::Esc), &mut app, &rtx, &stx);
        assert!(!app.modal.is_open());
    }
}
