//! Key handling for the two search screens.
//!
//! Typing edits the query line; Enter dispatches a fresh query; moving
//! the selection onto the last loaded record requests the next page when
//! no fetch is in flight (the controller enforces the actual guard).

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::state::{AppState, Focus, Modal, PageRequest, RecipeFetch};

/// Minimum query length for the shopping API, matching the service's own
/// behavior for very short terms.
const MIN_SHOP_QUERY_CHARS: usize = 2;

/// Handle one key on the recipe search screen.
pub fn handle_recipes_key(
    app: &mut AppState,
    ke: &KeyEvent,
    recipe_tx: &mpsc::UnboundedSender<RecipeFetch>,
) {
    if ke.code == KeyCode::F(2) {
        app.recipe_mode = app.recipe_mode.toggled();
        return;
    }
    match app.focus {
        Focus::Input => match ke.code {
            KeyCode::Char(c) => app.input.push(c),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Enter => {
                let text = app.input.clone();
                if let Some(request) = app.recipe_search.new_query(&text) {
                    app.recipe_selected = 0;
                    let _ = recipe_tx.send(RecipeFetch {
                        request,
                        field: app.recipe_mode.field(),
                    });
                }
            }
            KeyCode::Down => {
                if !app.recipe_search.results().is_empty() {
                    app.focus = Focus::List;
                    app.recipe_selected = 0;
                }
            }
            KeyCode::Esc => app.enter_screen(crate::state::Screen::Home),
            _ => {}
        },
        Focus::List => match ke.code {
            KeyCode::Up => {
                if app.recipe_selected == 0 {
                    app.focus = Focus::Input;
                } else {
                    app.recipe_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::PageDown => {
                let step = if ke.code == KeyCode::PageDown { 10 } else { 1 };
                let len = app.recipe_search.results().len();
                if len > 0 {
                    app.recipe_selected = (app.recipe_selected + step).min(len - 1);
                }
                maybe_page_recipes(app, recipe_tx);
            }
            KeyCode::Enter => {
                if let Some(item) = app.recipe_search.results().get(app.recipe_selected) {
                    app.modal = Modal::Recipe(item.clone());
                }
            }
            KeyCode::Esc => app.focus = Focus::Input,
            _ => {}
        },
    }
}

/// Handle one key on the shopping search screen.
pub fn handle_shopping_key(
    app: &mut AppState,
    ke: &KeyEvent,
    shop_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    match app.focus {
        Focus::Input => match ke.code {
            KeyCode::Char(c) => app.input.push(c),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Enter => {
                if app.input.trim().chars().count() < MIN_SHOP_QUERY_CHARS {
                    return;
                }
                let text = app.input.clone();
                if let Some(request) = app.shop_search.new_query(&text) {
                    app.shop_selected = 0;
                    let _ = shop_tx.send(request);
                }
            }
            KeyCode::Down => {
                if !app.shop_search.results().is_empty() {
                    app.focus = Focus::List;
                    app.shop_selected = 0;
                }
            }
            KeyCode::Esc => app.enter_screen(crate::state::Screen::Home),
            _ => {}
        },
        Focus::List => match ke.code {
            KeyCode::Up => {
                if app.shop_selected == 0 {
                    app.focus = Focus::Input;
                } else {
                    app.shop_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::PageDown => {
                let step = if ke.code == KeyCode::PageDown { 10 } else { 1 };
                let len = app.shop_search.results().len();
                if len > 0 {
                    app.shop_selected = (app.shop_selected + step).min(len - 1);
                }
                maybe_page_shopping(app, shop_tx);
            }
            KeyCode::Enter => {
                if let Some(item) = app.shop_search.results().get(app.shop_selected) {
                    app.modal = Modal::Shopping(item.clone());
                }
            }
            KeyCode::Esc => app.focus = Focus::Input,
            _ => {}
        },
    }
}

/// Request the next recipe page when the selection sits on the last loaded
/// record and nothing is in flight.
fn maybe_page_recipes(app: &mut AppState, recipe_tx: &mpsc::UnboundedSender<RecipeFetch>) {
    let len = app.recipe_search.results().len();
    if len == 0 || app.recipe_selected + 1 < len || app.recipe_search.is_loading() {
        return;
    }
    if let Some(request) = app.recipe_search.load_next_page() {
        let _ = recipe_tx.send(RecipeFetch {
            request,
            field: app.recipe_mode.field(),
        });
    }
}

/// Request the next shopping page when the selection sits on the last
/// loaded record and nothing is in flight.
fn maybe_page_shopping(app: &mut AppState, shop_tx: &mpsc::UnboundedSender<PageRequest>) {
    let len = app.shop_search.results().len();
    if len == 0 || app.shop_selected + 1 < len || app.shop_search.is_loading() {
        return;
    }
    if let Some(request) = app.shop_search.load_next_page() {
        let _ = shop_tx.send(request);
    }
}
