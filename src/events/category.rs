//! Key handling for the category drill-down screen.
//!
//! While the tree is loading nothing is selectable. Browsing moves over
//! the current level; Enter descends or, on a leaf, dispatches a product
//! fetch through the product controller. Back (Esc/Left/Backspace) leaves
//! the product view first, then pops breadcrumb levels, and finally hands
//! control back to the home screen once the path is empty.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::catalog::Selection;
use crate::state::{AppState, Modal, PageRequest, Screen};

/// Handle one key on the category screen.
pub fn handle_key(app: &mut AppState, ke: &KeyEvent, shop_tx: &mpsc::UnboundedSender<PageRequest>) {
    if app.category_tree.is_none() {
        // Tree still loading (or its load failed): nothing is selectable.
        if ke.code == KeyCode::Esc {
            app.enter_screen(Screen::Home);
        }
        return;
    }

    if app.nav.showing_products() {
        handle_products_key(app, ke, shop_tx);
    } else {
        handle_browse_key(app, ke, shop_tx);
    }
}

/// Keys while the product list of a leaf category is shown.
fn handle_products_key(
    app: &mut AppState,
    ke: &KeyEvent,
    shop_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let len = app.nav.current_results().len();
    match ke.code {
        KeyCode::Up => {
            app.category_selected = app.category_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::PageDown => {
            let step = if ke.code == KeyCode::PageDown { 10 } else { 1 };
            if len > 0 {
                app.category_selected = (app.category_selected + step).min(len - 1);
            }
            maybe_page_products(app, shop_tx);
        }
        KeyCode::Enter => {
            if let Some(item) = app.nav.current_results().get(app.category_selected) {
                app.modal = Modal::Shopping(item.clone());
            }
        }
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => {
            app.nav.clear_results();
            app.products.reset();
            app.category_selected = 0;
        }
        _ => {}
    }
}

/// Keys while browsing category levels.
fn handle_browse_key(
    app: &mut AppState,
    ke: &KeyEvent,
    shop_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let level_len = app
        .category_tree
        .as_ref()
        .map_or(0, |tree| app.nav.current_level(tree).len());
    match ke.code {
        KeyCode::Up => {
            app.category_selected = app.category_selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if level_len > 0 {
                app.category_selected = (app.category_selected + 1).min(level_len - 1);
            }
        }
        KeyCode::Enter | KeyCode::Right => {
            let node = app.category_tree.as_ref().and_then(|tree| {
                app.nav
                    .current_level(tree)
                    .get(app.category_selected)
                    .cloned()
            });
            if let Some(node) = node {
                match app.nav.select_category(&node) {
                    Selection::Descend => app.category_selected = 0,
                    Selection::FetchLeaf(query) => {
                        app.category_selected = 0;
                        if let Some(request) = app.products.new_query(&query) {
                            let _ = shop_tx.send(request);
                        }
                    }
                }
            }
        }
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => {
            if app.nav.go_back() {
                app.category_selected = 0;
            } else {
                // Sole backward-navigation authority said "leave": pop the
                // screen without touching navigation again.
                app.enter_screen(Screen::Home);
            }
        }
        _ => {}
    }
}

/// Request the next product page when the selection sits on the last
/// loaded record and nothing is in flight.
fn maybe_page_products(app: &mut AppState, shop_tx: &mpsc::UnboundedSender<PageRequest>) {
    let len = app.nav.current_results().len();
    if len == 0 || app.category_selected + 1 < len || app.products.is_loading() {
        return;
    }
    if let Some(request) = app.products.load_next_page() {
        let _ = shop_tx.send(request);
    }
}
