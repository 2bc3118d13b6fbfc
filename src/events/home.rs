//! Key handling for the home screen's featured feeds.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::state::{AppState, Modal, PageRequest, RecipeFetch, RecipeField};

/// Handle one key on the home screen.
///
/// Up/Down move over the featured product list below the banner; Enter
/// opens the product detail; `r` re-dispatches both featured feeds.
pub fn handle_key(
    app: &mut AppState,
    ke: &KeyEvent,
    recipe_tx: &mpsc::UnboundedSender<RecipeFetch>,
    shop_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let len = app.home_rest().len();
    match ke.code {
        KeyCode::Up => {
            app.home_selected = app.home_selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if len > 0 {
                app.home_selected = (app.home_selected + 1).min(len - 1);
            }
        }
        KeyCode::Enter => {
            if let Some(item) = app.home_rest().get(app.home_selected) {
                app.modal = Modal::Shopping(item.clone());
            }
        }
        KeyCode::Char('r') => refresh_feeds(app, recipe_tx, shop_tx),
        _ => {}
    }
}

/// Re-dispatch the featured feeds with the configured default queries.
fn refresh_feeds(
    app: &mut AppState,
    recipe_tx: &mpsc::UnboundedSender<RecipeFetch>,
    shop_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let recipe_query = app.settings.home_recipe_category.clone();
    if let Some(request) = app.home_recipes.new_query(&recipe_query) {
        let _ = recipe_tx.send(RecipeFetch {
            request,
            field: RecipeField::DishType,
        });
    }
    if app.settings.has_naver_credentials() {
        let shop_query = app.settings.home_shop_query.clone();
        if let Some(request) = app.home_shop.new_query(&shop_query) {
            let _ = shop_tx.send(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{press, test_channels};
    use super::*;
    use crossterm::event::Event as CEvent;

    /// Unwrap a key event from the test helper.
    fn key(code: KeyCode) -> KeyEvent {
        match press(code) {
            CEvent::Key(ke) => ke,
            _ => unreachable!("press builds key events"),
        }
    }

    #[test]
    /// What: Refresh dispatches the recipe feed but skips shopping without
    /// credentials
    ///
    /// - Input: `r` with empty Naver credentials
    /// - Output: One recipe fetch on the dish-type field; no shop request
    fn home_refresh_respects_missing_credentials() {
        let (rtx, mut rrx, stx, mut srx) = test_channels();
        let mut app = AppState::default();
        handle_key(&mut app, &key(KeyCode::Char('r')), &rtx, &stx);
        let fetch = rrx.try_recv().expect("recipe fetch");
        assert_eq!(fetch.field, RecipeField::DishType);
        assert_eq!(fetch.request.query, "반찬");
        assert!(srx.try_recv().is_err());
    }

    #[test]
    /// What: Refresh dispatches both feeds when credentials exist
    ///
    /// - Input: `r` with credentials configured
    /// - Output: One recipe fetch and one shop request with the default query
    fn home_refresh_dispatches_both_feeds() {
        let (rtx, mut rrx, stx, mut srx) = test_channels();
        let mut app = AppState::default();
        app.settings.naver_client_id = "id".to_owned();
        app.settings.naver_client_secret = "secret".to_owned();
        handle_key(&mut app, &key(KeyCode::Char('r')), &rtx, &stx);
        assert!(rrx.try_recv().is_ok());
        let req = srx.try_recv().expect("shop request");
        assert_eq!(req.query, "고양이집");
    }
}
