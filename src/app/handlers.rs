//! Application of worker outcomes to the central state.
//!
//! Each handler routes an outcome to the controller owning its lane. The
//! controller's ticket check decides whether the outcome still matters; a
//! fetch failure that landed surfaces once as an alert modal.

use crate::app::workers::CategoryLoad;
use crate::state::{AppState, Lane, Modal, PageOutcome, RecipeItem, ShoppingItem};

/// Route a recipe page outcome to its controller.
pub fn handle_recipe_page(app: &mut AppState, outcome: PageOutcome<RecipeItem>) {
    let pager = match outcome.lane {
        Lane::HomeRecipes => &mut app.home_recipes,
        Lane::RecipeSearch => &mut app.recipe_search,
        _ => {
            tracing::warn!(lane = ?outcome.lane, "recipe outcome on a non-recipe lane");
            return;
        }
    };
    let applied = pager.apply(outcome.ticket, outcome.result);
    if !applied {
        return;
    }
    surface_error(app, outcome.lane);
    app.recipe_selected = app
        .recipe_selected
        .min(app.recipe_search.results().len().saturating_sub(1));
}

/// Route a shopping page outcome to its controller; leaf-category pages
/// also refresh the navigation tracker's product view.
pub fn handle_shopping_page(app: &mut AppState, outcome: PageOutcome<ShoppingItem>) {
    let pager = match outcome.lane {
        Lane::HomeShopping => &mut app.home_shop,
        Lane::ShoppingSearch => &mut app.shop_search,
        Lane::CategoryProducts => &mut app.products,
        _ => {
            tracing::warn!(lane = ?outcome.lane, "shopping outcome on a non-shopping lane");
            return;
        }
    };
    let applied = pager.apply(outcome.ticket, outcome.result);
    if !applied {
        return;
    }
    if outcome.lane == Lane::CategoryProducts && app.products.last_error().is_none() {
        app.nav.set_results(app.products.results().to_vec());
        app.category_selected = app
            .category_selected
            .min(app.nav.current_results().len().saturating_sub(1));
    }
    surface_error(app, outcome.lane);
    app.shop_selected = app
        .shop_selected
        .min(app.shop_search.results().len().saturating_sub(1));
}

/// Install the loaded category tree, or log the failure and leave the
/// navigation screen on its loading indicator.
pub fn handle_category_tree(app: &mut AppState, load: CategoryLoad) {
    match load {
        Ok(tree) => {
            tracing::info!(majors = tree.len(), "category tree loaded");
            app.category_tree = Some(tree);
        }
        Err(message) => {
            // Navigation stays unselectable; the loading indicator remains.
            tracing::error!(error = %message, "category tree load failed");
        }
    }
}

/// Surface a just-recorded fetch failure once as an alert modal.
fn surface_error(app: &mut AppState, lane: Lane) {
    let error = match lane {
        Lane::HomeRecipes => app.home_recipes.last_error(),
        Lane::HomeShopping => app.home_shop.last_error(),
        Lane::RecipeSearch => app.recipe_search.last_error(),
        Lane::ShoppingSearch => app.shop_search.last_error(),
        Lane::CategoryProducts => app.products.last_error(),
    };
    if let Some(message) = error {
        app.modal = Modal::Alert {
            message: message.to_owned(),
        };
    }
}
