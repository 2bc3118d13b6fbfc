//! Central application state mutated by the event loop.
//!
//! Holds the per-screen pagination controllers, the category tree and its
//! navigation tracker, the search input line, and per-list selection
//! state. Controllers are constructed here, owned by the presentation
//! layer, and live exactly as long as the session — no global singletons.

use ratatui::widgets::ListState;

use crate::catalog::{CategoryNav, CategoryNode};
use crate::config::Settings;
use crate::query::PagedQuery;
use crate::state::modal::Modal;
use crate::state::types::{
    Focus, Lane, RecipeItem, RecipeSearchMode, Screen, ShoppingItem,
};

/// How many featured products the home screen lifts into the banner strip.
pub const HOME_BANNER_COUNT: usize = 5;

/// Application state shared by the event, networking, and UI layers.
#[derive(Debug)]
pub struct AppState {
    /// Screen currently shown.
    pub screen: Screen,
    /// Whether typing edits the query line or moves the list.
    pub focus: Focus,
    /// Search input text for the active search screen.
    pub input: String,
    /// Search field for the recipe screen (name or ingredient).
    pub recipe_mode: RecipeSearchMode,
    /// Active modal overlay.
    pub modal: Modal,

    /// Featured recipes controller (home screen).
    pub home_recipes: PagedQuery<RecipeItem>,
    /// Featured shopping feed controller (home screen).
    pub home_shop: PagedQuery<ShoppingItem>,
    /// Recipe search controller.
    pub recipe_search: PagedQuery<RecipeItem>,
    /// Shopping search controller.
    pub shop_search: PagedQuery<ShoppingItem>,
    /// Leaf-category product controller.
    pub products: PagedQuery<ShoppingItem>,

    /// Category forest; `None` until the load worker delivers it.
    pub category_tree: Option<Vec<CategoryNode>>,
    /// Breadcrumb tracker over the tree.
    pub nav: CategoryNav<ShoppingItem>,

    /// Selection index for the home list.
    pub home_selected: usize,
    /// Render state for the home list.
    pub home_list: ListState,
    /// Selection index for the recipe results list.
    pub recipe_selected: usize,
    /// Render state for the recipe results list.
    pub recipe_list: ListState,
    /// Selection index for the shopping results list.
    pub shop_selected: usize,
    /// Render state for the shopping results list.
    pub shop_list: ListState,
    /// Selection index for the category/product list.
    pub category_selected: usize,
    /// Render state for the category/product list.
    pub category_list: ListState,

    /// Loaded settings (default queries, page sizes, credentials).
    pub settings: Settings,
}

impl AppState {
    /// Construct the session state from loaded settings, sizing each
    /// controller's window from the configuration.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            screen: Screen::Home,
            focus: Focus::Input,
            input: String::new(),
            recipe_mode: RecipeSearchMode::ByName,
            modal: Modal::None,
            home_recipes: PagedQuery::new(Lane::HomeRecipes, settings.recipe_page_size),
            home_shop: PagedQuery::new(Lane::HomeShopping, settings.shop_page_size),
            recipe_search: PagedQuery::new(Lane::RecipeSearch, settings.recipe_page_size),
            shop_search: PagedQuery::new(Lane::ShoppingSearch, settings.shop_page_size),
            products: PagedQuery::new(Lane::CategoryProducts, settings.shop_page_size),
            category_tree: None,
            nav: CategoryNav::new(),
            home_selected: 0,
            home_list: ListState::default(),
            recipe_selected: 0,
            recipe_list: ListState::default(),
            shop_selected: 0,
            shop_list: ListState::default(),
            category_selected: 0,
            category_list: ListState::default(),
            settings,
        }
    }

    /// Featured products lifted into the home banner strip.
    #[must_use]
    pub fn home_banner(&self) -> &[ShoppingItem] {
        let items = self.home_shop.results();
        &items[..items.len().min(HOME_BANNER_COUNT)]
    }

    /// Featured products below the banner strip.
    #[must_use]
    pub fn home_rest(&self) -> &[ShoppingItem] {
        let items = self.home_shop.results();
        &items[items.len().min(HOME_BANNER_COUNT)..]
    }

    /// Whether any controller relevant to the current screen is loading.
    #[must_use]
    pub fn screen_loading(&self) -> bool {
        match self.screen {
            Screen::Home => self.home_recipes.is_loading() || self.home_shop.is_loading(),
            Screen::Recipes => self.recipe_search.is_loading(),
            Screen::Shopping => self.shop_search.is_loading(),
            Screen::Categories => self.products.is_loading() || self.category_tree.is_none(),
        }
    }

    /// Reset search state when a search screen is entered, mirroring the
    /// screen-enter reset of the original flow.
    pub fn enter_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.focus = Focus::Input;
        self.input.clear();
        match screen {
            Screen::Recipes => {
                self.recipe_search.reset();
                self.recipe_selected = 0;
                self.recipe_list = ListState::default();
            }
            Screen::Shopping => {
                self.shop_search.reset();
                self.shop_selected = 0;
                self.shop_list = ListState::default();
            }
            Screen::Categories => {
                self.category_selected = 0;
                self.category_list = ListState::default();
            }
            Screen::Home => {}
        }
    }
}

impl Default for AppState {
    /// State with built-in defaults; used by tests and as the base before
    /// settings are loaded.
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
