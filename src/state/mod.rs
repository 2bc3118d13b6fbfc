//! State module: value types, modal state, and the central [`AppState`].

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::{AppState, HOME_BANNER_COUNT};
pub use modal::Modal;
pub use types::{
    Focus, Lane, PageOutcome, PageRequest, RecipeFetch, RecipeField, RecipeItem, RecipeSearchMode,
    RecipeStep, Screen, ShoppingItem,
};
