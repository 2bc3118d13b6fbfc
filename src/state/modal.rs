//! Modal dialog state for the UI.

use crate::state::types::{RecipeItem, ShoppingItem};

/// Active modal overlay, if any.
#[derive(Clone, Debug, Default)]
pub enum Modal {
    /// No modal; the current screen has the keyboard.
    #[default]
    None,
    /// Informational alert with a non-interactive message; dismissed with
    /// Esc/Enter.
    Alert {
        /// Message text shown in the dialog.
        message: String,
    },
    /// Keybinding help overlay.
    Help,
    /// Detail view of one recipe (ingredients and manual steps).
    Recipe(RecipeItem),
    /// Detail view of one shopping product.
    Shopping(ShoppingItem),
}

impl Modal {
    /// Whether any modal is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
