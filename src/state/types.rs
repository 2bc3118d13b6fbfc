//! Core value types shared by the state, networking, and UI layers.

/// One manual step of a recipe, paired with its illustration URL.
///
/// Steps come from the positional pairing of `MANUAL01..20` with
/// `MANUAL_IMG01..20`; only pairs where both sides are non-blank survive.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RecipeStep {
    /// Instruction text for this step.
    pub text: String,
    /// Image URL illustrating the step.
    pub image: String,
}

/// Minimal recipe summary used in lists and search results.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RecipeItem {
    /// Stable external identifier (`RCP_SEQ`); list-rendering key.
    pub id: String,
    /// Menu name (`RCP_NM`).
    pub name: String,
    /// Dish category such as 반찬 or 국 (`RCP_PAT2`).
    pub category: String,
    /// Cooking method such as 끓이기 (`RCP_WAY2`).
    pub method: String,
    /// Ingredient entries parsed from `RCP_PARTS_DTLS`.
    pub ingredients: Vec<String>,
    /// Main photo URL (`ATT_FILE_NO_MAIN`); textual metadata only in the TUI.
    pub image: String,
    /// Manual steps in order.
    pub steps: Vec<RecipeStep>,
}

/// Minimal shopping product summary used in lists and search results.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShoppingItem {
    /// Stable external identifier (`productId`); list-rendering key.
    pub product_id: String,
    /// Product title with HTML markup already stripped.
    pub title: String,
    /// Product page URL.
    pub link: String,
    /// Thumbnail URL.
    pub image: String,
    /// Lowest offered price in won, when the mall reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_price: Option<u64>,
    /// Highest offered price in won, when the mall reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_price: Option<u64>,
    /// Mall display name.
    pub mall_name: String,
    /// Brand name, often empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand: String,
    /// Manufacturer name, often empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maker: String,
    /// Naver category labels, broadest first (`category1..category4`).
    pub categories: Vec<String>,
}

/// Which list a paging request belongs to.
///
/// One `PagedQuery` instance owns each lane; outcomes are routed back to
/// the owning controller by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    /// Featured recipes on the home screen.
    HomeRecipes,
    /// Featured shopping feed on the home screen.
    HomeShopping,
    /// Recipe search screen.
    RecipeSearch,
    /// Shopping search screen.
    ShoppingSearch,
    /// Products fetched for a selected leaf category.
    CategoryProducts,
}

/// One paging window dispatched to a fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Owning controller's lane; echoed back in the outcome.
    pub lane: Lane,
    /// Monotonic per-controller ticket; stale outcomes are discarded.
    pub ticket: u64,
    /// Query text, non-blank by construction.
    pub query: String,
    /// 1-based offset of the first record in the window.
    pub start: u32,
    /// Number of records requested.
    pub size: u32,
}

/// Which recipe column a query filters on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecipeField {
    /// Menu name (`RCP_NM`).
    #[default]
    Name,
    /// Ingredient list (`RCP_PARTS_DTLS`).
    Ingredient,
    /// Dish category (`RCP_PAT2`); used by the featured home feed.
    DishType,
}

impl RecipeField {
    /// Column name used in the request path segment.
    #[must_use]
    pub const fn api_param(self) -> &'static str {
        match self {
            Self::Name => "RCP_NM",
            Self::Ingredient => "RCP_PARTS_DTLS",
            Self::DishType => "RCP_PAT2",
        }
    }
}

/// A recipe paging request together with its search field.
#[derive(Clone, Debug)]
pub struct RecipeFetch {
    /// The paging window.
    pub request: PageRequest,
    /// Column the query filters on.
    pub field: RecipeField,
}

/// Resolution of a previously dispatched [`PageRequest`].
#[derive(Clone, Debug)]
pub struct PageOutcome<R> {
    /// Lane echoed from the request.
    pub lane: Lane,
    /// Ticket echoed from the request.
    pub ticket: u64,
    /// Fetched page, or the transport error message.
    pub result: Result<Vec<R>, String>,
}

/// Which screen the UI is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Featured feeds.
    #[default]
    Home,
    /// Recipe search.
    Recipes,
    /// Shopping search.
    Shopping,
    /// Category drill-down browser.
    Categories,
}

/// Whether keyboard input edits the query line or moves the result list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Search input line has focus.
    #[default]
    Input,
    /// Result list has focus.
    List,
}

/// Search field for the recipe catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecipeSearchMode {
    /// Match against the menu name (`RCP_NM`).
    #[default]
    ByName,
    /// Match against the ingredient list (`RCP_PARTS_DTLS`).
    ByIngredient,
}

impl RecipeSearchMode {
    /// Flip between the two search fields.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ByName => Self::ByIngredient,
            Self::ByIngredient => Self::ByName,
        }
    }

    /// The request column this mode filters on.
    #[must_use]
    pub const fn field(self) -> RecipeField {
        match self {
            Self::ByName => RecipeField::Name,
            Self::ByIngredient => RecipeField::Ingredient,
        }
    }

    /// Short label for the footer hint.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ByName => "메뉴명",
            Self::ByIngredient => "재료",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecipeSearchMode;

    #[test]
    /// What: Search mode toggling alternates between the two fields
    ///
    /// - Input: Default mode toggled twice
    /// - Output: ByIngredient after one toggle, ByName after two
    fn types_recipe_mode_toggle_roundtrip() {
        let m = RecipeSearchMode::default();
        assert_eq!(m, RecipeSearchMode::ByName);
        assert_eq!(m.toggled(), RecipeSearchMode::ByIngredient);
        assert_eq!(m.toggled().toggled(), RecipeSearchMode::ByName);
    }
}
