//! Remote data retrieval: the recipe and shopping fetch adapters and the
//! category row loader.

use std::sync::OnceLock;

use serde_json::Value;

mod category;
mod recipes;
mod shopping;

/// Error type shared by the source adapters.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Process-wide HTTP client, built once and reused for connection pooling.
fn client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Fetch `url` with the given extra headers and parse the body as JSON.
///
/// Non-2xx statuses become errors so callers see one failure path.
async fn get_json(url: &str, headers: &[(&str, &str)]) -> Result<Value> {
    let mut req = client().get(url);
    for (name, value) in headers {
        req = req.header(*name, *value);
    }
    let resp = req.send().await?.error_for_status()?;
    Ok(resp.json::<Value>().await?)
}

pub use category::{BUNDLED_CATEGORY_CSV, load_category_tree};
pub use recipes::{RecipeApi, fetch_recipe_page};
pub use shopping::{ShoppingApi, fetch_shopping_page};
