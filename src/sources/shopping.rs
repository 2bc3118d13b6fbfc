//! Naver Shopping search adapter.
//!
//! One GET per page against `shop.json`, signed with the two Naver client
//! headers. Offsets are 1-based and caller-managed; `display` bounds the
//! page size. Item titles arrive with `<b>` markup which is stripped here
//! so the rest of the program never sees HTML.

use serde_json::Value;

use crate::state::ShoppingItem;
use crate::util::{percent_encode, s, strip_html, u64_of};

/// Connection parameters for the shopping API, cloned into the worker.
#[derive(Clone, Debug)]
pub struct ShoppingApi {
    /// Search endpoint URL.
    pub base_url: String,
    /// `X-Naver-Client-Id` header value.
    pub client_id: String,
    /// `X-Naver-Client-Secret` header value.
    pub client_secret: String,
}

/// Build the request URL for one page.
fn request_url(api: &ShoppingApi, query: &str, start: u32, display: u32) -> String {
    format!(
        "{}?query={}&display={display}&start={start}&sort=sim",
        api.base_url,
        percent_encode(query.trim())
    )
}

/// Fetch one page of products.
///
/// Fails fast with a readable message when credentials are missing so the
/// user learns about configuration instead of a cryptic 401.
pub async fn fetch_shopping_page(
    api: &ShoppingApi,
    query: &str,
    start: u32,
    display: u32,
) -> super::Result<Vec<ShoppingItem>> {
    if api.client_id.is_empty() || api.client_secret.is_empty() {
        return Err("Naver API credentials are not configured (settings.toml or BANCHAN_NAVER_CLIENT_ID/_SECRET)".into());
    }
    let url = request_url(api, query, start, display);
    tracing::debug!(%url, "shopping page request");
    let v = super::get_json(
        &url,
        &[
            ("X-Naver-Client-Id", api.client_id.as_str()),
            ("X-Naver-Client-Secret", api.client_secret.as_str()),
        ],
    )
    .await?;
    Ok(parse_items(&v))
}

/// Parse the `items` array; a missing array is a valid empty page.
fn parse_items(v: &Value) -> Vec<ShoppingItem> {
    v.get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_item).collect())
        .unwrap_or_default()
}

/// Parse one product object; entries without a product id are skipped.
fn parse_item(obj: &Value) -> Option<ShoppingItem> {
    let product_id = s(obj, "productId");
    if product_id.is_empty() {
        return None;
    }
    let categories = ["category1", "category2", "category3", "category4"]
        .into_iter()
        .map(|key| s(obj, key))
        .filter(|label| !label.is_empty())
        .collect();
    Some(ShoppingItem {
        product_id,
        title: strip_html(&s(obj, "title")),
        link: s(obj, "link"),
        image: s(obj, "image"),
        low_price: u64_of(obj, "lprice"),
        high_price: u64_of(obj, "hprice"),
        mall_name: s(obj, "mallName"),
        brand: s(obj, "brand"),
        maker: s(obj, "maker"),
        categories,
    })
}
