//! COOKRCP01 recipe database adapter.
//!
//! The service addresses pages by an inclusive 1-based index range in the
//! URL path and optionally appends a search segment for the menu name
//! (`RCP_NM=`) or the ingredient list (`RCP_PARTS_DTLS=`). A page with no
//! matches arrives without a `row` array; that is a normal empty page.

use serde_json::Value;

use crate::state::types::RecipeField;
use crate::state::{RecipeItem, RecipeStep};
use crate::util::{percent_encode, s, split_ingredients};

/// Connection parameters for the recipe service, cloned into the worker.
#[derive(Clone, Debug)]
pub struct RecipeApi {
    /// Base URL up to the `/api` segment.
    pub base_url: String,
    /// Caller key segment of the endpoint path.
    pub api_key: String,
}

/// Highest `MANUALxx` column index in the payload.
const MANUAL_COLUMNS: u32 = 20;

/// Build the request URL for one page.
///
/// `start`/`size` map to the service's inclusive index range; a non-blank
/// `query` appends the search segment for the chosen field.
fn request_url(api: &RecipeApi, query: &str, start: u32, size: u32, field: RecipeField) -> String {
    let end = start + size - 1;
    let mut url = format!(
        "{}/{}/COOKRCP01/json/{start}/{end}",
        api.base_url.trim_end_matches('/'),
        api.api_key
    );
    let q = query.trim();
    if !q.is_empty() {
        url.push('/');
        url.push_str(field.api_param());
        url.push('=');
        url.push_str(&percent_encode(q));
    }
    url
}

/// Fetch one page of recipes.
///
/// Returns at most `size` records; an empty vector signals the end of the
/// result stream and is not an error.
pub async fn fetch_recipe_page(
    api: &RecipeApi,
    query: &str,
    start: u32,
    size: u32,
    field: RecipeField,
) -> super::Result<Vec<RecipeItem>> {
    let url = request_url(api, query, start, size, field);
    tracing::debug!(%url, "recipe page request");
    let v = super::get_json(&url, &[]).await?;
    let body = v
        .get("COOKRCP01")
        .ok_or("unexpected recipe payload: missing COOKRCP01")?;
    Ok(parse_rows(body))
}

/// Parse the `row` array; a missing array is a valid empty page.
fn parse_rows(body: &Value) -> Vec<RecipeItem> {
    body.get("row")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().filter_map(parse_item).collect())
        .unwrap_or_default()
}

/// Parse one recipe object; rows without an id or name are skipped.
fn parse_item(obj: &Value) -> Option<RecipeItem> {
    let id = s(obj, "RCP_SEQ");
    let name = s(obj, "RCP_NM");
    if id.is_empty() || name.is_empty() {
        return None;
    }
    Some(RecipeItem {
        id,
        name,
        category: s(obj, "RCP_PAT2"),
        method: s(obj, "RCP_WAY2"),
        ingredients: split_ingredients(&s(obj, "RCP_PARTS_DTLS")),
        image: s(obj, "ATT_FILE_NO_MAIN"),
        steps: parse_steps(obj),
    })
}

/// Pair `MANUAL01..20` with `MANUAL_IMG01..20` positionally, keeping only
/// steps where both the text and the image are present.
fn parse_steps(obj: &Value) -> Vec<RecipeStep> {
    let mut steps = Vec::new();
    for i in 1..=MANUAL_COLUMNS {
        let text = s(obj, &format!("MANUAL{i:02}"));
        let image = s(obj, &format!("MANUAL_IMG{i:02}"));
        if text.trim().is_empty() || image.trim().is_empty() {
            continue;
        }
        steps.push(RecipeStep {
            text: text.trim().to_owned(),
            image: image.trim().to_owned(),
        });
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixture connection parameters.
    fn api() -> RecipeApi {
        RecipeApi {
            base_url: "http://openapi.foodsafetykorea.go.kr/api".to_owned(),
            api_key: "sample".to_owned(),
        }
    }

    #[test]
    /// What: URL building maps the window to an inclusive index range
    ///
    /// - Input: start=11, size=10 with and without a query
    /// - Output: `/11/20` path; search segment appended only with a query
    fn recipes_request_url_window_and_query() {
        let plain = request_url(&api(), "", 11, 10, RecipeField::Name);
        assert_eq!(
            plain,
            "http://openapi.foodsafetykorea.go.kr/api/sample/COOKRCP01/json/11/20"
        );
        let named = request_url(&api(), "김치", 1, 10, RecipeField::Name);
        assert!(named.ends_with("/1/10/RCP_NM=%EA%B9%80%EC%B9%98"));
        let ingred = request_url(&api(), "두부", 1, 10, RecipeField::Ingredient);
        assert!(ingred.contains("/RCP_PARTS_DTLS="));
        let dish = request_url(&api(), "반찬", 1, 10, RecipeField::DishType);
        assert!(dish.contains("/RCP_PAT2="));
    }

    #[test]
    /// What: Row parsing extracts fields and pairs manual steps
    ///
    /// - Input: One row with two complete steps and one imageless step
    /// - Output: Item with parsed ingredients and exactly two steps
    fn recipes_parse_rows_pairs_steps() {
        let body = serde_json::json!({
            "total_count": "1",
            "row": [{
                "RCP_SEQ": "28",
                "RCP_NM": "두부조림",
                "RCP_PAT2": "반찬",
                "RCP_WAY2": "끓이기",
                "RCP_PARTS_DTLS": "두부, 간장·파",
                "ATT_FILE_NO_MAIN": "http://img/28.jpg",
                "MANUAL01": "두부를 썬다",
                "MANUAL_IMG01": "http://img/s1.jpg",
                "MANUAL02": "양념을 끼얹는다",
                "MANUAL_IMG02": "http://img/s2.jpg",
                "MANUAL03": "이미지 없는 단계",
                "MANUAL_IMG03": ""
            }]
        });
        let items = parse_rows(&body);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, "28");
        assert_eq!(item.ingredients, vec!["두부", "간장", "파"]);
        assert_eq!(item.steps.len(), 2);
        assert_eq!(item.steps[1].text, "양념을 끼얹는다");
    }

    #[test]
    /// What: A payload without rows is an empty page, not an error
    ///
    /// - Input: Body carrying only a RESULT envelope
    /// - Output: Zero items
    fn recipes_parse_rows_missing_array() {
        let body = serde_json::json!({"RESULT": {"CODE": "INFO-200"}});
        assert!(parse_rows(&body).is_empty());
    }

    #[test]
    /// What: Rows without an id or name are skipped silently
    ///
    /// - Input: One valid and one id-less row
    /// - Output: Only the valid row survives
    fn recipes_parse_rows_skips_incomplete() {
        let body = serde_json::json!({
            "row": [
                {"RCP_SEQ": "", "RCP_NM": "이름"},
                {"RCP_SEQ": "2", "RCP_NM": "갈비찜"}
            ]
        });
        let items = parse_rows(&body);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "2");
    }
}
