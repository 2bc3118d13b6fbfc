//! Integration tests for the category pipeline: CSV rows → tree →
//! breadcrumb navigation → leaf product fetch.

use banchan::app::handlers::handle_shopping_page;
use banchan::catalog::{CategoryRow, Selection, build_tree, rows::read_rows};
use banchan::state::{AppState, Lane, PageOutcome, ShoppingItem};

/// What: Build a product with the given id.
///
/// Inputs:
/// - `id`: Stable product id
///
/// Output:
/// - `ShoppingItem` ready for testing
fn product(id: &str) -> ShoppingItem {
    ShoppingItem {
        product_id: id.to_owned(),
        ..Default::default()
    }
}

#[test]
/// What: CSV data flows through row expansion into the expected forest.
///
/// Inputs:
/// - Header-keyed CSV with bracketed parallel lists and a sentinel entry.
///
/// Output:
/// - Deduplicated two-level forest in first-seen order.
fn category_csv_to_tree_end_to_end() {
    let csv = "대분류,중분류,소분류\n\
생활/건강,\"['반려동물용품', '주방용품']\",\"['고양이용품', '없음']\"\n\
생활/건강,\"['반려동물용품']\",\"['강아지용품']\"\n\
면세점,,\n";
    let rows = read_rows(csv.as_bytes()).expect("rows");
    let tree = build_tree(&rows);

    let names: Vec<&str> = tree.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["생활/건강", "면세점"]);

    let pets = &tree[0].children[0];
    assert_eq!(pets.name, "반려동물용품");
    let subs: Vec<&str> = pets.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(subs, vec!["고양이용품", "강아지용품"]);

    // 주방용품 got the sentinel sub, so it stays a leaf.
    assert!(tree[0].children[1].is_leaf());
    assert!(tree[1].is_leaf());
}

#[test]
/// What: Tree building is idempotent over the bundled sheet shape.
///
/// Inputs:
/// - The same expanded row set built twice.
///
/// Output:
/// - Structurally equal forests.
fn category_tree_idempotent_end_to_end() {
    let rows = vec![
        CategoryRow::new("국", "", ""),
        CategoryRow::new("반찬", "무침", ""),
        CategoryRow::new("반찬", "볶음", ""),
    ];
    assert_eq!(build_tree(&rows), build_tree(&rows));
}

#[test]
/// What: Selecting a leaf drives a product fetch and fills the tracker.
///
/// Inputs:
/// - Tree with a leaf; selection, dispatch through the product
///   controller, and the page outcome.
///
/// Output:
/// - Request named after the leaf on the products lane; tracker shows the
///   page; breadcrumb ends in the leaf.
fn category_leaf_selection_fetches_products() {
    let rows = vec![CategoryRow::new("생활/건강", "반려동물용품", "")];
    let tree = build_tree(&rows);
    let mut app = AppState::default();

    let major = tree[0].clone();
    assert_eq!(app.nav.select_category(&major), Selection::Descend);
    let leaf = major.children[0].clone();
    let Selection::FetchLeaf(query) = app.nav.select_category(&leaf) else {
        panic!("leaf must request a fetch");
    };
    assert_eq!(query, "반려동물용품");

    let request = app.products.new_query(&query).expect("request");
    assert_eq!(request.lane, Lane::CategoryProducts);
    assert_eq!(request.start, 1);
    handle_shopping_page(
        &mut app,
        PageOutcome {
            lane: request.lane,
            ticket: request.ticket,
            result: Ok(vec![product("1"), product("2")]),
        },
    );
    assert_eq!(app.nav.current_results().len(), 2);
    assert_eq!(
        app.nav.path().last().map(|n| n.name.as_str()),
        Some("반려동물용품")
    );
}

#[test]
/// What: Back-navigation walks up one level at a time and signals exit.
///
/// Inputs:
/// - Two-level selection, then repeated `go_back`.
///
/// Output:
/// - Two `true` pops, then `false` with no further mutation.
fn category_back_walks_to_exit() {
    let rows = vec![CategoryRow::new("생활/건강", "반려동물용품", "")];
    let tree = build_tree(&rows);
    let mut app = AppState::default();
    let major = tree[0].clone();
    app.nav.select_category(&major);
    let leaf = major.children[0].clone();
    app.nav.select_category(&leaf);
    app.nav.set_results(vec![product("1")]);

    assert!(app.nav.go_back());
    assert_eq!(app.nav.path().len(), 1);
    assert!(app.nav.go_back());
    assert!(app.nav.path().is_empty());
    // Root reached: products were cleared alongside the final pop.
    assert!(app.nav.current_results().is_empty());
    assert!(!app.nav.go_back());
    assert!(app.nav.path().is_empty());
}

#[test]
/// What: A failed product fetch leaves the tracker empty but keeps the
/// breadcrumb.
///
/// Inputs:
/// - Leaf selection whose fetch fails.
///
/// Output:
/// - No products installed; path still ends in the leaf; error recorded
///   on the product controller.
fn category_failed_product_fetch_keeps_breadcrumb() {
    let rows = vec![CategoryRow::new("식품", "", "")];
    let tree = build_tree(&rows);
    let mut app = AppState::default();
    let Selection::FetchLeaf(query) = app.nav.select_category(&tree[0]) else {
        panic!("leaf must request a fetch");
    };
    let request = app.products.new_query(&query).expect("request");
    handle_shopping_page(
        &mut app,
        PageOutcome {
            lane: request.lane,
            ticket: request.ticket,
            result: Err("HTTP 429".to_owned()),
        },
    );
    assert!(app.nav.current_results().is_empty());
    assert_eq!(app.nav.path().len(), 1);
    assert_eq!(app.products.last_error(), Some("HTTP 429"));
}
