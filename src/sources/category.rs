//! Category source: bundled CSV with an optional user override.
//!
//! The category sheet ships inside the binary so the navigation screen
//! works out of the box; a `category_csv` path in settings replaces it.

use std::path::Path;

use crate::catalog::{self, CategoryNode, build_tree, rows::read_rows};

/// Category sheet compiled into the binary.
pub const BUNDLED_CATEGORY_CSV: &str = include_str!("../../assets/category.csv");

/// Load rows from the override file or the bundled sheet and assemble the
/// category forest.
pub fn load_category_tree(override_path: Option<&Path>) -> catalog::Result<Vec<CategoryNode>> {
    let rows = match override_path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            read_rows(file)?
        }
        None => read_rows(BUNDLED_CATEGORY_CSV.as_bytes())?,
    };
    Ok(build_tree(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The bundled sheet parses into a non-empty multi-level forest
    ///
    /// - Input: No override path
    /// - Output: Top-level categories exist and at least one has children
    fn category_bundled_sheet_builds_forest() {
        let tree = load_category_tree(None).expect("bundled sheet");
        assert!(!tree.is_empty());
        assert!(tree.iter().any(|major| !major.children.is_empty()));
    }

    #[test]
    /// What: An override file replaces the bundled sheet
    ///
    /// - Input: Temp CSV with one major and one minor
    /// - Output: Forest built from the override contents
    fn category_override_file_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("category.csv");
        std::fs::write(&path, "대분류,중분류,소분류\n간식,떡,\n").expect("write");
        let tree = load_category_tree(Some(&path)).expect("override sheet");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "간식");
        assert_eq!(tree[0].children[0].name, "떡");
    }

    #[test]
    /// What: A missing override path is a load failure
    ///
    /// - Input: Nonexistent file path
    /// - Output: Err (navigation stays on its loading indicator)
    fn category_missing_override_fails() {
        assert!(load_category_tree(Some(Path::new("/nonexistent/category.csv"))).is_err());
    }
}
