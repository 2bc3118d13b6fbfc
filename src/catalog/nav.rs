//! Breadcrumb navigation over the immutable category tree.
//!
//! The tracker owns the selected path and the product records shown for a
//! leaf. It performs no I/O: selecting a leaf returns the query text for
//! the caller to dispatch through its pagination controller, and the
//! fetched page is handed back via [`CategoryNav::set_results`].

use super::tree::CategoryNode;

/// Outcome of selecting a category at the current level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The node has children: show them; no fetch is needed.
    Descend,
    /// The node is a leaf: fetch products using this query text.
    FetchLeaf(String),
}

/// Breadcrumb state for the category screen, generic over the record type
/// shown at a leaf.
#[derive(Debug)]
pub struct CategoryNav<R> {
    /// Selected nodes from root to the current depth.
    path: Vec<CategoryNode>,
    /// Product records for the selected leaf; empty while browsing.
    current_results: Vec<R>,
}

impl<R> Default for CategoryNav<R> {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            current_results: Vec::new(),
        }
    }
}

impl<R> CategoryNav<R> {
    /// Fresh tracker at the root with no products.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` to the breadcrumb.
    ///
    /// A leaf asks the caller to fetch products with the node's name as
    /// query text; an interior node clears any leftover products so the
    /// child categories are shown instead.
    pub fn select_category(&mut self, node: &CategoryNode) -> Selection {
        self.path.push(node.clone());
        if node.is_leaf() {
            Selection::FetchLeaf(node.name.clone())
        } else {
            self.current_results.clear();
            Selection::Descend
        }
    }

    /// Pop one breadcrumb level.
    ///
    /// Returns `true` when a level was popped (the caller stays on the
    /// screen and re-renders one level up); popping down to the root also
    /// clears products. Returns `false` when the path was already empty:
    /// the caller must leave the screen and not re-invoke navigation.
    pub fn go_back(&mut self) -> bool {
        if self.path.is_empty() {
            return false;
        }
        self.path.pop();
        if self.path.is_empty() {
            self.current_results.clear();
        }
        true
    }

    /// Leave a leaf's product view back to its parent category list:
    /// clears products, then pops one level.
    pub fn clear_results(&mut self) -> bool {
        self.current_results.clear();
        self.go_back()
    }

    /// Install the fetched product page for the selected leaf.
    pub fn set_results(&mut self, items: Vec<R>) {
        self.current_results = items;
    }

    /// Selected nodes from root to the current depth.
    #[must_use]
    pub fn path(&self) -> &[CategoryNode] {
        &self.path
    }

    /// Product records for the selected leaf; empty while browsing.
    #[must_use]
    pub fn current_results(&self) -> &[R] {
        &self.current_results
    }

    /// Whether the screen should render products instead of categories.
    #[must_use]
    pub fn showing_products(&self) -> bool {
        !self.current_results.is_empty()
    }

    /// Category list for the current depth: the children of the deepest
    /// selected node, or the forest roots at the top.
    #[must_use]
    pub fn current_level<'a>(&'a self, roots: &'a [CategoryNode]) -> &'a [CategoryNode] {
        self.path.last().map_or(roots, |node| &node.children)
    }
}
