//! Category tree assembly from flat label triples.
//!
//! Rows are inserted independently: each walks from the implicit root and
//! at every depth finds-or-creates a node keyed by name, so repeated paths
//! are deduplicated and sibling order is first-seen order. Construction
//! goes through an arena keyed by (parent index, name); the arena is
//! frozen into parent-owned child lists at the end, and the resulting
//! forest is immutable for the rest of the session.

use std::collections::HashMap;

use super::rows::{CategoryRow, NONE_SENTINEL};

/// One node of the category forest.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryNode {
    /// Display label, unique among its siblings.
    pub name: String,
    /// Child categories in first-seen order; empty means this category is
    /// directly queryable.
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Whether this node has no finer categories and can be used verbatim
    /// as product query text.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Node under construction inside the arena.
#[derive(Debug, Default)]
struct ArenaNode {
    /// Display label.
    name: String,
    /// Arena indices of the children in first-seen order.
    children: Vec<usize>,
}

/// Arena-backed builder used for one `build_tree` pass.
#[derive(Debug, Default)]
struct TreeBuilder {
    /// All nodes created so far.
    nodes: Vec<ArenaNode>,
    /// Arena indices of the top-level nodes in first-seen order.
    roots: Vec<usize>,
    /// Dedup table: (parent arena index, label) → arena index.
    index: HashMap<(Option<usize>, String), usize>,
}

impl TreeBuilder {
    /// Insert one root-to-leaf path, truncating at the first blank or
    /// sentinel label. Deeper labels after a blank are ignored.
    fn insert_path(&mut self, labels: &[&str]) {
        let mut parent: Option<usize> = None;
        for raw in labels {
            let label = raw.trim();
            if label.is_empty() || label == NONE_SENTINEL {
                break;
            }
            parent = Some(self.find_or_create(parent, label));
        }
    }

    /// Reuse the existing sibling named `label` under `parent`, or append
    /// a new node preserving first-seen order.
    fn find_or_create(&mut self, parent: Option<usize>, label: &str) -> usize {
        if let Some(&existing) = self.index.get(&(parent, label.to_owned())) {
            return existing;
        }
        let idx = self.nodes.len();
        self.nodes.push(ArenaNode {
            name: label.to_owned(),
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(idx),
            None => self.roots.push(idx),
        }
        self.index.insert((parent, label.to_owned()), idx);
        idx
    }

    /// Freeze the arena into an owned, immutable forest.
    fn freeze(self) -> Vec<CategoryNode> {
        self.roots
            .iter()
            .map(|&root| materialize(&self.nodes, root))
            .collect()
    }
}

/// Recursively copy one arena subtree into an owned node. Depth is bounded
/// by the number of source columns (three).
fn materialize(nodes: &[ArenaNode], idx: usize) -> CategoryNode {
    CategoryNode {
        name: nodes[idx].name.clone(),
        children: nodes[idx]
            .children
            .iter()
            .map(|&child| materialize(nodes, child))
            .collect(),
    }
}

/// Build the category forest from flat rows.
///
/// Rows are processed independently in order; malformed rows (blank major)
/// contribute nothing. The operation is pure and idempotent: the same rows
/// always produce a structurally equal forest.
#[must_use]
pub fn build_tree(rows: &[CategoryRow]) -> Vec<CategoryNode> {
    let mut builder = TreeBuilder::default();
    for row in rows {
        builder.insert_path(&[&row.major, &row.minor, &row.sub]);
    }
    builder.freeze()
}
