//! Provides the tree representation.
//!
//! A [Tree] is a tagged union of [Tree::Leaf] and [Tree::Node]. It is built
//! bottom-up by the parser, owns all of its children and is never mutated
//! afterward. Callers traverse it by matching on the variant.

use crate::newick;
use std::fmt;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A tree parsed from (or renderable to) a Newick string.
///
/// - [Tree::Leaf] holds the exact name text of a leaf.
/// - [Tree::Node] holds its children in source order; the list may be empty.
///
/// # Example
/// ```
/// use newick_tree::Tree;
///
/// let tree = Tree::node(vec![Tree::leaf("A"), Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")])]);
/// assert_eq!(tree.to_text(), "(A,(B,C))");
///
/// match &tree {
///     Tree::Leaf { name } => println!("leaf {name}"),
///     Tree::Node { children } => assert_eq!(children.len(), 2),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree {
    /// Terminal vertex with its name
    Leaf { name: String },
    /// Internal vertex with its ordered children
    Node { children: Vec<Tree> },
}

// ============================================================================
// New, Getters / Accessors (pub)
// ============================================================================
impl Tree {
    /// Creates a new leaf with the given name.
    pub fn leaf<S: Into<String>>(name: S) -> Self {
        Tree::Leaf { name: name.into() }
    }

    /// Creates a new internal vertex with the given children.
    pub fn node(children: Vec<Tree>) -> Self {
        Tree::Node { children }
    }

    /// Returns true if this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf { .. })
    }

    /// Returns true if this is an internal vertex.
    pub fn is_node(&self) -> bool {
        matches!(self, Tree::Node { .. })
    }

    /// Returns the name if this is a leaf, `None` otherwise.
    pub fn name(&self) -> Option<&str> {
        match self {
            Tree::Leaf { name } => Some(name),
            Tree::Node { .. } => None,
        }
    }

    /// Returns the children if this is an internal vertex, `None` otherwise.
    pub fn children(&self) -> Option<&[Tree]> {
        match self {
            Tree::Leaf { .. } => None,
            Tree::Node { children } => Some(children),
        }
    }

    /// Returns the canonical Newick text of this tree.
    ///
    /// Leaves render as their name, internal vertices as their children's
    /// text joined by `,` in parentheses. No whitespace, no `;`.
    ///
    /// See [newick::to_newick] for details.
    pub fn to_text(&self) -> String {
        newick::to_newick(self)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        newick::write_newick(self, f)
    }
}
