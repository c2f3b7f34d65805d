//! Data model for trees parsed from Newick strings.
//!
//! # Tree representation
//! Trees are plain owned values of the two-variant enum [Tree]:
//!
//! | Variant | Content |
//! |---------|---------|
//! | [Tree::Leaf] | name of the leaf |
//! | [Tree::Node] | ordered children, possibly none |
//!
//! There are no parent links and no shared subtrees; each internal vertex
//! owns its children.

pub mod tree;

pub use tree::Tree;
