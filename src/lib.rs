//! Newick-tree is a small library to parse trees from plain Newick strings
//! and to render them back to canonical text.
//!
//! Core functionality provided:
//! - Tokenizer: scans text into parentheses and names, dropping everything
//!   else. See [crate::parser].
//! - Parser: builds a [Tree] from exactly one tree's worth of tokens,
//!   iteratively and with a configurable nesting limit. See [crate::newick].
//! - Tree model: [Tree] is either a `Leaf` with a name or a `Node` with
//!   ordered children. See [crate::model].
//! - Writer: [Tree::to_text] (and `Display`) produce canonical text such
//!   as `(A,(B,C))`.
//!
//! Limitations:
//! - No branch lengths, comments, quoted labels, or `;` terminator
//! - No tree editing or traversal algorithms
//!
//! # Example
//! ```
//! use newick_tree::{Tree, parse, tokenize};
//!
//! let tokens = tokenize("(A, (B, C))");
//! assert_eq!(tokens.len(), 7);
//!
//! let tree = parse("(A, (B, C))")?;
//! assert_eq!(
//!     tree,
//!     Tree::node(vec![Tree::leaf("A"), Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")])])
//! );
//! assert_eq!(tree.to_string(), "(A,(B,C))");
//! # Ok::<(), newick_tree::parser::ParsingError>(())
//! ```

pub mod model;
pub mod newick;
pub mod parser;

pub use model::Tree;
pub use parser::{ParsingError, ParsingErrorType, Token, tokenize};

// ============================================================================
// Quick API
// ============================================================================
/// Parse a Newick string using default settings, returning a [Tree].
///
/// See [`newick::parse_str`] for full documentation of this convenience function.
pub fn parse<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    newick::parse_str(newick)
}
