//! Newick format parser and writer for trees.
//!
//! This module provides [NewickParser] to parse Newick strings into a
//! [Tree], and [to_newick]/[write_newick] to render a [Tree] back to
//! canonical text.
//!
//! # Quick API
//! * [`parse_str`] - parses a single string with default settings
//!
//! # Full API
//! * [`NewickParser::parse_str`] - parse with a configured depth limit
//! * [`NewickParser::parse_tokens`] - parse from a token sequence
//!
//! # Format
//! The plain Newick format accepted here has the following grammar:
//! * `tree ::= leaf | node`
//! * `node ::= '(' tree* ')'`
//! * `leaf ::= name`
//! * `name ::= word_char+`
//!
//! Furthermore:
//! * Word characters are alphanumerics and `_`
//! * All other characters (commas, whitespace, `:`, `;`, ...) are dropped
//!   while scanning, so children are separated purely by parentheses and
//!   name boundaries
//! * The input must describe exactly one tree
//!
//! Branch lengths, comments, quoted labels, and the closing `;` are not
//! interpreted. Their characters are dropped like any other separator, but
//! digits in a branch length still scan as names.

mod defs;
pub mod parser;
pub mod writer;

pub use defs::DEFAULT_MAX_DEPTH;
pub use parser::NewickParser;
pub use writer::{to_newick, write_newick};

use crate::model::Tree;
use crate::parser::ParsingError;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single Newick string to obtain a [Tree].
///
/// This is a convenience function using a default [NewickParser],
/// thus not requiring configuration of a parser.
///
/// # Arguments
/// * `newick` - The Newick string to parse
///
/// # Returns
/// * [Tree] - Tree parsed from the string
/// * [ParsingError] - If the string does not describe exactly one tree
///
/// # Example
/// ```
/// use newick_tree::newick::parse_str;
///
/// let tree = parse_str("(Fratercula_cirrhata,(Fratercula_arctica,Fratercula_corniculata))")?;
/// assert_eq!(tree.children().map(|c| c.len()), Some(2));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    NewickParser::new().parse_str(newick.as_ref())
}
