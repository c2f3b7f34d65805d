//! Constants and definitions for the Newick parser.

/// Default maximum number of parentheses that may be open at once.
///
/// Parsing itself does not recurse, but dropping, comparing, and rendering
/// a [Tree](crate::Tree) recurse once per nesting level.
pub const DEFAULT_MAX_DEPTH: usize = 1024;
