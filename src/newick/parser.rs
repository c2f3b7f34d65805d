//! Structs and logic to parse Newick strings.
//!
//! This module provides the [NewickParser] struct, which turns the token
//! sequence of a single Newick string into a [Tree].

use crate::model::Tree;
use crate::newick::defs::DEFAULT_MAX_DEPTH;
use crate::parser::parsing_error::ParsingError;
use crate::parser::tokenizer::{Token, Tokenizer};
use tracing::{debug, trace};

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================#=
/// Parser (configuration) for single Newick strings.
///
/// # Construction
/// * [`new()`](Self::new) / [`default()`](Self::default)
///     - limits nesting to [DEFAULT_MAX_DEPTH] open parentheses
///
/// # Configuration
/// * [`with_max_depth(max_depth)`](Self::with_max_depth)
///     - fails with [DepthExceeded](crate::parser::ParsingErrorType::DepthExceeded)
///       once more than `max_depth` parentheses are open at once
/// * [`without_depth_limit()`](Self::without_depth_limit)
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) — Parse a tree from text
/// * [`parse_tokens`](Self::parse_tokens) — Parse a tree from tokens
///
/// # Example
/// ```
/// use newick_tree::Tree;
/// use newick_tree::newick::NewickParser;
///
/// let parser = NewickParser::new().with_max_depth(8);
/// let tree = parser.parse_str("(Kakapo, (Kea, Kaka))").unwrap();
/// assert_eq!(tree.to_text(), "(Kakapo,(Kea,Kaka))");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewickParser {
    max_depth: Option<usize>,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl NewickParser {
    /// Creates a new [NewickParser] with the default depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Sets the maximum number of parentheses that may be open at once.
    ///
    /// A limit of `0` only accepts a single leaf.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Removes the depth limit.
    ///
    /// Parsing stays iterative, but very deep trees may still exhaust the
    /// call stack when they are dropped, compared, or rendered.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Returns the configured depth limit, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl Default for NewickParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl NewickParser {
    /// Parses a single tree from the given text.
    ///
    /// # Arguments
    /// * `newick` - Text describing exactly one tree
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree
    /// * `Err(ParsingError)` - If the token sequence is not exactly one tree
    pub fn parse_str(&self, newick: &str) -> Result<Tree, ParsingError> {
        self.parse_tokens(newick, Tokenizer::new(newick))
    }

    /// Parses a single tree from an already tokenized sequence.
    ///
    /// # Arguments
    /// * `newick` - The text the tokens were scanned from, only used
    ///   for error context
    /// * `tokens` - `(offset, token)` pairs as yielded by [Tokenizer]
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree
    /// * `Err(ParsingError)` - If the token sequence is not exactly one tree
    pub fn parse_tokens<I>(&self, newick: &str, tokens: I) -> Result<Tree, ParsingError>
    where
        I: IntoIterator<Item = (usize, Token)>,
    {
        let mut tokens = tokens.into_iter();

        let result = self.parse_tree(newick, &mut tokens).and_then(|tree| {
            // A well-formed input describes exactly one tree
            match tokens.next() {
                Some((position, _)) => Err(ParsingError::trailing_tokens(newick, position)),
                None => Ok(tree),
            }
        });

        match &result {
            Ok(tree) => debug!(len = newick.len(), is_leaf = tree.is_leaf(), "parsed newick tree"),
            Err(err) => debug!(kind = ?err.kind(), position = err.position(), "failed to parse newick tree"),
        }
        result
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl NewickParser {
    /// Parses one tree from the front of `tokens`:
    /// - `(` opens a new children list
    /// - `)` closes the innermost open list into a [Tree::Node]
    /// - a name becomes a [Tree::Leaf]
    ///
    /// Each completed tree is appended to the innermost open list; once no
    /// list is open, the completed tree is the result. Tokens after it are
    /// left in the iterator.
    fn parse_tree<I>(&self, newick: &str, tokens: &mut I) -> Result<Tree, ParsingError>
    where
        I: Iterator<Item = (usize, Token)>,
    {
        // Children of each currently open '(', innermost last
        let mut open: Vec<Vec<Tree>> = Vec::new();

        loop {
            let Some((position, token)) = tokens.next() else {
                return Err(ParsingError::unexpected_end_of_input(newick));
            };

            let completed = match token {
                Token::Open => {
                    if let Some(max_depth) = self.max_depth {
                        if open.len() >= max_depth {
                            trace!(position, max_depth, "nesting depth exceeded");
                            return Err(ParsingError::depth_exceeded(newick, position, max_depth));
                        }
                    }
                    open.push(Vec::new());
                    continue;
                }
                Token::Close => match open.pop() {
                    Some(children) => Tree::Node { children },
                    None => return Err(ParsingError::unexpected_closing_paren(newick, position)),
                },
                Token::Name(name) => Tree::Leaf { name },
            };

            match open.last_mut() {
                Some(siblings) => siblings.push(completed),
                None => return Ok(completed),
            }
        }
    }
}
