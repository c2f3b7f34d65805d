//! Error types for the Newick parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while parsing a Newick string.

use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing a Newick string.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ParsingErrorType {
    /// A `)` appeared where a subtree was expected.
    UnexpectedClosingParen,
    /// Tokens ran out while a subtree or a `)` was still expected.
    UnexpectedEndOfInput,
    /// Tokens remain after one complete tree.
    TrailingTokens,
    /// More parentheses open at once than the configured limit.
    DepthExceeded(usize),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and surrounding text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the byte position
    /// in `input` at which it occurred.
    pub fn from_input(kind: ParsingErrorType, input: &str, position: usize) -> Self {
        Self {
            kind,
            position,
            context: context_at(input, position, DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedClosingParen
    pub fn unexpected_closing_paren(input: &str, position: usize) -> Self {
        Self::from_input(ParsingErrorType::UnexpectedClosingParen, input, position)
    }

    /// Convenience constructor for UnexpectedEndOfInput, positioned at the end of `input`
    pub fn unexpected_end_of_input(input: &str) -> Self {
        Self::from_input(ParsingErrorType::UnexpectedEndOfInput, input, input.len())
    }

    /// Convenience constructor for TrailingTokens
    pub fn trailing_tokens(input: &str, position: usize) -> Self {
        Self::from_input(ParsingErrorType::TrailingTokens, input, position)
    }

    /// Convenience constructor for DepthExceeded
    pub fn depth_exceeded(input: &str, position: usize, max_depth: usize) -> Self {
        Self::from_input(ParsingErrorType::DepthExceeded(max_depth), input, position)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input text following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Returns up to `k` characters of `input` starting at byte `position`.
fn context_at(input: &str, position: usize, k: usize) -> String {
    input
        .get(position..)
        .map(|rest| rest.chars().take(k).collect())
        .unwrap_or_default()
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::UnexpectedClosingParen => {
                write!(f, "Unexpected ')' where a subtree was expected")?
            }
            ParsingErrorType::UnexpectedEndOfInput => write!(f, "Unexpected end of input")?,
            ParsingErrorType::TrailingTokens => write!(f, "Unexpected tokens after complete tree")?,
            ParsingErrorType::DepthExceeded(max) => {
                write!(f, "Nesting depth exceeds maximum of {max}")?
            }
        }

        // Additional position information
        write!(f, " at position {}", self.position)?;

        // Additional context if available
        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} chars): {}", self.context.chars().count(), self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_taken_from_position() {
        let err = ParsingError::trailing_tokens("A)B", 1);
        assert_eq!(err.kind(), &ParsingErrorType::TrailingTokens);
        assert_eq!(err.position(), 1);
        assert_eq!(err.context(), ")B");
    }

    #[test]
    fn test_context_is_truncated() {
        let input = "X".repeat(200);
        let err = ParsingError::unexpected_closing_paren(&input, 10);
        assert_eq!(err.context().len(), DEFAULT_CONTEXT_LENGTH);
    }

    #[test]
    fn test_end_of_input_has_no_context() {
        let err = ParsingError::unexpected_end_of_input("(A,B");
        assert_eq!(err.position(), 4);
        assert!(err.context().is_empty());
        assert_eq!(err.to_string(), "Unexpected end of input at position 4");
    }

    #[test]
    fn test_display_with_context() {
        let err = ParsingError::depth_exceeded("((A))", 1, 1);
        assert_eq!(
            err.to_string(),
            "Nesting depth exceeds maximum of 1 at position 1\n  Context (next 4 chars): (A))"
        );
    }
}
