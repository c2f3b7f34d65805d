//! Lexical scanning of Newick strings.
//!
//! This module provides the [Token] type and the [Tokenizer], a cursor over
//! the input text that yields tokens together with their byte offsets.
//! Only parentheses and names (maximal runs of word characters) become
//! tokens; every other character is dropped without complaint.

use std::fmt;

// =#========================================================================#=
// TOKEN
// =#========================================================================#=
/// An atomic lexical unit of a Newick string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Opening parenthesis `(`
    Open,
    /// Closing parenthesis `)`
    Close,
    /// Maximal run of word characters (alphanumerics and `_`)
    Name(String),
}

impl Token {
    /// Returns the text this token was scanned from.
    ///
    /// # Example
    /// ```
    /// use newick_tree::parser::Token;
    ///
    /// assert_eq!(Token::Open.as_str(), "(");
    /// assert_eq!(Token::Name("Kea".to_string()).as_str(), "Kea");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Token::Open => "(",
            Token::Close => ")",
            Token::Name(name) => name,
        }
    }

    /// Returns true if this token is a name.
    pub fn is_name(&self) -> bool {
        matches!(self, Token::Name(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true for characters that may be part of a name.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================#=
/// A left-to-right scanner over a Newick string.
///
/// Yields `(offset, Token)` pairs, where `offset` is the byte position
/// in the input at which the token starts. Scanning never fails.
///
/// # Example
/// ```
/// use newick_tree::parser::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("(Kiwi, Weka)");
/// assert_eq!(tokenizer.next(), Some((0, Token::Open)));
/// assert_eq!(tokenizer.next(), Some((1, Token::Name("Kiwi".to_string()))));
/// assert_eq!(tokenizer.next(), Some((7, Token::Name("Weka".to_string()))));
/// assert_eq!(tokenizer.next(), Some((11, Token::Close)));
/// assert_eq!(tokenizer.next(), None);
/// ```
pub struct Tokenizer<'a> {
    /// The text being scanned
    input: &'a str,
    /// Current byte position in the input
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if the whole input has been scanned.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peeks at the current character without consuming it.
    #[inline(always)]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes the current character.
    #[inline(always)]
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes all consecutive characters that cannot start a token.
    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek() {
            if c == '(' || c == ')' || is_word_char(c) {
                break;
            }
            self.next_char();
        }
    }

    /// Consumes a maximal run of word characters starting at the current
    /// position and returns it.
    fn scan_name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_word_char(c) {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.pos]
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_ignored();
        let start = self.pos;
        let token = match self.peek()? {
            '(' => {
                self.next_char();
                Token::Open
            }
            ')' => {
                self.next_char();
                Token::Close
            }
            _ => Token::Name(self.scan_name().to_string()),
        };
        Some((start, token))
    }
}

/// Extracts the tokens from the text of a tree, in order.
///
/// Parentheses and names are kept, everything else (commas, whitespace,
/// colons, semicolons, ...) is dropped.
///
/// # Example
/// ```
/// use newick_tree::parser::{Token, tokenize};
///
/// let tokens = tokenize("(A, (B, C))");
/// let texts: Vec<&str> = tokens.iter().map(Token::as_str).collect();
/// assert_eq!(texts, ["(", "A", "(", "B", "C", ")", ")"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).map(|(_, token)| token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,;: \n\t").is_empty());
    }

    #[test]
    fn test_name_is_maximal_run() {
        assert_eq!(tokenize("Porphyrio_hochstetteri2"), vec![name("Porphyrio_hochstetteri2")]);
        assert_eq!(tokenize("A B"), vec![name("A"), name("B")]);
    }

    #[test]
    fn test_separators_split_names() {
        assert_eq!(tokenize("A:0.5"), vec![name("A"), name("0"), name("5")]);
        assert_eq!(tokenize("A-B"), vec![name("A"), name("B")]);
    }

    #[test]
    fn test_unicode_word_chars() {
        assert_eq!(tokenize("(Tūī,Kākā)"), vec![Token::Open, name("Tūī"), name("Kākā"), Token::Close]);
    }

    #[test]
    fn test_offsets_are_byte_positions() {
        let tokens: Vec<(usize, Token)> = Tokenizer::new("(Tūī, B)").collect();
        assert_eq!(
            tokens,
            vec![(0, Token::Open), (1, name("Tūī")), (8, name("B")), (9, Token::Close)]
        );
    }

    #[test]
    fn test_position_and_eof() {
        let mut tokenizer = Tokenizer::new("A ;");
        assert!(!tokenizer.is_eof());
        tokenizer.next();
        assert_eq!(tokenizer.position(), 1);
        assert_eq!(tokenizer.next(), None);
        assert!(tokenizer.is_eof());
    }
}
