//! Basic low-level scanning functionality and parse errors.
pub mod parsing_error;
pub mod tokenizer;

pub use parsing_error::{ParsingError, ParsingErrorType};
pub use tokenizer::{Token, Tokenizer, tokenize};
