//! Turns an expression string into tokens.
//!
//! Digit-and-dot runs become `Number` lexemes without being validated, the
//! seven operator and parenthesis characters map to their own kinds, and
//! whitespace separates tokens. Spans count characters, not bytes.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
