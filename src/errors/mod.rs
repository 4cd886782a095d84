//! The single error type returned by lexing, parsing and evaluation.
//!
//! Each error pairs a kind from `ErrorImpl` with the character position it
//! refers to, and can offer a hint for the interactive prompt.

pub mod errors;
