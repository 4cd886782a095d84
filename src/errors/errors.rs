use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::InvalidExpression { .. } => "InvalidExpression",
            ErrorImpl::UnmatchedParentheses => "UnmatchedParentheses",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::InvalidPower => "InvalidPower",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyExpression => ErrorTip::None,
            ErrorImpl::InvalidExpression { token: None } => ErrorTip::Suggestion(String::from(
                "The expression ended early, is an operand missing?",
            )),
            ErrorImpl::InvalidExpression { token: Some(token) } => ErrorTip::Suggestion(format!(
                "Unexpected `{}`, expected a number, `-` or `(`",
                token
            )),
            ErrorImpl::UnmatchedParentheses => ErrorTip::Suggestion(String::from(
                "Check that all parentheses are properly matched.",
            )),
            ErrorImpl::InvalidNumber { .. } => {
                ErrorTip::Suggestion(String::from("Make sure all numbers are valid."))
            }
            ErrorImpl::InvalidOperator { operator } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used as a prefix operator",
                operator
            )),
            ErrorImpl::DivisionByZero => {
                ErrorTip::Suggestion(String::from("Division by zero is not allowed."))
            }
            ErrorImpl::InvalidPower => ErrorTip::Suggestion(String::from(
                "Zero cannot be raised to a negative power.",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.internal_error, self.position.0)?;
        if let Some(details) = self.internal_error.details() {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Empty expression")]
    EmptyExpression,
    /// `token` is `None` when the input ran out.
    #[error("Invalid expression format")]
    InvalidExpression { token: Option<String> },
    #[error("Unmatched parentheses")]
    UnmatchedParentheses,
    #[error("Invalid number format")]
    InvalidNumber { token: String },
    #[error("Invalid operator usage")]
    InvalidOperator { operator: String },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid power operation")]
    InvalidPower,
    #[error("Expression nested too deeply")]
    NestingTooDeep { limit: usize },
}

impl ErrorImpl {
    /// The offending source text, if the error has one.
    pub fn details(&self) -> Option<&str> {
        match self {
            ErrorImpl::InvalidExpression { token } => token.as_deref(),
            ErrorImpl::InvalidNumber { token } => Some(token),
            ErrorImpl::InvalidOperator { operator } => Some(operator),
            _ => None,
        }
    }
}
