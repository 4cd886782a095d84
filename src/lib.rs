#![allow(clippy::module_inception)]

use log::debug;

use crate::{
    ast::ast::Expr,
    config::Config,
    errors::errors::Error,
    evaluator::evaluator::evaluate,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Zero-based character offset into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Runs the lexer and parser over `source`.
pub fn parse_source(source: &str, config: &Config) -> Result<Expr, Error> {
    let tokens = tokenize(source, config);
    debug!("tokens: {}", format_tokens(&tokens));

    let ast = parse(tokens, config)?;
    debug!("parsed: {}", ast);
    Ok(ast)
}

/// Evaluates one expression: scan, parse, then walk the tree.
///
/// Each call is independent; nothing is shared between invocations.
pub fn calculate(source: &str, config: &Config) -> Result<f64, Error> {
    let ast = parse_source(source, config)?;
    let result = evaluate(&ast)?;

    debug!("result: {:?}", result);
    Ok(result)
}

/// `calculate` with the default (strict) configuration.
pub fn calculate_default(source: &str) -> Result<f64, Error> {
    calculate(source, &Config::default())
}

/// Formats a token list as `[Number(12), Plus, Number(3)]`, leaving out `EOF`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let parts = tokens
        .iter()
        .filter(|token| token.kind != TokenKind::EOF)
        .map(|token| token.to_string())
        .collect::<Vec<String>>();

    format!("[{}]", parts.join(", "))
}

/// Finds the line holding character `position`.
///
/// Returns the 1-based line number, the line without its terminator, and
/// the character offset within that line. Positions past the end point just
/// after the last character.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new());

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();
        let text = line.trim_end_matches(['\n', '\r']).to_string();

        if (start..end).contains(&position) {
            let line_pos = (position - start).min(text.chars().count());
            return (line_number, text, line_pos);
        }

        last = (line_number, text);
        start = end;
        line_number += 1;
    }

    let (line_number, text) = last;
    let line_pos = text.chars().count();
    (line_number, text, line_pos)
}

/// Renders an error with the offending line and a caret under the fault.
///
/// ```text
/// Error: Division by zero at position 1
///   |
/// 1 | 1/0
///   | -^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let mut rendered = String::new();
    rendered.push_str(&format!("Error: {}\n", error));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
