//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Numeric lexemes (integers, decimals, malformed runs)
//! - Operators and parentheses
//! - Whitespace handling
//! - Character positions
//! - Unrecognised characters in strict and lenient mode

use crate::{config::Config, Position};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str, config: &Config) -> Vec<TokenKind> {
    tokenize(source, config).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5", &Config::default());

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = kinds("+ - * / ^ ( )", &Config::default());

    assert_eq!(
        tokens,
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Caret,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_number_ends_at_operator() {
    let tokens = tokenize("12+3", &Config::default());

    assert_eq!(tokens.len(), 4); // 12, +, 3, EOF
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].value, "+");
    assert_eq!(tokens[2].value, "3");
}

#[test]
fn test_tokenize_malformed_number_is_one_token() {
    let tokens = tokenize("1..2", &Config::default());

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1..2");

    let tokens = tokenize(".", &Config::default());
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, ".");
}

#[test]
fn test_tokenize_whitespace_separates_numbers() {
    let tokens = tokenize("  1   2\t", &Config::default());

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].value, "2");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("(12 + 3.5)", &Config::default());

    assert_eq!(tokens[0].span.start, Position(0));
    assert_eq!(tokens[1].span.start, Position(1));
    assert_eq!(tokens[1].span.end, Position(3));
    assert_eq!(tokens[2].span.start, Position(4));
    assert_eq!(tokens[3].span.start, Position(6));
    assert_eq!(tokens[3].span.end, Position(9));
    assert_eq!(tokens[4].span.start, Position(9));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].span.start, Position(10));
}

#[test]
fn test_tokenize_positions_count_characters() {
    // `×` is two bytes but one character
    let tokens = tokenize("2×3", &Config::default());

    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].value, "×");
    assert_eq!(tokens[2].span.start, Position(2));
    assert_eq!(tokens[3].span.start, Position(3));
}

#[test]
fn test_tokenize_unknown_strict() {
    let tokens = tokenize("1 + x", &Config::default());

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].value, "x");
    assert_eq!(tokens[2].span.start, Position(4));
}

#[test]
fn test_tokenize_unknown_lenient() {
    let tokens = kinds("1 + x $ 2", &Config::lenient());

    assert_eq!(
        tokens,
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_dropped_character_inside_number() {
    let tokens = tokenize("1a2", &Config::lenient());

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[0].span.start, Position(0));
    assert_eq!(tokens[0].span.end, Position(3));
    assert_eq!(tokens[1].span.start, Position(3));

    let tokens = tokenize("1,000.5", &Config::lenient());
    assert_eq!(tokens[0].value, "1000.5");
}

#[test]
fn test_tokenize_whitespace_still_splits_after_dropped_character() {
    let tokens = tokenize("1a 2", &Config::lenient());
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].value, "2");

    let tokens = tokenize("1+x2", &Config::lenient());
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].value, "2");
}

#[test]
fn test_tokenize_strict_characters_off() {
    let config = Config::default().with_strict_characters(false);
    let tokens = tokenize("3x4", &config);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "34");
    assert!(!config.allow_trailing_tokens);
}

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("", &Config::default());

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start, Position(0));

    assert_eq!(kinds("   ", &Config::default()), vec![TokenKind::EOF]);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("7*@", &Config::default());

    assert_eq!(tokens[0].to_string(), "Number(7)");
    assert_eq!(tokens[1].to_string(), "Star");
    assert_eq!(tokens[2].to_string(), "Unknown(@)");
}
