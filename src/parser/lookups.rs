use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Power,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

impl BindingPower {
    pub fn precedence(self) -> u8 {
        match self {
            BindingPower::Default => 0,
            BindingPower::Additive => 1,
            BindingPower::Multiplicative => 2,
            BindingPower::Power => 3,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            BindingPower::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Minimum precedence for the right operand of an operator with this power.
    pub fn right_operand_precedence(self) -> u8 {
        match self.associativity() {
            Associativity::Left => self.precedence() + 1,
            Associativity::Right => self.precedence(),
        }
    }
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::Power, parse_binary_expr);

    // Literals and prefixes
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
