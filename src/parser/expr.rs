use log::trace;

use crate::{
    ast::ast::{Expr, Operator, OperatorKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an operand followed by every infix operator binding at least as
/// tightly as `min_precedence`.
pub fn parse_expr(parser: &mut Parser, min_precedence: u8) -> Result<Expr, Error> {
    parser.enter()?;

    let mut left = parse_unary(parser)?;

    // Fold operators while they bind at least as tightly as the caller allows
    loop {
        let token_kind = parser.current_token_kind();
        let (Some(bp), Some(led)) = (
            parser.get_bp_lookup().get(&token_kind).copied(),
            parser.get_led_lookup().get(&token_kind).copied(),
        ) else {
            break;
        };

        if bp.precedence() < min_precedence {
            break;
        }

        left = led(parser, left, bp)?;
    }

    parser.exit();
    Ok(left)
}

/// Dispatches on the current token to its NUD handler.
pub fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected_token());
    };

    nud(parser)
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    let token = parser.advance();

    match token.value.parse::<f64>() {
        Ok(value) => Ok(Expr::literal(value, token.span)),
        Err(_) => Err(Error::new(
            ErrorImpl::InvalidNumber { token: token.value },
            position,
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    // Each operator costs a level of its own on top of its right operand's
    parser.enter()?;

    let operator_token = parser.advance();
    let Some(kind) = OperatorKind::from_token_kind(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::InvalidOperator {
                operator: operator_token.value,
            },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp.right_operand_precedence())?;
    trace!("folding {} at {}", kind, operator_token.span.start.0);

    parser.exit();
    parser.check_height(Expr::binary(
        Operator {
            kind,
            span: operator_token.span,
        },
        left,
        right,
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter()?;

    let operator_token = parser.advance();
    let operand = parse_unary(parser)?;

    parser.exit();
    parser.check_height(Expr::unary(
        Operator {
            kind: OperatorKind::Sub,
            span: operator_token.span,
        },
        operand,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default.precedence())?;

    if parser.current_token_kind() != TokenKind::CloseParen {
        return Err(Error::new(
            ErrorImpl::UnmatchedParentheses,
            parser.get_position(),
        ));
    }
    parser.advance();

    Ok(expr)
}
