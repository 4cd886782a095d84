//! Unit tests for the evaluator.
//!
//! Trees are built by hand here so that shapes the parser never produces
//! (such as a unary `+`) can be checked as well.

use crate::{
    ast::ast::{Expr, Operator, OperatorKind},
    errors::errors::ErrorImpl,
    Position, Span,
};

use super::evaluator::evaluate;

fn span(start: usize, end: usize) -> Span {
    Span {
        start: Position(start),
        end: Position(end),
    }
}

fn num(value: f64) -> Expr {
    Expr::literal(value, span(0, 1))
}

fn op(kind: OperatorKind, at: usize) -> Operator {
    Operator {
        kind,
        span: span(at, at + 1),
    }
}

fn bin(kind: OperatorKind, left: Expr, right: Expr) -> Expr {
    Expr::binary(op(kind, 1), left, right)
}

#[test]
fn test_evaluate_literal() {
    assert_eq!(evaluate(&num(4.25)).unwrap(), 4.25);
}

#[test]
fn test_evaluate_arithmetic() {
    assert_eq!(evaluate(&bin(OperatorKind::Add, num(2.0), num(3.0))).unwrap(), 5.0);
    assert_eq!(evaluate(&bin(OperatorKind::Sub, num(2.0), num(3.0))).unwrap(), -1.0);
    assert_eq!(evaluate(&bin(OperatorKind::Mul, num(2.0), num(3.0))).unwrap(), 6.0);
    assert_eq!(evaluate(&bin(OperatorKind::Div, num(3.0), num(2.0))).unwrap(), 1.5);
    assert_eq!(evaluate(&bin(OperatorKind::Pow, num(2.0), num(10.0))).unwrap(), 1024.0);
}

#[test]
fn test_evaluate_nested() {
    // (2 + 3) * -4
    let expr = bin(
        OperatorKind::Mul,
        bin(OperatorKind::Add, num(2.0), num(3.0)),
        Expr::unary(op(OperatorKind::Sub, 0), num(4.0)),
    );

    assert_eq!(evaluate(&expr).unwrap(), -20.0);
}

#[test]
fn test_evaluate_negation() {
    let expr = Expr::unary(op(OperatorKind::Sub, 0), num(5.0));
    assert_eq!(evaluate(&expr).unwrap(), -5.0);

    let expr = Expr::unary(op(OperatorKind::Sub, 0), expr);
    assert_eq!(evaluate(&expr).unwrap(), 5.0);
}

#[test]
fn test_evaluate_invalid_unary_operator() {
    let expr = Expr::unary(op(OperatorKind::Add, 3), num(5.0));
    let err = evaluate(&expr).unwrap_err();

    assert_eq!(
        err.get_internal_error(),
        &ErrorImpl::InvalidOperator {
            operator: "+".to_string()
        }
    );
    assert_eq!(err.get_position(), &Position(3));
}

#[test]
fn test_evaluate_division_by_zero() {
    let err = evaluate(&bin(OperatorKind::Div, num(1.0), num(0.0))).unwrap_err();
    assert_eq!(err.get_internal_error(), &ErrorImpl::DivisionByZero);
    assert_eq!(err.get_position(), &Position(1));

    let err = evaluate(&bin(OperatorKind::Div, num(1.0), num(-0.0))).unwrap_err();
    assert_eq!(err.get_internal_error(), &ErrorImpl::DivisionByZero);
}

#[test]
fn test_evaluate_zero_to_negative_power() {
    let err = evaluate(&bin(OperatorKind::Pow, num(0.0), num(-1.0))).unwrap_err();
    assert_eq!(err.get_internal_error(), &ErrorImpl::InvalidPower);
}

#[test]
fn test_evaluate_power_edge_cases() {
    assert_eq!(evaluate(&bin(OperatorKind::Pow, num(0.0), num(0.0))).unwrap(), 1.0);
    assert_eq!(evaluate(&bin(OperatorKind::Pow, num(4.0), num(0.5))).unwrap(), 2.0);
    assert!(evaluate(&bin(OperatorKind::Pow, num(-8.0), num(1.0 / 3.0)))
        .unwrap()
        .is_nan());
    assert_eq!(
        evaluate(&bin(OperatorKind::Pow, num(10.0), num(400.0))).unwrap(),
        f64::INFINITY
    );
}

#[test]
fn test_evaluate_both_operands_before_failing() {
    // The left operand's fault wins because it is evaluated first
    let left = bin(OperatorKind::Div, num(1.0), num(0.0));
    let right = Expr::binary(op(OperatorKind::Pow, 5), num(0.0), num(-2.0));
    let err = evaluate(&bin(OperatorKind::Add, left, right)).unwrap_err();

    assert_eq!(err.get_internal_error(), &ErrorImpl::DivisionByZero);
}

#[test]
fn test_evaluate_infinity_propagates() {
    let inf = bin(OperatorKind::Pow, num(10.0), num(400.0));
    let expr = bin(OperatorKind::Sub, inf.clone(), inf);

    assert!(evaluate(&expr).unwrap().is_nan());
}
