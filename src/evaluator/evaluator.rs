use log::trace;

use crate::{
    ast::ast::{Expr, Operator, OperatorKind},
    errors::errors::{Error, ErrorImpl},
};

/// Evaluates an expression tree to a single value.
///
/// Both operands of a binary node are always evaluated, left first.
/// Recursion depth equals the height of the tree, which the parser bounds.
pub fn evaluate(expression: &Expr) -> Result<f64, Error> {
    match expression {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::Unary {
            operator, operand, ..
        } => {
            let value = evaluate(operand)?;
            evaluate_unary(operator, value)
        }
        Expr::Binary {
            operator,
            left,
            right,
            ..
        } => {
            let lhs = evaluate(left)?;
            let rhs = evaluate(right)?;
            evaluate_binary(operator, lhs, rhs)
        }
    }
}

fn evaluate_unary(operator: &Operator, value: f64) -> Result<f64, Error> {
    match operator.kind {
        OperatorKind::Sub => Ok(-value),
        _ => Err(Error::new(
            ErrorImpl::InvalidOperator {
                operator: operator.kind.symbol().to_string(),
            },
            operator.span.start.clone(),
        )),
    }
}

fn evaluate_binary(operator: &Operator, lhs: f64, rhs: f64) -> Result<f64, Error> {
    let result = match operator.kind {
        OperatorKind::Add => lhs + rhs,
        OperatorKind::Sub => lhs - rhs,
        OperatorKind::Mul => lhs * rhs,
        OperatorKind::Div => {
            if rhs == 0.0 {
                return Err(Error::new(
                    ErrorImpl::DivisionByZero,
                    operator.span.start.clone(),
                ));
            }
            lhs / rhs
        }
        OperatorKind::Pow => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(Error::new(
                    ErrorImpl::InvalidPower,
                    operator.span.start.clone(),
                ));
            }
            lhs.powf(rhs)
        }
    };

    trace!("{} {} {} = {}", lhs, operator.kind, rhs, result);
    Ok(result)
}
