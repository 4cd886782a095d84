use std::fmt::{self, Display};

use crate::{lexer::tokens::TokenKind, Span};

/// Operator Kinds
///
/// The arithmetic operators an AST node may carry.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl OperatorKind {
    /// Maps an operator token to its kind.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(OperatorKind::Add),
            TokenKind::Dash => Some(OperatorKind::Sub),
            TokenKind::Star => Some(OperatorKind::Mul),
            TokenKind::Slash => Some(OperatorKind::Div),
            TokenKind::Caret => Some(OperatorKind::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Pow => "^",
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator together with the span of the token it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub kind: OperatorKind,
    pub span: Span,
}

/// Expression
///
/// A node of the expression tree. Children are boxed and owned by their
/// parent; every node also caches its height so depth limits can be
/// checked as the tree is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: f64,
        span: Span,
    },
    Unary {
        operator: Operator,
        operand: Box<Expr>,
        span: Span,
        height: usize,
    },
    Binary {
        operator: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
        height: usize,
    },
}

impl Expr {
    pub fn literal(value: f64, span: Span) -> Self {
        Expr::Literal { value, span }
    }

    pub fn unary(operator: Operator, operand: Expr) -> Self {
        let span = Span {
            start: operator.span.start.clone(),
            end: operand.get_span().end.clone(),
        };

        Expr::Unary {
            height: operand.height() + 1,
            operator,
            operand: Box::new(operand),
            span,
        }
    }

    pub fn binary(operator: Operator, left: Expr, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        Expr::Binary {
            height: left.height().max(right.height()) + 1,
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Returns the span of source text the expression covers.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal { span, .. } | Expr::Unary { span, .. } | Expr::Binary { span, .. } => {
                span
            }
        }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Expr::Literal { .. } => 1,
            Expr::Unary { height, .. } | Expr::Binary { height, .. } => *height,
        }
    }
}

// Prefix notation, so the grouping chosen by the parser is visible
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { value, .. } => write!(f, "{}", value),
            Expr::Unary {
                operator, operand, ..
            } => write!(f, "({} {})", operator.kind, operand),
            Expr::Binary {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", operator.kind, left, right),
        }
    }
}
