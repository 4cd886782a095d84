//! Token cursor and the `parse` entry point.
//!
//! Handlers are looked up by token kind: operand handlers for tokens that
//! can start an expression, operator handlers plus a binding power for the
//! five arithmetic operators.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Expr,
    config::Config,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
};

/// Cursor over one expression's tokens.
///
/// `depth` counts the nested handler calls currently on the stack and is
/// checked against `config.max_depth`.
pub struct Parser<'c> {
    /// Always terminated by `EOF`
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    config: &'c Config,
    /// Numbers, prefix `-` and `(`
    nud_lookup: NUDLookup,
    /// `+ - * / ^`
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl<'c> Parser<'c> {
    /// Wraps `tokens`, appending an `EOF` if the stream lacks one.
    pub fn new(mut tokens: Vec<Token>, config: &'c Config) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map_or_else(crate::Span::null, |token| crate::Span {
                    start: token.span.end.clone(),
                    end: token.span.end.clone(),
                });
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: end,
            });
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            config,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        // `new` guarantees a trailing EOF and `advance` never moves past it
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes the token under the cursor. At `EOF` the cursor stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// False once only `EOF` is left.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers `kind` as a binary operator folding at `binding_power`.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers `kind` as the start of an operand.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the character position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Error for a token that cannot appear at the cursor.
    pub fn unexpected_token(&self) -> Error {
        let token = self.current_token();
        let text = match token.kind {
            TokenKind::EOF => None,
            _ => Some(token.value.clone()),
        };

        Error::new(
            ErrorImpl::InvalidExpression { token: text },
            self.get_position(),
        )
    }

    /// Enters one level of recursion, failing once `max_depth` is exceeded.
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(self.too_deep());
        }
        Ok(())
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Rejects `expr` if its height exceeds `max_depth`, reporting the
    /// position of the operator that made it too tall.
    pub fn check_height(&self, expr: Expr) -> Result<Expr, Error> {
        if expr.height() <= self.config.max_depth {
            return Ok(expr);
        }

        let position = match &expr {
            Expr::Unary { operator, .. } | Expr::Binary { operator, .. } => {
                operator.span.start.clone()
            }
            Expr::Literal { span, .. } => span.start.clone(),
        };

        Err(Error::new(
            ErrorImpl::NestingTooDeep {
                limit: self.config.max_depth,
            },
            position,
        ))
    }

    fn too_deep(&self) -> Error {
        Error::new(
            ErrorImpl::NestingTooDeep {
                limit: self.config.max_depth,
            },
            self.get_position(),
        )
    }
}

/// Parses exactly one expression from `tokens`.
///
/// # Errors
///
/// `EmptyExpression` when the stream holds no tokens besides `EOF`,
/// `InvalidExpression` for tokens left over after the expression (unless
/// `config.allow_trailing_tokens` is set), and any error raised while
/// parsing the expression itself.
pub fn parse(tokens: Vec<Token>, config: &Config) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, config);
    create_token_lookups(&mut parser);

    if !parser.has_tokens() {
        return Err(Error::new(ErrorImpl::EmptyExpression, parser.get_position()));
    }

    let expr = parse_expr(&mut parser, BindingPower::Default.precedence())?;

    if parser.has_tokens() {
        if !config.allow_trailing_tokens {
            return Err(parser.unexpected_token());
        }
        debug!(
            "ignoring trailing tokens from position {}",
            parser.get_position().0
        );
    }

    Ok(expr)
}
