//! Token-building macros shared by the lexer's pattern table.

/// Builds a `Token` from its kind, lexeme and span.
///
/// Expands to a struct literal, so `Token` must be in scope at the call site.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Expands to a `RegexHandler` for an operator or parenthesis whose lexeme
/// never varies. The token's span covers exactly `$value`.
///
/// ```ignore
/// RegexPattern { regex: anchored("\\^"), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        {
            fn handler(lexer: &mut Lexer, _regex: &Regex) {
                let span = lexer.span_of($value);
                lexer.push(MK_TOKEN!($kind, String::from($value), span));
                lexer.advance_n($value);
            }
            handler
        }
    };
}
