use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{config::Config, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored so a match can only start at the cursor
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored("[0-9.]+"), handler: number_handler },
        RegexPattern { regex: anchored("\\s+"), handler: skip_handler },
        RegexPattern { regex: anchored("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: anchored("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: anchored("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: anchored("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: anchored("\\^"), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
    ];
}

fn anchored(pattern: &str) -> Regex {
    // The patterns are literals above, a failure here is a programming error
    Regex::new(&format!("^(?:{})", pattern)).expect("lexer pattern must compile")
}

/// Scanning state for a single source string.
///
/// `pos` is a byte offset used to slice the source, `column` is the
/// character offset reported in token spans.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    column: usize,
    strict: bool,
    /// Set while only dropped characters follow the last `Number` token.
    extends_number: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, config: &Config) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            column: 0,
            strict: config.strict_characters,
            extends_number: false,
        }
    }

    /// Moves the cursor past `matched`, which must be a prefix of the remainder.
    pub fn advance_n(&mut self, matched: &str) {
        self.pos += matched.len();
        self.column += matched.chars().count();
    }

    pub fn push(&mut self, token: Token) {
        trace!("lexed {} at {}", token, token.span.start.0);
        self.extends_number = token.kind == TokenKind::Number;
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of `text` if it were read starting at the cursor.
    pub fn span_of(&self, text: &str) -> Span {
        Span {
            start: Position(self.column),
            end: Position(self.column + text.chars().count()),
        }
    }

    fn matched(&self, regex: &Regex) -> &'a str {
        let remainder = self.remainder();
        regex.find(remainder).map_or("", |m| m.as_str())
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let span = lexer.span_of(matched);

    // Dropped characters inside a number do not split it: `1a2` is `12`
    if lexer.extends_number {
        if let Some(previous) = lexer.tokens.last_mut() {
            trace!("joining {} onto {}", matched, previous);
            previous.value.push_str(matched);
            previous.span.end = span.end;
            lexer.advance_n(matched);
            return;
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched);
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.extends_number = false;
    lexer.advance_n(matched);
}

fn unknown_handler(lexer: &mut Lexer, unknown: char) {
    let mut buffer = [0; 4];
    let text: &str = unknown.encode_utf8(&mut buffer);

    if lexer.strict {
        let span = lexer.span_of(text);
        lexer.push(MK_TOKEN!(TokenKind::Unknown, text.to_string(), span));
    } else {
        trace!("skipping unrecognised character {:?} at {}", unknown, lexer.column);
    }

    lexer.advance_n(text);
}

/// Splits `source` into tokens, terminated by an `EOF` token.
///
/// Scanning never fails: malformed numbers are kept as opaque lexemes and
/// unrecognised characters either become `Unknown` tokens or are dropped,
/// depending on `config.strict_characters`. A dropped character is treated
/// as absent, so digits on both sides of it form one number.
pub fn tokenize(source: &str, config: &Config) -> Vec<Token> {
    let mut lex = Lexer::new(source, config);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(remainder));

        match (pattern, lex.at()) {
            (Some(pattern), _) => (pattern.handler)(&mut lex, &pattern.regex),
            (None, Some(unknown)) => unknown_handler(&mut lex, unknown),
            (None, None) => break,
        }
    }

    let end = Span {
        start: Position(lex.column),
        end: Position(lex.column),
    };
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), end));
    lex.tokens
}
