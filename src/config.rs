//! Pipeline configuration.
//!
//! A `Config` is passed by reference through the lexer and parser. The
//! defaults are the strict behaviour; `Config::lenient()` drops stray
//! characters and ignores anything after a complete expression.

/// Default bound on parser recursion and tree height.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum parser recursion depth and AST height before `NestingTooDeep`.
    pub max_depth: usize,
    /// Turn unrecognised characters into `Unknown` tokens instead of dropping them.
    pub strict_characters: bool,
    /// Ignore tokens left over after a complete expression.
    pub allow_trailing_tokens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_characters: true,
            allow_trailing_tokens: false,
        }
    }
}

impl Config {
    pub fn lenient() -> Self {
        Config {
            strict_characters: false,
            allow_trailing_tokens: true,
            ..Config::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict_characters(mut self, strict: bool) -> Self {
        self.strict_characters = strict;
        self
    }

    pub fn with_trailing_tokens(mut self, allow: bool) -> Self {
        self.allow_trailing_tokens = allow;
        self
    }
}
