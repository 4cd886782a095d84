//! Precedence climbing over the token stream.
//!
//! `-` is the only prefix operator; `^` is the only right-associative one.
//! Each nested `parse_expr`, prefix `-` and binary operator counts against
//! `Config::max_depth`, as does the height of each node built.

pub mod expr;
pub mod lookups;
pub mod parser;
