/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the parser
///
/// Submodules:
/// - ast: Expression nodes and operators
pub mod ast;
