/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` tree, operators and expression tags
/// - expressions: Definitions for each expression node and its rendering
pub mod ast;
pub mod expressions;
