/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The `Node` sum type, traversal and rendering
/// - expressions: Definitions for expression nodes
/// - statements: Definitions for statement-level nodes
/// - patterns: Binder patterns used by declarations and parameters
pub mod ast;
pub mod expressions;
pub mod patterns;
pub mod statements;

#[cfg(test)]
mod tests;
