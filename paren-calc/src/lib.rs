//! Fully parenthesized single-digit arithmetic: lexer, recursive-descent
//! parser, and two backends over the tree (stack-machine code generation
//! and direct interpretation).
pub mod backends;
pub mod driver;
pub mod error;
pub mod ir;
pub mod parser;

pub use driver::{Driver, ExpressionOutput};
pub use error::CompileError;

/// Processes every expression in the source with all backends.
pub fn run(source: &str) -> Result<Vec<ExpressionOutput>, CompileError> {
    Driver::new(source).collect()
}
