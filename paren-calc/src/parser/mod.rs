pub mod lexer;
pub mod parser;

pub use lexer::tokenize;
pub use parser::Parser;

use crate::error::CompileError;
use crate::ir::ast;

/// Parses every expression in the source, stopping at the first syntax error.
pub fn parse(source: &str) -> Result<Vec<ast::Expression>, CompileError> {
    let mut parser = Parser::new(source);
    let mut expressions = Vec::new();

    while let Some(expression) = parser.next_expression()? {
        expressions.push(expression);
    }

    Ok(expressions)
}
