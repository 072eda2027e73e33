use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Syntax error at line {line}: missing expression")]
    MissingExpression { line: usize },

    #[error("Syntax error at line {line}: missing operator")]
    MissingOperator { line: usize },

    #[error("Syntax error at line {line}: missing closing parenthesis after {partial}")]
    MissingClosingParen { line: usize, partial: String },

    #[error("Stack machine error at line {line}: stack underflow")]
    StackUnderflow { line: usize },

    #[error("Stack machine error: {remaining} value(s) left on the stack")]
    UnbalancedStack { remaining: usize },

    #[error("Unknown backend: {name}")]
    UnknownBackend { name: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
