pub mod codegen;
pub mod interpreter;
pub mod machine;

use crate::error::CompileError;
use crate::ir::ast;
use crate::ir::instr::Record;

pub use codegen::CodeGenerator;
pub use interpreter::Interpreter;
pub use machine::StackMachine;

pub trait Backend {
    fn name(&self) -> &'static str;
    fn process(&mut self, expression: &ast::Expression) -> Vec<Record>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Codegen,
    Interpreter,
}

impl BackendType {
    /// Registry order is the order the driver runs them in.
    pub fn all() -> Vec<Self> {
        vec![Self::Codegen, Self::Interpreter]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Codegen => "codegen",
            Self::Interpreter => "interp",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Codegen => "Stack machine code (PUSH/ADD/MUL/PRINT)",
            Self::Interpreter => "Direct evaluation of the tree",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CompileError> {
        Self::all()
            .into_iter()
            .find(|b| b.name() == name)
            .ok_or_else(|| CompileError::UnknownBackend {
                name: name.to_string(),
            })
    }

    pub fn create(&self) -> Box<dyn Backend> {
        match self {
            Self::Codegen => Box::new(CodeGenerator::new()),
            Self::Interpreter => Box::new(Interpreter::new()),
        }
    }
}
