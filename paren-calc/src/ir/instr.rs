//! Stack-machine instructions and the records the backends report.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Push(u8),
    Add,
    Mul,
    Print,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub line: usize,
}

impl Instruction {
    pub fn new(opcode: Opcode, line: usize) -> Self {
        Self { opcode, line }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Opcode::Push(value) => write!(f, "LINE {}: PUSH {}", self.line, value),
            Opcode::Add => write!(f, "LINE {}: ADD", self.line),
            Opcode::Mul => write!(f, "LINE {}: MUL", self.line),
            Opcode::Print => write!(f, "LINE {}: PRINT", self.line),
        }
    }
}

/// Value of one whole expression, tagged with the root's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i64,
    pub line: usize,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINE {}: {}", self.line, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Instruction(Instruction),
    Result(Evaluation),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction(instruction) => fmt::Display::fmt(instruction, f),
            Self::Result(evaluation) => fmt::Display::fmt(evaluation, f),
        }
    }
}
