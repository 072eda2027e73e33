use log::trace;

use crate::error::CompileError;
use crate::ir::instr::{Evaluation, Instruction, Opcode};

/// Executes code produced by the code generator.
#[derive(Default)]
pub struct StackMachine {
    stack: Vec<i64>,
}

impl StackMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the program on an empty stack and returns every printed value.
    pub fn execute(&mut self, program: &[Instruction]) -> Result<Vec<Evaluation>, CompileError> {
        self.stack.clear();
        let mut printed = Vec::new();

        for instruction in program {
            trace!("{} stack={:?}", instruction, self.stack);
            match instruction.opcode {
                Opcode::Push(value) => self.stack.push(i64::from(value)),
                Opcode::Add => self.binary(instruction.line, |a, b| a.wrapping_add(b))?,
                Opcode::Mul => self.binary(instruction.line, |a, b| a.wrapping_mul(b))?,
                Opcode::Print => {
                    let value = self.pop(instruction.line)?;
                    printed.push(Evaluation {
                        value,
                        line: instruction.line,
                    });
                }
            }
        }

        if !self.stack.is_empty() {
            return Err(CompileError::UnbalancedStack {
                remaining: self.stack.len(),
            });
        }

        Ok(printed)
    }

    fn binary(&mut self, line: usize, f: impl Fn(i64, i64) -> i64) -> Result<(), CompileError> {
        let b = self.pop(line)?;
        let a = self.pop(line)?;
        self.stack.push(f(a, b));
        Ok(())
    }

    fn pop(&mut self, line: usize) -> Result<i64, CompileError> {
        self.stack.pop().ok_or(CompileError::StackUnderflow { line })
    }
}
