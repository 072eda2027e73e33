//! Parse-and-process loop over a whole source.
use log::info;

use crate::backends::{Backend, BackendType};
use crate::error::CompileError;
use crate::ir::ast::Expression;
use crate::ir::instr::{Evaluation, Instruction, Record};
use crate::parser::Parser;

/// Everything the backends reported for one expression.
#[derive(Debug, Clone)]
pub struct ExpressionOutput {
    pub expression: Expression,
    pub records: Vec<Record>,
}

impl ExpressionOutput {
    pub fn instructions(&self) -> Vec<Instruction> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Instruction(instruction) => Some(*instruction),
                Record::Result(_) => None,
            })
            .collect()
    }

    pub fn result(&self) -> Option<Evaluation> {
        self.records.iter().find_map(|record| match record {
            Record::Result(evaluation) => Some(*evaluation),
            Record::Instruction(_) => None,
        })
    }
}

pub struct Driver {
    parser: Parser,
    backends: Vec<Box<dyn Backend>>,
    finished: bool,
    processed: usize,
}

impl Driver {
    /// Runs every registered backend.
    pub fn new(source: &str) -> Self {
        Self::with_backends(source, &BackendType::all())
    }

    pub fn with_backends(source: &str, backends: &[BackendType]) -> Self {
        Self {
            parser: Parser::new(source),
            backends: backends.iter().map(BackendType::create).collect(),
            finished: false,
            processed: 0,
        }
    }

    /// Parses and processes the next expression.
    ///
    /// After end of input or the first error this keeps returning `Ok(None)`.
    pub fn next_output(&mut self) -> Result<Option<ExpressionOutput>, CompileError> {
        if self.finished {
            return Ok(None);
        }

        let expression = match self.parser.next_expression() {
            Ok(Some(expression)) => expression,
            Ok(None) => {
                info!("end of input after {} expression(s)", self.processed);
                self.finished = true;
                return Ok(None);
            }
            Err(err) => {
                self.finished = true;
                return Err(err);
            }
        };

        let mut records = Vec::new();
        for backend in self.backends.iter_mut() {
            records.extend(backend.process(&expression));
        }

        self.processed += 1;
        Ok(Some(ExpressionOutput {
            expression,
            records,
        }))
    }
}

impl Iterator for Driver {
    type Item = Result<ExpressionOutput, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_output().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_after_first_error() {
        let mut driver = Driver::new("(1+1)\n(2+\n(3*3)");
        assert!(driver.next_output().unwrap().is_some());
        assert!(driver.next_output().is_err());
        assert!(driver.next_output().unwrap().is_none());
        assert!(driver.next().is_none());
    }

    #[test]
    fn selected_backends_only() {
        let mut driver = Driver::with_backends("(2*3)", &[BackendType::Interpreter]);
        let output = driver.next_output().unwrap().unwrap();
        assert!(output.instructions().is_empty());
        assert_eq!(output.result().map(|r| r.value), Some(6));
    }
}
