use log::debug;

use super::Backend;
use crate::ir::ast;
use crate::ir::instr::{Instruction, Opcode, Record};

#[derive(Default)]
pub struct CodeGenerator {
    code: Vec<Instruction>,
}

impl Backend for CodeGenerator {
    fn name(&self) -> &'static str {
        "codegen"
    }

    fn process(&mut self, expression: &ast::Expression) -> Vec<Record> {
        self.generate(expression)
            .into_iter()
            .map(Record::Instruction)
            .collect()
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post-order walk of the tree, closed by one `PRINT` on the root's line.
    pub fn generate(&mut self, expression: &ast::Expression) -> Vec<Instruction> {
        self.code.clear();

        self.compile_expression(expression);
        self.emit_instruction(Opcode::Print, expression.line());

        debug!("generated {} instruction(s) for {}", self.code.len(), expression);
        std::mem::take(&mut self.code)
    }

    fn compile_expression(&mut self, expression: &ast::Expression) {
        match expression {
            ast::Expression::Digit { value, line } => {
                self.emit_instruction(Opcode::Push(*value), *line);
            }
            ast::Expression::Parenthesized { left, op, right, line } => {
                self.compile_expression(left);
                self.compile_expression(right);

                let opcode = match op {
                    ast::Operator::Add => Opcode::Add,
                    ast::Operator::Mul => Opcode::Mul,
                };
                self.emit_instruction(opcode, *line);
            }
        }
    }

    fn emit_instruction(&mut self, opcode: Opcode, line: usize) {
        self.code.push(Instruction::new(opcode, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn opcodes(source: &str) -> Vec<Opcode> {
        let tree = parser::parse(source).unwrap().remove(0);
        CodeGenerator::new()
            .generate(&tree)
            .into_iter()
            .map(|i| i.opcode)
            .collect()
    }

    #[test]
    fn single_digit_is_push_print() {
        assert_eq!(opcodes("4"), vec![Opcode::Push(4), Opcode::Print]);
    }

    #[test]
    fn emits_post_order() {
        use Opcode::*;
        assert_eq!(opcodes("(5+5)"), vec![Push(5), Push(5), Add, Print]);
        assert_eq!(
            opcodes("(9+(5*5))"),
            vec![Push(9), Push(5), Push(5), Mul, Add, Print]
        );
        assert_eq!(
            opcodes("((1*2)+(3*4))"),
            vec![Push(1), Push(2), Mul, Push(3), Push(4), Mul, Add, Print]
        );
    }

    #[test]
    fn instructions_carry_node_lines() {
        let tree = parser::parse("(1\n+\n2)").unwrap().remove(0);
        let lines: Vec<usize> = CodeGenerator::new()
            .generate(&tree)
            .iter()
            .map(|i| i.line)
            .collect();
        assert_eq!(lines, vec![0, 2, 0, 0]);
    }

    #[test]
    fn generator_is_reusable() {
        let mut generator = CodeGenerator::new();
        let trees = parser::parse("(1+1)\n2").unwrap();
        assert_eq!(generator.generate(&trees[0]).len(), 4);
        assert_eq!(generator.generate(&trees[1]).len(), 2);
    }
}
