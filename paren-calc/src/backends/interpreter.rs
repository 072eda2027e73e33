use log::debug;

use super::Backend;
use crate::ir::ast;
use crate::ir::instr::{Evaluation, Record};

#[derive(Default)]
pub struct Interpreter;

impl Backend for Interpreter {
    fn name(&self) -> &'static str {
        "interp"
    }

    fn process(&mut self, expression: &ast::Expression) -> Vec<Record> {
        vec![Record::Result(self.run(expression))]
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the tree and tags the value with the root's line.
    pub fn run(&self, expression: &ast::Expression) -> Evaluation {
        let value = evaluate(expression);
        debug!("{} = {}", expression, value);
        Evaluation {
            value,
            line: expression.line(),
        }
    }
}

pub fn evaluate(expression: &ast::Expression) -> i64 {
    match expression {
        ast::Expression::Digit { value, .. } => i64::from(*value),
        ast::Expression::Parenthesized { left, op, right, .. } => {
            let a = evaluate(left);
            let b = evaluate(right);
            op.apply(a, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn eval(source: &str) -> i64 {
        evaluate(&parser::parse(source).unwrap()[0])
    }

    #[test]
    fn evaluates_scenarios() {
        assert_eq!(eval("(5+5)"), 10);
        assert_eq!(eval("(9+(5*5))"), 34);
        assert_eq!(eval("((9+(5*5))*5)"), 170);
        assert_eq!(eval("(((9+(5*5))*5)+5)"), 175);
        assert_eq!(eval("0"), 0);
    }

    #[test]
    fn result_is_tagged_with_root_line() {
        let trees = parser::parse("\n\n(2\n*3)").unwrap();
        assert_eq!(Interpreter::new().run(&trees[0]), Evaluation { value: 6, line: 2 });
    }
}
