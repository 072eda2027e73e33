use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Mul, // *
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Mul => '*',
        }
    }

    /// Wrapping, so the interpreter and the stack machine agree on overflow.
    pub fn apply(&self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Mul => a.wrapping_mul(b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// 0..=9
    Digit { value: u8, line: usize },
    /// (left op right)
    Parenthesized {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
        line: usize,
    },
}

impl Expression {
    pub fn digit(value: u8, line: usize) -> Self {
        Self::Digit { value, line }
    }

    pub fn parenthesized(left: Expression, op: Operator, right: Expression, line: usize) -> Self {
        Self::Parenthesized {
            left: Box::new(left),
            op,
            right: Box::new(right),
            line,
        }
    }

    /// Line of the token that opened this node.
    pub fn line(&self) -> usize {
        match self {
            Self::Digit { line, .. } | Self::Parenthesized { line, .. } => *line,
        }
    }

    pub fn digit_count(&self) -> usize {
        match self {
            Self::Digit { .. } => 1,
            Self::Parenthesized { left, right, .. } => left.digit_count() + right.digit_count(),
        }
    }

    /// Nesting depth of parentheses; a bare digit is 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Digit { .. } => 0,
            Self::Parenthesized { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Renders the tree back into source form, e.g. `(9+(5*5))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit { value, .. } => write!(f, "{}", value),
            Self::Parenthesized { left, op, right, .. } => {
                write!(f, "({}{}{})", left, op.symbol(), right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_source_form() {
        let tree = Expression::parenthesized(
            Expression::digit(9, 0),
            Operator::Add,
            Expression::parenthesized(Expression::digit(5, 0), Operator::Mul, Expression::digit(5, 0), 0),
            0,
        );
        assert_eq!(tree.to_string(), "(9+(5*5))");
        assert_eq!(tree.digit_count(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn operator_wraps_on_overflow() {
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), -2);
        assert_eq!(Operator::Add.apply(2, 3), 5);
    }
}
