use log::debug;

use crate::expression::ast::{Expression, Op};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Recompute the value of the expression from scratch, re-checking the
    /// positivity invariant at every node. The search only builds admissible
    /// trees, so on solver output this always succeeds and agrees with the
    /// cached value.
    ///
    /// # Errors
    ///
    /// Returns an error when the tree contains:
    /// - A zero leaf or a subtraction that does not stay positive
    /// - A division by zero or one leaving a remainder
    /// - An addition or multiplication overflowing `u64`
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match self {
            Expression::Literal(n) => {
                if *n > 0 {
                    Ok(*n)
                } else {
                    Err(ExpressionError::NonPositive)
                }
            }
            Expression::App(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                match op {
                    Op::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
                    Op::Sub => {
                        if left > right {
                            Ok(left - right)
                        } else {
                            debug!("Subtraction {} - {} is not positive", left, right);
                            Err(ExpressionError::NonPositive)
                        }
                    }
                    Op::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
                    Op::Div => {
                        if right == 0 {
                            debug!("Division by zero attempted");
                            Err(ExpressionError::DivisionByZero)
                        } else if left % right != 0 {
                            debug!("Division {} / {} leaves a remainder", left, right);
                            Err(ExpressionError::InexactDivision)
                        } else {
                            Ok(left / right)
                        }
                    }
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}
