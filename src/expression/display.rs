use std::fmt;

use crate::expression::ast::{Expression, Op};

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::App(Op::Add | Op::Sub, _, _) => 1,
                Expression::App(Op::Mul | Op::Div, _, _) => 2,
                Expression::Literal(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Literal(n) => write!(f, "{}", n),
                Expression::App(op, l, r) => {
                    let p = match op {
                        Op::Add | Op::Sub => 1,
                        Op::Mul | Op::Div => 2,
                    };
                    let need_l = precedence(l) < p;
                    // Sub and Div do not associate, so an equal-precedence
                    // right child keeps its parentheses.
                    let need_r = match op {
                        Op::Add | Op::Mul => precedence(r) < p,
                        Op::Sub | Op::Div => precedence(r) <= p,
                    };
                    write_with_parens(f, l, need_l)?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, r, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
