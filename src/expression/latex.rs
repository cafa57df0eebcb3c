use crate::expression::ast::{Expression, Op};

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division, which needs no parentheses of its own
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::App(Op::Add | Op::Sub, _, _) => 1,
                Expression::App(Op::Mul, _, _) => 2,
                Expression::App(Op::Div, _, _) | Expression::Literal(_) => 3,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Literal(n) => n.to_string(),
                Expression::App(Op::Add, l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if precedence(l) < 1 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) < 1 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} + {}", ls, rs)
                }
                Expression::App(Op::Sub, l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if precedence(l) < 1 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) <= 1 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} - {}", ls, rs)
                }
                Expression::App(Op::Mul, l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if precedence(l) < 2 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) < 2 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} \\cdot {}", ls, rs)
                }
                Expression::App(Op::Div, l, r) => {
                    format!("\\frac{{{}}}{{{}}}", fmt(l), fmt(r))
                }
            }
        }

        fmt(self)
    }
}
