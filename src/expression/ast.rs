use std::sync::Arc;

/// Binary operators available when combining two sub-expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Decide whether applying this operator to `(x, y)` yields an admissible
    /// result: a positive integer, with commutative pairs tried in one order
    /// only and identity operations excluded.
    pub fn is_valid(self, x: u64, y: u64) -> bool {
        match self {
            Op::Add => x <= y && x.checked_add(y).is_some(),
            Op::Sub => x > y,
            Op::Mul => x != 1 && y != 1 && x <= y && x.checked_mul(y).is_some(),
            Op::Div => y > 1 && x % y == 0,
        }
    }

    /// Apply the operator. Callers must have checked `is_valid` first, which
    /// guarantees the subtraction stays positive and the division is exact.
    pub fn apply(self, x: u64, y: u64) -> u64 {
        match self {
            Op::Add => x + y,
            Op::Sub => x - y,
            Op::Mul => x * y,
            Op::Div => x / y,
        }
    }
}

/// An arithmetic expression over positive integers
///
/// Nodes are immutable once built and shared by reference counting, so a
/// sub-expression can appear in many candidate trees without deep copies and
/// can cross thread boundaries during the parallel search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Literal(u64),
    App(Op, Arc<Expression>, Arc<Expression>),
}
