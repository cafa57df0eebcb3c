use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division leaves a remainder")]
    InexactDivision,
    #[error("Intermediate value is not a positive integer")]
    NonPositive,
    #[error("Arithmetic overflow")]
    Overflow,
}
