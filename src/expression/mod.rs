//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod latex;

pub use ast::{Expression, Op};
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
