//! Countdown - A library for the countdown numbers game
//!
//! This library enumerates arithmetic expressions over a multiset of source
//! numbers and reports every expression that evaluates exactly to a target
//! value, under the rule that all intermediate results must be positive
//! integers.

pub mod expression;
pub mod solver;
pub mod utils;

use std::sync::Arc;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Op};
pub use solver::{Candidate, CountdownSolver, SolverError};
pub use utils::{UtilsError, validate_source_numbers, validate_target};

/// Find every expression over the source numbers that evaluates to the target
///
/// This is a convenience function that validates the input and runs a default
/// solver. Each source number may be used at most once per expression.
///
/// # Errors
///
/// This function will return an error if:
/// * The source number list is empty
/// * Any source number or the target is zero
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(&[1, 3, 7, 10], 21) {
///     Ok(solutions) => println!("Found {} solutions", solutions.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[u64], target: u64) -> Result<Vec<Arc<Expression>>, SolverError> {
    validate_source_numbers(numbers)?;
    validate_target(target)?;

    let solver = CountdownSolver::new();
    Ok(solver.solve(numbers, target))
}
