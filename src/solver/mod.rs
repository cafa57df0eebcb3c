mod core;
mod errors;

pub use core::{Candidate, CountdownSolver};
pub use errors::SolverError;
