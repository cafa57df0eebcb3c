//! Utils module split into submodules

mod choices;
mod errors;
mod splits;
mod validation;

pub use choices::subset_permutations;
pub use errors::UtilsError;
pub use splits::all_splits;
pub use validation::{validate_source_numbers, validate_target};
