use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the slice is empty or contains a zero. The solver
/// itself excludes bad leaves rather than failing, so this check belongs at
/// the API boundary where a caller wants to hear about useless input.
pub fn validate_source_numbers(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating {} source numbers", numbers.len());

    if numbers.is_empty() {
        warn!("Source number list is empty");
        return Err(UtilsError::EmptySourceNumbers);
    }

    if let Some(position) = numbers.iter().position(|&n| n == 0) {
        warn!("Source number at position {} is zero", position);
        return Err(UtilsError::ZeroSourceNumber(position));
    }

    debug!("Source number validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the target is zero: no admissible expression can ever
/// evaluate to it.
pub fn validate_target(target: u64) -> Result<(), UtilsError> {
    if target == 0 {
        warn!("Target is zero");
        return Err(UtilsError::ZeroTarget);
    }
    Ok(())
}
