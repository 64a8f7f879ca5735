// SPDX-License-Identifier: Apache-2.0

use crate::ids::ValidationError;

/// Contact numbers are stored as exactly this many digits.
pub const PHONE_DIGITS: usize = 10;

/// Strip every non-digit and truncate to [`PHONE_DIGITS`].
#[must_use]
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// Sanitize, then require exactly [`PHONE_DIGITS`] digits. Runs before any
/// network call; a short number blocks the submit.
pub fn validate_phone(input: &str) -> Result<String, ValidationError> {
    let digits = sanitize_phone(input);
    if digits.len() != PHONE_DIGITS {
        return Err(ValidationError(format!(
            "phone number must be exactly {PHONE_DIGITS} digits, got {}",
            digits.len()
        )));
    }
    Ok(digits)
}
