//! Input normalisation applied to form fields before they reach the API.

use crate::CoreError;

/// Strip everything that is not an ASCII digit (CPF/CNPJ, CEP, phone masks).
#[must_use]
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Trim `value` and fail with a validation error naming `field` when empty.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the trimmed value is empty.
pub fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Normalise a CEP to its 8 digits.
///
/// # Errors
///
/// Returns `CoreError::Validation` unless exactly 8 digits remain.
pub fn cep(value: &str) -> Result<String, CoreError> {
    let digits = only_digits(value);
    if digits.len() != 8 {
        return Err(CoreError::validation(format!(
            "CEP must have 8 digits, got {}",
            digits.len()
        )));
    }
    Ok(digits)
}
