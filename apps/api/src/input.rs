use crate::errors::AppError;

/// Rejects text longer than `max_chars` characters.
pub fn check_length(field: &str, text: &str, max_chars: usize) -> Result<(), AppError> {
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::Validation(format!(
            "{field} is {chars} characters, the limit is {max_chars}"
        )));
    }
    Ok(())
}

/// Rejects blank text, then applies the length limit.
pub fn require_text(field: &str, text: &str, max_chars: usize) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    check_length(field, text, max_chars)
}
