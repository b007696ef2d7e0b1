use thiserror::Error;

use crate::config::MAX_SIDE;

/// Why a resize request was rejected. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    #[error("Enter a valid number.")]
    Empty,

    #[error("Enter a positive whole number.")]
    NotAPositiveInteger(String),

    #[error("Choose at most {max}.")]
    TooLarge { max: usize },
}

/// Parse a side length typed into the resize prompt.
///
/// The text is trimmed and read as a decimal number, so `"5.0"` and `"1e1"`
/// are whole numbers while `"2.5"`, `"inf"` and `"abc"` are not.
pub fn parse_side_length(input: &str) -> Result<usize, ResizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ResizeError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ResizeError::NotAPositiveInteger(trimmed.to_owned()))?;
    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 {
        return Err(ResizeError::NotAPositiveInteger(trimmed.to_owned()));
    }
    if value > MAX_SIDE as f64 {
        return Err(ResizeError::TooLarge { max: MAX_SIDE });
    }

    Ok(value as usize)
}
