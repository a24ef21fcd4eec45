use thiserror::Error;

/// Why an input could not be turned into an [Inn](crate::Inn).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InnError {
    /// A character of the text form is not an ASCII decimal digit
    #[error("Character {character:?} at position {position} is not a decimal digit")]
    InvalidCharacter { character: char, position: usize },
    /// A value of the digit form is greater than 9
    #[error("Value {value} at position {position} is not a single decimal digit")]
    InvalidDigit { value: u32, position: usize },
    /// An INN has exactly 10 or 12 digits
    #[error("INN must have 10 or 12 digits, got {0}")]
    InvalidLength(usize),
    #[error("Check digits {found} do not match the expected {expected}")]
    ChecksumMismatch { expected: String, found: String },
}
