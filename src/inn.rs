use crate::error::InnError;
use crate::secondary_validation::{
    RussianInnChecksum, INDIVIDUAL_INN_LENGTH, LEGAL_ENTITY_INN_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;
use strum::IntoStaticStr;

/// Who an INN was issued to. The kind is implied by the number of digits.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InnKind {
    /// 10 digits, one check digit
    LegalEntity,
    /// 12 digits, two check digits
    Individual,
}

impl InnKind {
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            LEGAL_ENTITY_INN_LENGTH => Some(InnKind::LegalEntity),
            INDIVIDUAL_INN_LENGTH => Some(InnKind::Individual),
            _ => None,
        }
    }

    pub const fn length(self) -> usize {
        match self {
            InnKind::LegalEntity => LEGAL_ENTITY_INN_LENGTH,
            InnKind::Individual => INDIVIDUAL_INN_LENGTH,
        }
    }

    pub const fn check_digit_count(self) -> usize {
        match self {
            InnKind::LegalEntity => 1,
            InnKind::Individual => 2,
        }
    }
}

/// An INN whose check digits have been verified.
///
/// Serializes as its digit string and only deserializes from a string that passes the same
/// validation as [Inn::from_str].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Inn {
    digits: Vec<u32>,
    kind: InnKind,
}

impl Inn {
    fn from_digits(digits: Vec<u32>) -> Result<Self, InnError> {
        let kind = InnKind::from_length(digits.len())
            .ok_or(InnError::InvalidLength(digits.len()))?;

        let expected = RussianInnChecksum::expected_check_digits(&digits)
            .ok_or(InnError::InvalidLength(digits.len()))?;
        let found = &digits[digits.len() - kind.check_digit_count()..];

        if expected != found {
            return Err(InnError::ChecksumMismatch {
                expected: digits_to_string(&expected),
                found: digits_to_string(found),
            });
        }
        Ok(Inn { digits, kind })
    }

    pub fn kind(&self) -> InnKind {
        self.kind
    }

    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn check_digits(&self) -> &[u32] {
        &self.digits[self.digits.len() - self.kind.check_digit_count()..]
    }
}

fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .filter_map(|digit| char::from_digit(*digit, 10))
        .collect()
}

impl Display for Inn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            // digits are always in 0..=9 once parsed
            if let Some(c) = char::from_digit(*digit, 10) {
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Inn {
    type Err = InnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(10)
                    .ok_or(InnError::InvalidCharacter {
                        character,
                        position,
                    })
            })
            .collect::<Result<Vec<u32>, InnError>>()?;
        Inn::from_digits(digits)
    }
}

impl TryFrom<&[u32]> for Inn {
    type Error = InnError;

    fn try_from(digits: &[u32]) -> Result<Self, Self::Error> {
        if let Some((position, value)) = digits
            .iter()
            .enumerate()
            .find(|(_, value)| **value > 9)
        {
            return Err(InnError::InvalidDigit {
                value: *value,
                position,
            });
        }
        Inn::from_digits(digits.to_vec())
    }
}

impl TryFrom<String> for Inn {
    type Error = InnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Inn> for String {
    fn from(inn: Inn) -> Self {
        inn.to_string()
    }
}
