use crate::config::SecondaryValidator;
use crate::input::DigitInput;
use crate::secondary_validation::Validator;

/// Validates both 10-digit (legal entity) and 12-digit (individual) INNs.
pub struct RussianInnChecksum;

/// Only accepts the 10-digit INN issued to legal entities.
pub struct LegalEntityInnChecksum;

/// Only accepts the 12-digit INN issued to individuals.
pub struct IndividualInnChecksum;

pub(crate) const LEGAL_ENTITY_INN_LENGTH: usize = 10;
pub(crate) const INDIVIDUAL_INN_LENGTH: usize = 12;

const COEFFICIENTS_10: &[u32; 10] = &[2, 4, 10, 3, 5, 9, 4, 6, 8, 0];
const COEFFICIENTS_12_1: &[u32; 11] = &[7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];
const COEFFICIENTS_12_2: &[u32; 12] = &[3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];

const CONTROL_NUMBER_DIVIDER: u32 = 11;
const ADDITIONAL_CONTROL_NUMBER_DIVIDER: u32 = 10;

/// Weighted sum of the digits reduced modulo 11. The coefficient table decides how many
/// leading digits take part in the sum.
fn check_digit(digits: &[u32], coefficients: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(coefficients)
        .map(|(digit, coefficient)| digit * coefficient)
        .sum();

    let remainder = sum % CONTROL_NUMBER_DIVIDER;
    // 10 has no single digit form
    if remainder > 9 {
        remainder % ADDITIONAL_CONTROL_NUMBER_DIVIDER
    } else {
        remainder
    }
}

fn validate10(digits: &[u32]) -> bool {
    check_digit(digits, COEFFICIENTS_10) == digits[9]
}

fn validate12(digits: &[u32]) -> bool {
    let check1 = check_digit(digits, COEFFICIENTS_12_1);
    let check2 = check_digit(digits, COEFFICIENTS_12_2);

    check1 == digits[10] && check2 == digits[11]
}

impl RussianInnChecksum {
    /// Computes the check digits the algorithm expects for a 10 or 12 digit sequence.
    ///
    /// For 12-digit INNs the second check digit is computed over the supplied 11th digit, not
    /// over the expected one. Returns `None` for any other length or when a value is not a
    /// single decimal digit.
    pub fn expected_check_digits(digits: &[u32]) -> Option<Vec<u32>> {
        if digits.iter().any(|digit| *digit > 9) {
            return None;
        }
        match digits.len() {
            LEGAL_ENTITY_INN_LENGTH => Some(vec![check_digit(digits, COEFFICIENTS_10)]),
            INDIVIDUAL_INN_LENGTH => Some(vec![
                check_digit(digits, COEFFICIENTS_12_1),
                check_digit(digits, COEFFICIENTS_12_2),
            ]),
            _ => None,
        }
    }

    /// Digits must already be normalized to values in `0..=9`.
    pub(crate) fn validate_digits(digits: &[u32]) -> bool {
        match digits.len() {
            LEGAL_ENTITY_INN_LENGTH => validate10(digits),
            INDIVIDUAL_INN_LENGTH => validate12(digits),
            _ => false,
        }
    }
}

impl Validator for RussianInnChecksum {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        match input.to_digits() {
            Some(digits) => RussianInnChecksum::validate_digits(&digits),
            None => false,
        }
    }

    fn name(&self) -> Option<&'static str> {
        Some(SecondaryValidator::RussianInnChecksum.into())
    }
}

impl Validator for LegalEntityInnChecksum {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        match input.to_digits() {
            Some(digits) if digits.len() == LEGAL_ENTITY_INN_LENGTH => validate10(&digits),
            _ => false,
        }
    }

    fn name(&self) -> Option<&'static str> {
        Some(SecondaryValidator::RussianLegalEntityInnChecksum.into())
    }
}

impl Validator for IndividualInnChecksum {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        match input.to_digits() {
            Some(digits) if digits.len() == INDIVIDUAL_INN_LENGTH => validate12(&digits),
            _ => false,
        }
    }

    fn name(&self) -> Option<&'static str> {
        Some(SecondaryValidator::RussianIndividualInnChecksum.into())
    }
}
