use std::borrow::Cow;

/// An INN as given by the caller: either text or digits that were already split out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitInput<'a> {
    Text(&'a str),
    Digits(&'a [u32]),
}

impl<'a> DigitInput<'a> {
    /// Normalizes the input into single decimal digits, preserving order.
    ///
    /// Returns `None` if a character is not an ASCII decimal digit, or if a value of
    /// [DigitInput::Digits] is greater than 9. Nothing is skipped or coerced.
    pub fn to_digits(self) -> Option<Cow<'a, [u32]>> {
        match self {
            DigitInput::Text(text) => text
                .chars()
                .map(|c| c.to_digit(10))
                .collect::<Option<Vec<u32>>>()
                .map(Cow::Owned),
            DigitInput::Digits(digits) => {
                if digits.iter().all(|digit| *digit <= 9) {
                    Some(Cow::Borrowed(digits))
                } else {
                    None
                }
            }
        }
    }
}

impl<'a> From<&'a str> for DigitInput<'a> {
    fn from(text: &'a str) -> Self {
        DigitInput::Text(text)
    }
}

impl<'a> From<&'a String> for DigitInput<'a> {
    fn from(text: &'a String) -> Self {
        DigitInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [u32]> for DigitInput<'a> {
    fn from(digits: &'a [u32]) -> Self {
        DigitInput::Digits(digits)
    }
}

impl<'a, const N: usize> From<&'a [u32; N]> for DigitInput<'a> {
    fn from(digits: &'a [u32; N]) -> Self {
        DigitInput::Digits(digits.as_slice())
    }
}

impl<'a> From<&'a Vec<u32>> for DigitInput<'a> {
    fn from(digits: &'a Vec<u32>) -> Self {
        DigitInput::Digits(digits.as_slice())
    }
}
