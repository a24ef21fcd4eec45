mod russian_inn_checksum;

pub(crate) use crate::secondary_validation::russian_inn_checksum::{
    INDIVIDUAL_INN_LENGTH, LEGAL_ENTITY_INN_LENGTH,
};
pub use crate::secondary_validation::russian_inn_checksum::{
    IndividualInnChecksum, LegalEntityInnChecksum, RussianInnChecksum,
};

use crate::config::SecondaryValidator;
use crate::input::DigitInput;
use std::sync::Arc;

/// The single capability consumers depend on. Implementations must be pure so they can be
/// shared across threads without coordination.
pub trait Validator: Send + Sync {
    fn validate(&self, input: DigitInput<'_>) -> bool;

    /// Name reported in the `validator` metric label. Anonymous validators have none.
    fn name(&self) -> Option<&'static str> {
        None
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        (**self).validate(input)
    }

    fn name(&self) -> Option<&'static str> {
        (**self).name()
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        (**self).validate(input)
    }

    fn name(&self) -> Option<&'static str> {
        (**self).name()
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        (**self).validate(input)
    }

    fn name(&self) -> Option<&'static str> {
        (**self).name()
    }
}

/// Adapts a plain function or closure into a [Validator].
pub struct FnValidator<F>(pub F);

impl<F> Validator for FnValidator<F>
where
    F: Fn(DigitInput<'_>) -> bool + Send + Sync,
{
    fn validate(&self, input: DigitInput<'_>) -> bool {
        (self.0)(input)
    }
}

impl Validator for SecondaryValidator {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        match self {
            SecondaryValidator::RussianInnChecksum => RussianInnChecksum.validate(input),
            SecondaryValidator::RussianLegalEntityInnChecksum => {
                LegalEntityInnChecksum.validate(input)
            }
            SecondaryValidator::RussianIndividualInnChecksum => {
                IndividualInnChecksum.validate(input)
            }
        }
    }

    fn name(&self) -> Option<&'static str> {
        Some(self.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn secondary_validator_dispatches_by_variant() {
        let legal_entity = "7707083893";
        let individual = "500100732259";

        assert!(SecondaryValidator::RussianInnChecksum.validate(legal_entity.into()));
        assert!(SecondaryValidator::RussianInnChecksum.validate(individual.into()));

        assert!(SecondaryValidator::RussianLegalEntityInnChecksum.validate(legal_entity.into()));
        assert!(!SecondaryValidator::RussianLegalEntityInnChecksum.validate(individual.into()));

        assert!(!SecondaryValidator::RussianIndividualInnChecksum.validate(legal_entity.into()));
        assert!(SecondaryValidator::RussianIndividualInnChecksum.validate(individual.into()));
    }

    #[test]
    fn dyn_validators_can_be_substituted() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(RussianInnChecksum),
            Box::new(Arc::new(LegalEntityInnChecksum)),
            Box::new(FnValidator(|input: DigitInput<'_>| {
                input.to_digits().is_some_and(|digits| digits.len() == 10)
            })),
        ];
        for validator in &validators {
            assert!(validator.validate("7707083893".into()));
            assert!(!validator.validate("12345".into()));
        }
    }

    #[test]
    fn named_validators() {
        assert_eq!(
            SecondaryValidator::RussianLegalEntityInnChecksum.name(),
            Some("russian_legal_entity_inn_checksum")
        );
        assert_eq!(RussianInnChecksum.name(), Some("russian_inn_checksum"));
        assert_eq!(
            Arc::new(IndividualInnChecksum).name(),
            Some("russian_individual_inn_checksum")
        );
        assert_eq!(FnValidator(|_: DigitInput<'_>| true).name(), None);
    }

    #[test]
    fn references_forward_to_the_validator() {
        fn check(validator: impl Validator) -> bool {
            validator.validate("7707083893".into())
        }
        assert!(check(&RussianInnChecksum));
        assert!(check(&&SecondaryValidator::RussianInnChecksum));
    }
}
