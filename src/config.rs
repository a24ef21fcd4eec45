use crate::observability::labels::Labels;
use crate::service::InnValidatorService;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::IntoStaticStr;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, IntoStaticStr)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum SecondaryValidator {
    /// Accepts both INN lengths
    #[default]
    RussianInnChecksum,
    RussianLegalEntityInnChecksum,
    RussianIndividualInnChecksum,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub validator: SecondaryValidator,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new(validator: SecondaryValidator) -> Self {
        Self {
            validator,
            labels: Labels::default(),
        }
    }

    pub fn validator(&self, validator: SecondaryValidator) -> Self {
        self.mutate_clone(|x| x.validator = validator)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    /// The service reports its metrics with the configured labels plus a `validator` label
    /// naming the configured validator.
    pub fn build(&self) -> InnValidatorService<SecondaryValidator> {
        InnValidatorService::with_labels(self.validator.clone(), self.labels.clone())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
