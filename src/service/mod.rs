pub mod metrics;

use crate::input::DigitInput;
use crate::observability::labels::Labels;
use crate::secondary_validation::{RussianInnChecksum, Validator};
use crate::service::metrics::Metrics;

const VALIDATOR_LABEL: &str = "validator";

/// Holds one injected [Validator] and forwards every call to it, counting the results.
///
/// Validation goes through the [Validator] trait, so a service can itself be injected, shared
/// behind an `Arc` or wrapped by another service. Counters are registered against the metrics
/// recorder that is active when the service is created (or its validator replaced).
pub struct InnValidatorService<V = RussianInnChecksum> {
    validator: V,
    configured_labels: Labels,
    labels: Labels,
    metrics: Metrics,
}

impl<V: Validator> InnValidatorService<V> {
    pub fn new(validator: V) -> Self {
        Self::with_labels(validator, Labels::empty())
    }

    /// A named validator adds a `validator` label to the given labels.
    pub fn with_labels(validator: V, labels: Labels) -> Self {
        let reported_labels = reported_labels(&validator, &labels);
        let metrics = Metrics::new(&reported_labels);
        InnValidatorService {
            validator,
            configured_labels: labels,
            labels: reported_labels,
            metrics,
        }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Replaces the validator. The `validator` label follows the new validator.
    pub fn set_validator(&mut self, validator: V) {
        self.labels = reported_labels(&validator, &self.configured_labels);
        self.metrics = Metrics::new(&self.labels);
        self.validator = validator;
    }

    /// Labels attached to the counters of this service.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

fn reported_labels(validator: &impl Validator, labels: &Labels) -> Labels {
    match validator.name() {
        Some(name) => labels.clone_with_labels(Labels::new(&[(VALIDATOR_LABEL, name)])),
        None => labels.clone(),
    }
}

impl Default for InnValidatorService<RussianInnChecksum> {
    fn default() -> Self {
        Self::new(RussianInnChecksum)
    }
}

impl<V: Validator> Validator for InnValidatorService<V> {
    fn validate(&self, input: DigitInput<'_>) -> bool {
        let is_valid = self.validator.validate(input);

        self.metrics.validated.increment(1);
        if !is_valid {
            self.metrics.rejected.increment(1);
        }
        is_valid
    }

    fn name(&self) -> Option<&'static str> {
        self.validator.name()
    }
}
