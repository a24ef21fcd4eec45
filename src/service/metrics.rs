use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct Metrics {
    pub validated: Counter,
    pub rejected: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            validated: counter!("inn_validation.validated", labels.clone()),
            rejected: counter!("inn_validation.rejected", labels.clone()),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&Labels::empty())
    }
}
