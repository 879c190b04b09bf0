use crate::batch::FailurePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct BatchConfig {
    pub failure_policy: FailurePolicy,
    /// Rows shown when the result table is printed.
    pub preview_rows: usize,
    pub progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
            preview_rows: 5,
            progress: true,
        }
    }
}
