use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Controls how buffered records are cut into staged batch files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchConfig {
    /// Records buffered per stream before a flush is forced.
    #[serde(default = "default_flush_record_count")]
    pub flush_record_count: usize,
    /// Upper bound on records written into a single `.json.gz` file.
    #[serde(default = "default_max_records_per_batch_file")]
    pub max_records_per_batch_file: usize,
}

const fn default_flush_record_count() -> usize {
    10_000
}

const fn default_max_records_per_batch_file() -> usize {
    10_000
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            flush_record_count: default_flush_record_count(),
            max_records_per_batch_file: default_max_records_per_batch_file(),
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.flush_record_count == 0 {
            return Err(ValidationError::invalid(
                "flush_record_count",
                "must be greater than zero",
            ));
        }
        if self.max_records_per_batch_file == 0 {
            return Err(ValidationError::invalid(
                "max_records_per_batch_file",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
