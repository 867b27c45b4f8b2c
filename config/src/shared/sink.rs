use serde::{Deserialize, Serialize};

/// Ordering used to pick the surviving row when a batch holds duplicate keys.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DedupOrder {
    /// Highest `_sdc_sequence` wins. Falls back to arrival order when record
    /// metadata columns are disabled.
    #[default]
    RecordSequence,
    /// Last row written into the staged files wins.
    ArrivalOrder,
}

/// Behavior toggles for the per-stream sinks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SinkConfig {
    /// Stamp `_sdc_*` metadata columns onto every record.
    #[serde(default = "default_true")]
    pub add_record_metadata: bool,
    /// Delete local batch files after a successful load.
    #[serde(default = "default_true")]
    pub clean_up_batch_files: bool,
    /// Permit `ALTER COLUMN ... SET DATA TYPE` when a stream schema widens.
    /// When disabled, a widening change fails the sink instead.
    #[serde(default = "default_true")]
    pub allow_column_alter: bool,
    #[serde(default)]
    pub dedup_order: DedupOrder,
}

const fn default_true() -> bool {
    true
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            add_record_metadata: true,
            clean_up_batch_files: true,
            allow_column_alter: true,
            dedup_order: DedupOrder::default(),
        }
    }
}
