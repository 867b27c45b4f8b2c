use serde::Deserialize;

use crate::shared::{BatchConfig, SinkConfig, SnowflakeConnectionConfig, ValidationError};

/// Full configuration surface of the target, as read from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    #[serde(flatten)]
    pub connection: SnowflakeConnectionConfig,
    #[serde(flatten)]
    pub batch: BatchConfig,
    #[serde(flatten)]
    pub sink: SinkConfig,
}

impl TargetConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.connection.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}
