use thiserror::Error;

/// Error returned when a configuration value fails validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("`{field}` {constraint}")]
    InvalidFieldValue {
        field: &'static str,
        constraint: &'static str,
    },
}

impl ValidationError {
    pub fn invalid(field: &'static str, constraint: &'static str) -> Self {
        Self::InvalidFieldValue { field, constraint }
    }
}
