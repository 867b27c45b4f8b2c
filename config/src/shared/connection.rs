use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::shared::ValidationError;

/// Connection settings for a Snowflake account.
///
/// The token is wrapped in [`SecretString`] so it is redacted from debug
/// output and never serialized back out.
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConnectionConfig {
    /// Account locator, e.g. `myorg-myaccount`.
    pub account: String,
    /// User the target authenticates as.
    pub user: String,
    /// OAuth access token presented to the SQL API.
    pub token: SecretString,
    /// Database that receives all target tables.
    pub database: String,
    /// Schema that receives all target tables.
    pub schema: String,
    /// Warehouse to run load statements on, if not the user default.
    #[serde(default)]
    pub warehouse: Option<String>,
    /// Role to assume, if not the user default.
    #[serde(default)]
    pub role: Option<String>,
}

impl SnowflakeConnectionConfig {
    /// Base URL of the account's SQL API endpoint.
    pub fn base_url(&self) -> String {
        format!("https://{}.snowflakecomputing.com", self.account)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.account.is_empty() {
            return Err(ValidationError::invalid("account", "must not be empty"));
        }
        if self.user.is_empty() {
            return Err(ValidationError::invalid("user", "must not be empty"));
        }
        if self.token.expose_secret().is_empty() {
            return Err(ValidationError::invalid("token", "must not be empty"));
        }
        if self.database.is_empty() {
            return Err(ValidationError::invalid("database", "must not be empty"));
        }
        if self.schema.is_empty() {
            return Err(ValidationError::invalid("schema", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> SnowflakeConnectionConfig {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn deserializes_with_optional_fields_absent() {
        let config = parse(
            r#"{
                "account": "org-acct",
                "user": "loader",
                "token": "tok",
                "database": "ANALYTICS",
                "schema": "RAW"
            }"#,
        );
        assert_eq!(config.account, "org-acct");
        assert!(config.warehouse.is_none());
        assert!(config.role.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn rejects_empty_schema() {
        let config = parse(
            r#"{
                "account": "org-acct",
                "user": "loader",
                "token": "tok",
                "database": "ANALYTICS",
                "schema": ""
            }"#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = parse(
            r#"{
                "account": "org-acct",
                "user": "loader",
                "token": "super-secret",
                "database": "ANALYTICS",
                "schema": "RAW"
            }"#,
        );
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
