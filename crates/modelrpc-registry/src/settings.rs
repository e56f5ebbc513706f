//! Process-wide registry settings
//!
//! TOML-backed configuration with environment overrides. Only the
//! pagination default matters to derivation; everything else a deployment
//! configures lives with the transport layers, not here.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Environment override for the default pagination class
pub const ENV_DEFAULT_PAGINATION_CLASS: &str = "MODELRPC_DEFAULT_PAGINATION_CLASS";

/// Settings consulted during schema derivation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Pagination class applied to List responses when a service does not
    /// configure one explicitly. `None` leaves unpaginated services
    /// unpaginated.
    #[serde(default)]
    pub default_pagination_class: Option<String>,
}

impl RegistrySettings {
    /// Parse settings from TOML
    ///
    /// Callers that honor environment overrides follow up with
    /// `apply_environment_overrides`.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: RegistrySettings = toml::from_str(raw)?;
        Ok(settings)
    }

    /// Apply environment variable overrides in place
    ///
    /// An empty value clears the default pagination class.
    pub fn apply_environment_overrides(&mut self) {
        if let Ok(value) = std::env::var(ENV_DEFAULT_PAGINATION_CLASS) {
            self.default_pagination_class = if value.is_empty() { None } else { Some(value) };
        }
    }

    /// Convenience constructor for a fixed pagination default
    pub fn with_default_pagination(class: impl Into<String>) -> Self {
        Self {
            default_pagination_class: Some(class.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_pagination() {
        let settings = RegistrySettings::default();
        assert!(settings.default_pagination_class.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let settings =
            RegistrySettings::from_toml_str("default_pagination_class = \"PageNumberPagination\"")
                .unwrap();
        assert_eq!(
            settings.default_pagination_class.as_deref(),
            Some("PageNumberPagination")
        );
    }

    #[test]
    fn test_parse_empty_toml() {
        let settings = RegistrySettings::from_toml_str("").unwrap();
        assert!(settings.default_pagination_class.is_none());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(RegistrySettings::from_toml_str("default_pagination_class = [1]").is_err());
    }

    #[test]
    fn test_environment_override() {
        let mut settings = RegistrySettings::default();
        std::env::set_var(ENV_DEFAULT_PAGINATION_CLASS, "EnvPagination");
        settings.apply_environment_overrides();
        std::env::remove_var(ENV_DEFAULT_PAGINATION_CLASS);
        assert_eq!(settings.default_pagination_class.as_deref(), Some("EnvPagination"));
    }
}
