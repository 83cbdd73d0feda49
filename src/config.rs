use crate::contacts::import::TEMPLATE_FILE_NAME;
use std::env;

/// JSON body limit applied to import requests when not configured.
pub const DEFAULT_MAX_PAYLOAD_BYTES: u64 = 2 * 1024 * 1024;

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Runtime configuration for the import endpoints.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Largest JSON request body accepted by preview and commit.
    pub max_payload_bytes: u64,
    /// File name offered when downloading the template.
    pub template_file_name: String,
    pub cors_allow_all: bool,
}

impl ImportConfig {
    pub fn from_env() -> Self {
        Self {
            max_payload_bytes: env_u64("CLAIMDESK_IMPORT_MAX_BYTES", DEFAULT_MAX_PAYLOAD_BYTES),
            template_file_name: env_string("CLAIMDESK_TEMPLATE_FILE_NAME", TEMPLATE_FILE_NAME),
            cors_allow_all: env_bool("CLAIMDESK_CORS_ALLOW_ALL", true),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            template_file_name: TEMPLATE_FILE_NAME.to_string(),
            cors_allow_all: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ImportConfig::default();
        assert_eq!(config.max_payload_bytes, DEFAULT_MAX_PAYLOAD_BYTES);
        assert_eq!(config.template_file_name, "contacts_template.csv");
        assert!(config.cors_allow_all);
    }

    #[test]
    fn missing_variables_fall_back() {
        assert_eq!(env_u64("CLAIMDESK_TEST_UNSET_U64", 7), 7);
        assert_eq!(env_string("CLAIMDESK_TEST_UNSET_STRING", "x"), "x");
        assert!(!env_bool("CLAIMDESK_TEST_UNSET_BOOL", false));
    }
}
