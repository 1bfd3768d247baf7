//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::network::GENERIC_PREFIX;

/// Which backend the host asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendChoice {
    /// Primary when compiled in, fallback otherwise.
    #[default]
    Auto,
    Primary,
    Fallback,
}

/// What `decode` does when the embedded checksum disagrees with the active
/// backend's checksum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumPolicy {
    /// Never warn or reject; `checksum_valid` is still filled in.
    Ignore,
    /// Log the mismatch and return the record.
    #[default]
    Warn,
    /// Fail with `ChecksumMismatch`.
    Reject,
}

/// Codec settings, typically deserialized from the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Backend to run on.
    pub backend: BackendChoice,
    /// Prefix used by `encode_default`.
    pub default_prefix: u8,
    /// Checksum enforcement on decode.
    pub checksum: ChecksumPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            backend: BackendChoice::Auto,
            default_prefix: 0,
            checksum: ChecksumPolicy::Warn,
        }
    }
}

impl CodecConfig {
    /// Settings for the lookup layer: strict checksums, generic prefix.
    pub fn strict_generic() -> Self {
        CodecConfig {
            backend: BackendChoice::Auto,
            default_prefix: GENERIC_PREFIX,
            checksum: ChecksumPolicy::Reject,
        }
    }

    /// Select the backend.
    pub fn with_backend(mut self, backend: BackendChoice) -> Self {
        self.backend = backend;
        self
    }

    /// Set the prefix `encode_default` uses.
    pub fn with_default_prefix(mut self, prefix: u8) -> Self {
        self.default_prefix = prefix;
        self
    }

    /// Set the checksum policy for decode.
    pub fn with_checksum(mut self, policy: ChecksumPolicy) -> Self {
        self.checksum = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.backend, BackendChoice::Auto);
        assert_eq!(config.default_prefix, 0);
        assert_eq!(config.checksum, ChecksumPolicy::Warn);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"backend": "fallback", "checksum": "reject"}"#).unwrap();
        assert_eq!(config.backend, BackendChoice::Fallback);
        assert_eq!(config.checksum, ChecksumPolicy::Reject);
        assert_eq!(config.default_prefix, 0);

        let empty: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CodecConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_backend() {
        assert!(serde_json::from_str::<CodecConfig>(r#"{"backend": "gpu"}"#).is_err());
    }

    #[test]
    fn test_builders() {
        let config = CodecConfig::default()
            .with_backend(BackendChoice::Fallback)
            .with_default_prefix(2)
            .with_checksum(ChecksumPolicy::Ignore);
        assert_eq!(config.backend, BackendChoice::Fallback);
        assert_eq!(config.default_prefix, 2);
        assert_eq!(config.checksum, ChecksumPolicy::Ignore);
        assert_eq!(CodecConfig::strict_generic().default_prefix, 42);
    }
}
