use std::path::Path;

use gridfn_registry::DuplicatePolicy;
use serde::Deserialize;

use crate::error::ConfigError;

#[cfg(test)]
mod tests;

/// Service configuration, usually read from a TOML file.
///
/// ```toml
/// duplicate_policy = "last_wins"
/// isolate_panics = true
/// stream_capacity = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
	/// What the registry does when an identifier is registered twice.
	pub duplicate_policy: DuplicatePolicy,
	/// Convert panics in function bodies into execution faults.
	pub isolate_panics: bool,
	/// Events buffered between a streaming function and its reader.
	pub stream_capacity: usize,
}

impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			duplicate_policy: DuplicatePolicy::Reject,
			isolate_panics: true,
			stream_capacity: 64,
		}
	}
}

impl ServiceConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&input)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.stream_capacity == 0 {
			return Err(ConfigError::Invalid("stream_capacity must be greater than zero"));
		}
		Ok(())
	}
}
