use std::path::PathBuf;

use gridfn_registry::RegistryError;

/// Errors reported to the invoker before a function runs.
///
/// These never appear inside an [`InvocationOutcome`](crate::InvocationOutcome).
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
	#[error(transparent)]
	Registry(#[from] RegistryError),
	/// The function writes to a region and the execution was not bound to one.
	#[error("function {id} must be executed on a region")]
	RegionRequired { id: String },
	#[error("failed to start invocation worker: {0}")]
	Spawn(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read config {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid config: {0}")]
	Invalid(&'static str),
}
