use std::io::Write;

use gridfn_registry::DuplicatePolicy;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_input_uses_defaults() {
	let config = ServiceConfig::from_toml_str("").unwrap();
	assert_eq!(config, ServiceConfig::default());
	assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
	assert!(config.isolate_panics);
	assert_eq!(config.stream_capacity, 64);
}

#[test]
fn parses_all_fields() {
	let config = ServiceConfig::from_toml_str(
		r#"
		duplicate_policy = "last_wins"
		isolate_panics = false
		stream_capacity = 8
		"#,
	)
	.unwrap();
	assert_eq!(
		config,
		ServiceConfig {
			duplicate_policy: DuplicatePolicy::LastWins,
			isolate_panics: false,
			stream_capacity: 8,
		}
	);
}

#[test]
fn rejects_unknown_fields_and_policies() {
	assert!(matches!(ServiceConfig::from_toml_str("timeout = 3"), Err(ConfigError::Parse(_))));
	assert!(matches!(
		ServiceConfig::from_toml_str("duplicate_policy = \"by_priority\""),
		Err(ConfigError::Parse(_))
	));
}

#[test]
fn rejects_zero_stream_capacity() {
	let err = ServiceConfig::from_toml_str("stream_capacity = 0").unwrap_err();
	assert!(matches!(err, ConfigError::Invalid(_)));
	assert_eq!(err.to_string(), "invalid config: stream_capacity must be greater than zero");
}

#[test]
fn loads_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "duplicate_policy = \"first_wins\"").unwrap();
	let config = ServiceConfig::load(file.path()).unwrap();
	assert_eq!(config.duplicate_policy, DuplicatePolicy::FirstWins);
}

#[test]
fn missing_file_reports_path() {
	let err = ServiceConfig::load("/nonexistent/gridfn.toml").unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
	assert!(err.to_string().contains("/nonexistent/gridfn.toml"));
}
