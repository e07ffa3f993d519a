use serde::Deserialize;

/// Policy for a registration whose identifier is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
	/// Fail with [`RegistryError::DuplicateIdentifier`](crate::RegistryError::DuplicateIdentifier).
	#[default]
	Reject,
	/// Keep the first definition seen for an identifier.
	FirstWins,
	/// Overwrite with the last definition seen.
	LastWins,
}

/// Result of a successful registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Identifier was new; definition inserted.
	InsertedNew,
	/// Identifier existed; kept the existing definition.
	KeptExisting,
	/// Identifier existed; replaced with the new definition.
	ReplacedExisting,
}
