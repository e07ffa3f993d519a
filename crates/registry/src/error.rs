/// Registry errors, reported to whoever registers or resolves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Another definition already owns the identifier.
	#[error("duplicate function identifier: {id}")]
	DuplicateIdentifier { id: String },
	/// No definition is registered under the identifier.
	#[error("unknown function identifier: {id}")]
	UnknownIdentifier { id: String },
}
