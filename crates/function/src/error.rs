use gridfn_value::ValueTypeError;

use crate::region::RegionError;
use crate::sender::SendError;

/// Errors a function handler returns instead of terminating its result sender.
///
/// Returning an error is an execution fault: the harness reports it to the
/// caller separately from exceptions sent through the result sender.
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
	/// Failure raised by the function body.
	#[error("{0}")]
	Failed(String),
	/// A required argument was not provided.
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// The function needs a region and the invocation was not bound to one.
	#[error("function requires a region but none was bound")]
	NoRegion,
	#[error(transparent)]
	Send(#[from] SendError),
	#[error(transparent)]
	Region(#[from] RegionError),
}

impl FunctionError {
	pub fn failed(message: impl Into<String>) -> Self {
		Self::Failed(message.into())
	}
}

impl From<ValueTypeError> for FunctionError {
	fn from(err: ValueTypeError) -> Self {
		Self::InvalidArgument(err.to_string())
	}
}
