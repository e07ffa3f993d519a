use std::fmt;

use gridfn_value::Value;

/// Which path an invocation failure took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The function sent an exception through its result sender.
	ChannelException,
	/// The function body failed (returned an error or panicked) before
	/// terminating its result sender.
	ExecutionFault,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ChannelException => f.write_str("channel_exception"),
			Self::ExecutionFault => f.write_str("execution_fault"),
		}
	}
}

/// Caller-visible invocation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvocationError {
	pub kind: ErrorKind,
	pub message: String,
}

impl InvocationError {
	pub fn exception(message: impl Into<String>) -> Self {
		Self {
			kind: ErrorKind::ChannelException,
			message: message.into(),
		}
	}

	pub fn fault(message: impl Into<String>) -> Self {
		Self {
			kind: ErrorKind::ExecutionFault,
			message: message.into(),
		}
	}
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
	Value(Value),
	Error(InvocationError),
}

/// Everything a caller observed from one invocation, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOutcome {
	/// Partial results sent before the completion.
	pub partials: Vec<Value>,
	pub completion: Completion,
}

impl InvocationOutcome {
	/// The final value, if the invocation succeeded.
	pub fn value(&self) -> Option<&Value> {
		match &self.completion {
			Completion::Value(value) => Some(value),
			Completion::Error(_) => None,
		}
	}

	/// The failure, if the invocation failed.
	pub fn error(&self) -> Option<&InvocationError> {
		match &self.completion {
			Completion::Value(_) => None,
			Completion::Error(err) => Some(err),
		}
	}

	pub fn is_ok(&self) -> bool {
		matches!(self.completion, Completion::Value(_))
	}

	/// Collapses the outcome the way a synchronous caller sees it.
	///
	/// A single result is returned as-is; several results (partials plus the
	/// final value) are returned as a [`Value::List`] in send order.
	pub fn into_value(self) -> Result<Value, InvocationError> {
		let last = match self.completion {
			Completion::Value(value) => value,
			Completion::Error(err) => return Err(err),
		};
		if self.partials.is_empty() {
			return Ok(last);
		}
		let mut results = self.partials;
		results.push(last);
		Ok(Value::List(results))
	}
}
