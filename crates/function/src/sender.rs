//! Per-invocation result channel.
//!
//! # Invariants
//!
//! - A sender starts `Open` and terminates at most once, via
//!   [`ResultSender::send_final`] or [`ResultSender::send_exception`].
//! - Partial results are only accepted while `Open`.
//! - Every send after termination fails with [`SendError::AlreadyTerminated`]
//!   and leaves the sink untouched.

use std::fmt;

use gridfn_value::Value;

#[cfg(test)]
mod tests;

/// Event written to a [`ResultSink`] by a [`ResultSender`].
#[derive(Debug, Clone, PartialEq)]
pub enum SenderEvent {
	/// Non-terminal result; more may follow.
	Partial(Value),
	/// The last result of the invocation.
	Last(Value),
	/// The invocation failed with the given message.
	Exception(String),
}

impl SenderEvent {
	pub fn is_terminal(&self) -> bool {
		!matches!(self, Self::Partial(_))
	}
}

/// Destination for sender events.
pub trait ResultSink {
	fn accept(&mut self, event: SenderEvent);
}

impl ResultSink for Vec<SenderEvent> {
	fn accept(&mut self, event: SenderEvent) {
		self.push(event);
	}
}

/// How a sender was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
	Final,
	Exception,
}

impl fmt::Display for Terminal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Final => f.write_str("final result"),
			Self::Exception => f.write_str("exception"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderState {
	Open,
	Terminated(Terminal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
	#[error("result sender already terminated by {0}")]
	AlreadyTerminated(Terminal),
}

/// Result channel handed to a function through its context.
pub struct ResultSender<'a> {
	sink: &'a mut dyn ResultSink,
	state: SenderState,
	partials: usize,
}

impl<'a> ResultSender<'a> {
	pub fn new(sink: &'a mut dyn ResultSink) -> Self {
		Self {
			sink,
			state: SenderState::Open,
			partials: 0,
		}
	}

	pub fn state(&self) -> SenderState {
		self.state
	}

	pub fn is_terminated(&self) -> bool {
		matches!(self.state, SenderState::Terminated(_))
	}

	/// Number of partial results sent so far.
	pub fn partials_sent(&self) -> usize {
		self.partials
	}

	/// Sends a non-terminal result.
	pub fn send_partial(&mut self, value: impl Into<Value>) -> Result<(), SendError> {
		self.ensure_open()?;
		self.partials += 1;
		self.sink.accept(SenderEvent::Partial(value.into()));
		Ok(())
	}

	/// Sends the last result and terminates the sender.
	pub fn send_final(&mut self, value: impl Into<Value>) -> Result<(), SendError> {
		self.ensure_open()?;
		self.state = SenderState::Terminated(Terminal::Final);
		self.sink.accept(SenderEvent::Last(value.into()));
		Ok(())
	}

	/// Reports failure to the caller and terminates the sender.
	pub fn send_exception(&mut self, message: impl Into<String>) -> Result<(), SendError> {
		self.ensure_open()?;
		self.state = SenderState::Terminated(Terminal::Exception);
		self.sink.accept(SenderEvent::Exception(message.into()));
		Ok(())
	}

	fn ensure_open(&self) -> Result<(), SendError> {
		match self.state {
			SenderState::Open => Ok(()),
			SenderState::Terminated(terminal) => Err(SendError::AlreadyTerminated(terminal)),
		}
	}
}

impl fmt::Debug for ResultSender<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResultSender")
			.field("state", &self.state)
			.field("partials", &self.partials)
			.finish_non_exhaustive()
	}
}
