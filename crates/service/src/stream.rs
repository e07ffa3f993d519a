//! Streaming delivery of invocation results.
//!
//! A streaming invocation yields one [`StreamEvent::Data`] per result the
//! function sends (partials and the last result alike), followed by exactly
//! one terminal event: [`StreamEvent::End`] or [`StreamEvent::Error`].

use gridfn_function::{ResultSink, SenderEvent};
use gridfn_value::Value;
use tokio::sync::mpsc;

use crate::dispatch::NO_LAST_RESULT;
use crate::outcome::{Completion, InvocationError, InvocationOutcome};

const WORKER_LOST: &str = "invocation worker stopped before completing";

#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
	/// A result sent by the function.
	Data(Value),
	/// The function sent its last result.
	End,
	/// The invocation failed.
	Error(InvocationError),
}

impl StreamEvent {
	pub fn is_terminal(&self) -> bool {
		!matches!(self, Self::Data(_))
	}
}

/// Sink forwarding sender events into a bounded channel.
///
/// Must only be used off the async executor: sends block when the reader
/// falls behind.
pub(crate) struct ChannelSink {
	tx: mpsc::Sender<StreamEvent>,
}

impl ChannelSink {
	pub(crate) fn new(tx: mpsc::Sender<StreamEvent>) -> Self {
		Self { tx }
	}

	pub(crate) fn push(&mut self, event: StreamEvent) {
		if self.tx.blocking_send(event).is_err() {
			tracing::trace!("invoke.stream_reader_dropped");
		}
	}
}

impl ResultSink for ChannelSink {
	fn accept(&mut self, event: SenderEvent) {
		match event {
			SenderEvent::Partial(value) => self.push(StreamEvent::Data(value)),
			SenderEvent::Last(value) => {
				self.push(StreamEvent::Data(value));
				self.push(StreamEvent::End);
			}
			SenderEvent::Exception(message) => self.push(StreamEvent::Error(InvocationError::exception(message))),
		}
	}
}

/// Reader side of a streaming invocation.
#[derive(Debug)]
pub struct ResultStream {
	rx: mpsc::Receiver<StreamEvent>,
	finished: bool,
}

impl ResultStream {
	pub(crate) fn new(rx: mpsc::Receiver<StreamEvent>) -> Self {
		Self { rx, finished: false }
	}

	/// Waits for the next event; `None` once the terminal event was returned.
	///
	/// If the worker goes away without a terminal event, an execution fault
	/// is reported in its place.
	pub async fn next(&mut self) -> Option<StreamEvent> {
		if self.finished {
			return None;
		}
		match self.rx.recv().await {
			Some(event) => {
				self.finished = event.is_terminal();
				Some(event)
			}
			None => {
				self.finished = true;
				Some(StreamEvent::Error(InvocationError::fault(WORKER_LOST)))
			}
		}
	}

	/// Drains the stream into an outcome.
	pub async fn collect(mut self) -> InvocationOutcome {
		let mut data = Vec::new();
		while let Some(event) = self.next().await {
			match event {
				StreamEvent::Data(value) => data.push(value),
				StreamEvent::End => {
					let completion = data
						.pop()
						.map_or_else(|| Completion::Error(InvocationError::fault(NO_LAST_RESULT)), Completion::Value);
					return InvocationOutcome { partials: data, completion };
				}
				StreamEvent::Error(err) => {
					return InvocationOutcome {
						partials: data,
						completion: Completion::Error(err),
					};
				}
			}
		}
		InvocationOutcome {
			partials: data,
			completion: Completion::Error(InvocationError::fault(WORKER_LOST)),
		}
	}
}
