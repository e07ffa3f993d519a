//! Runs one function against one context.
//!
//! # Invariants
//!
//! - Exactly one completion is produced per invocation: either the terminal
//!   event the function sent, or a fault, never both.
//! - A fault is only produced while the result sender is still open.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use gridfn_function::{FunctionContext, FunctionDef, FunctionError, Region, ResultSender, ResultSink, SenderEvent, SenderState};
use gridfn_value::Value;

use crate::outcome::{Completion, InvocationError, InvocationOutcome};

pub(crate) const NO_LAST_RESULT: &str = "function returned without sending a last result";

/// A resolved invocation, ready to run.
pub(crate) struct Request {
	pub def: &'static FunctionDef,
	pub arguments: Option<Vec<Value>>,
	pub filter: Option<Vec<Value>>,
	pub region: Option<Arc<dyn Region>>,
}

/// Runs the request, writing sender events into `sink`.
///
/// Returns the execution fault to report, if the function failed without
/// terminating its sender.
pub(crate) fn dispatch<S: ResultSink>(request: Request, sink: &mut S, isolate_panics: bool) -> Option<InvocationError> {
	let Request {
		def,
		arguments,
		filter,
		region,
	} = request;

	let span = tracing::debug_span!("invoke", function_id = def.id());
	let _guard = span.enter();

	let mut ctx = FunctionContext::new(def.id(), arguments, ResultSender::new(sink))
		.with_filter(filter.as_deref())
		.with_region(region.as_deref());

	let result = if isolate_panics {
		catch_unwind(AssertUnwindSafe(|| def.call(&mut ctx))).unwrap_or_else(|payload| Err(FunctionError::failed(panic_message(payload.as_ref()))))
	} else {
		def.call(&mut ctx)
	};

	let state = ctx.sender().state();
	let partials = ctx.sender().partials_sent();
	match (result, state) {
		(Ok(()), SenderState::Terminated(terminal)) => {
			tracing::debug!(partials, %terminal, "invoke.complete");
			None
		}
		(Ok(()), SenderState::Open) => {
			tracing::warn!(partials, "invoke.no_last_result");
			Some(InvocationError::fault(NO_LAST_RESULT))
		}
		(Err(err), SenderState::Open) => {
			tracing::debug!(partials, error = %err, "invoke.fault");
			Some(InvocationError::fault(err.to_string()))
		}
		(Err(err), SenderState::Terminated(terminal)) => {
			tracing::warn!(partials, %terminal, error = %err, "invoke.error_after_terminal");
			None
		}
	}
}

/// Runs the request on the calling thread and collects its outcome.
pub(crate) fn run_collected(request: Request, isolate_panics: bool) -> InvocationOutcome {
	let mut events: Vec<SenderEvent> = Vec::new();
	let fault = dispatch(request, &mut events, isolate_panics);

	let mut partials = Vec::new();
	let mut completion = None;
	for event in events {
		match event {
			SenderEvent::Partial(value) => partials.push(value),
			SenderEvent::Last(value) => completion = Some(Completion::Value(value)),
			SenderEvent::Exception(message) => completion = Some(Completion::Error(InvocationError::exception(message))),
		}
	}

	let completion = fault
		.map(Completion::Error)
		.or(completion)
		.unwrap_or_else(|| Completion::Error(InvocationError::fault(NO_LAST_RESULT)));
	InvocationOutcome { partials, completion }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	let detail = payload
		.downcast_ref::<&str>()
		.copied()
		.or_else(|| payload.downcast_ref::<String>().map(String::as_str))
		.unwrap_or("non-string panic payload");
	format!("function panicked: {detail}")
}
