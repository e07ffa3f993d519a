use std::fmt;

use gridfn_value::Value;

use crate::error::FunctionError;
use crate::region::Region;
use crate::sender::{ResultSender, SendError};


/// Context provided to function handlers.
///
/// Owned by a single invocation and dropped once the handler returns.
pub struct FunctionContext<'a> {
	function_id: &'a str,
	arguments: Option<Vec<Value>>,
	filter: Option<&'a [Value]>,
	region: Option<&'a dyn Region>,
	sender: ResultSender<'a>,
}

impl<'a> FunctionContext<'a> {
	pub fn new(function_id: &'a str, arguments: Option<Vec<Value>>, sender: ResultSender<'a>) -> Self {
		Self {
			function_id,
			arguments,
			filter: None,
			region: None,
			sender,
		}
	}

	/// Restricts the invocation to the given keys.
	pub fn with_filter(mut self, filter: Option<&'a [Value]>) -> Self {
		self.filter = filter;
		self
	}

	/// Binds the invocation to a region.
	pub fn with_region(mut self, region: Option<&'a dyn Region>) -> Self {
		self.region = region;
		self
	}

	pub fn function_id(&self) -> &str {
		self.function_id
	}

	/// Arguments supplied by the caller, or `None` when none were supplied.
	///
	/// An empty slice means the caller supplied an empty argument list.
	pub fn arguments(&self) -> Option<&[Value]> {
		self.arguments.as_deref()
	}

	pub fn require_arguments(&self) -> Result<&[Value], FunctionError> {
		self.arguments().ok_or(FunctionError::MissingArgument("arguments"))
	}

	pub fn filter(&self) -> Option<&'a [Value]> {
		self.filter
	}

	pub fn region(&self) -> Result<&'a dyn Region, FunctionError> {
		self.region.ok_or(FunctionError::NoRegion)
	}

	pub fn sender(&self) -> &ResultSender<'a> {
		&self.sender
	}

	/// Sends a non-terminal result.
	pub fn send_partial(&mut self, value: impl Into<Value>) -> Result<(), SendError> {
		self.sender.send_partial(value)
	}

	/// Sends the last result.
	pub fn send_final(&mut self, value: impl Into<Value>) -> Result<(), SendError> {
		self.sender.send_final(value)
	}

	/// Reports failure through the result sender.
	pub fn send_exception(&mut self, message: impl Into<String>) -> Result<(), SendError> {
		self.sender.send_exception(message)
	}
}

impl fmt::Debug for FunctionContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionContext")
			.field("function_id", &self.function_id)
			.field("arguments", &self.arguments)
			.field("filter", &self.filter)
			.field("region", &self.region.map(|region| region.name()))
			.field("sender", &self.sender)
			.finish()
	}
}
