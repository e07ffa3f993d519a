use std::fmt;

use crate::context::FunctionContext;
use crate::error::FunctionError;

/// Function signature for handlers.
///
/// A handler terminates its result sender exactly once, or returns an error
/// without doing so.
pub type FunctionHandler = for<'a> fn(&mut FunctionContext<'a>) -> Result<(), FunctionError>;

/// Static metadata for a function definition.
#[derive(Debug, Clone, Copy)]
pub struct FunctionMeta {
	/// Identifier callers invoke the function by.
	pub id: &'static str,
	/// Description for diagnostics.
	pub description: &'static str,
	/// Bitflags from [`flags`].
	pub flags: u32,
}

/// A registered function definition.
pub struct FunctionDef {
	pub meta: FunctionMeta,
	pub handler: FunctionHandler,
}

impl FunctionDef {
	pub fn id(&self) -> &'static str {
		self.meta.id
	}

	pub fn description(&self) -> &'static str {
		self.meta.description
	}

	pub fn flags(&self) -> u32 {
		self.meta.flags
	}

	pub fn requires_region(&self) -> bool {
		self.meta.flags & flags::REQUIRES_REGION != 0
	}

	/// Runs the handler against `ctx`.
	pub fn call(&self, ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
		(self.handler)(ctx)
	}
}

impl fmt::Debug for FunctionDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionDef").field("meta", &self.meta).finish_non_exhaustive()
	}
}

/// Function flags for optional behavior hints.
pub mod flags {
	/// No special flags.
	pub const NONE: u32 = 0;
	/// The function writes to the region its invocation is bound to.
	pub const REQUIRES_REGION: u32 = 1 << 0;
}

/// Wrapper for [`inventory`] collection of function definitions.
pub struct FunctionReg(pub &'static FunctionDef);
inventory::collect!(FunctionReg);

/// Returns every definition declared with [`function!`](crate::function), sorted by id.
pub fn collected_functions() -> Vec<&'static FunctionDef> {
	let mut defs: Vec<_> = inventory::iter::<FunctionReg>.into_iter().map(|reg| reg.0).collect();
	defs.sort_by_key(|def| def.id());
	defs
}
