//! Fixture functions for exercising result marshalling between a grid and its
//! clients, and helpers to register them.
//!
//! Every fixture is declared with [`gridfn_function::function!`] and terminates
//! its result sender exactly once, except [`ids::TEST_FUNCTION_EXCEPTION`],
//! which fails its invocation with an execution fault instead.
//!
//! ```ignore
//! let service = gridfn_fixtures::harness(ServiceConfig::default())?;
//! let outcome = service.invoke(ids::SUM, Some(vec![1.5.into(), 2.5.into()]))?;
//! ```

use gridfn_function::FunctionDef;
use gridfn_registry::{FunctionRegistry, RegistryError};
use gridfn_service::{FunctionService, ServiceConfig};

mod impls;

pub use impls::object_array::{OBJECT_ARRAY_FIELD, OBJECT_ARRAY_ITEM, OBJECT_ARRAY_LEN};
pub use impls::passthrough::NO_ARGUMENTS_MESSAGE;
pub use impls::test_function::{EXCEPTION_SENT_MESSAGE, EXCEPTION_THROWN_MESSAGE, FIRST_RESULT, SUCCESS_MESSAGE};

/// Fixture identifiers.
pub mod ids {
	pub const PASSTHROUGH: &str = "Passthrough";
	pub const PUT: &str = "Put";
	pub const RETURN_FLOAT: &str = "ReturnFloat";
	pub const RETURN_INTEGER: &str = "ReturnInteger";
	pub const RETURN_LONG: &str = "ReturnLong";
	pub const RETURN_NEGATIVE_AMBIGUOUS_LONG: &str = "ReturnNegativeAmbiguousLong";
	pub const RETURN_POSITIVE_AMBIGUOUS_LONG: &str = "ReturnPositiveAmbiguousLong";
	pub const RETURN_NULL: &str = "ReturnNull";
	pub const RETURN_SET: &str = "ReturnSet";
	pub const RETURN_SHORT: &str = "ReturnShort";
	pub const RETURN_OBJECT_ARRAY_TRIGGERS_ERROR: &str = "ReturnObjectArrayTriggersError";
	pub const SUM: &str = "Sum";
	pub const TEST_FUNCTION: &str = "TestFunction";
	pub const TEST_FUNCTION_EXCEPTION: &str = "TestFunctionException";
	pub const TEST_FUNCTION_EXCEPTION_RESULT: &str = "TestFunctionExceptionResult";
}

/// The 2^53 boundary returned by the ambiguous-long fixtures.
pub const AMBIGUOUS_LONG: i64 = 9_007_199_254_740_992;

/// All fixture definitions, sorted by identifier.
pub fn builtin_functions() -> Vec<&'static FunctionDef> {
	let mut defs: Vec<_> = impls::DEFS.iter().flat_map(|defs| defs.iter().copied()).collect();
	defs.sort_by_key(|def| def.id());
	defs
}

/// Registers every fixture, returning how many changed the registry.
pub fn install(registry: &FunctionRegistry) -> Result<usize, RegistryError> {
	let changed = registry.register_all(builtin_functions())?;
	tracing::debug!(registry = registry.label(), changed, "fixtures.installed");
	Ok(changed)
}

/// Builds a service with every fixture registered.
pub fn harness(config: ServiceConfig) -> Result<FunctionService, RegistryError> {
	let service = FunctionService::new(config);
	install(service.registry())?;
	Ok(service)
}
