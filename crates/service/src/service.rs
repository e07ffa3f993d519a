use std::sync::Arc;

use gridfn_function::{FunctionDef, Region};
use gridfn_registry::FunctionRegistry;
use gridfn_value::Value;
use tokio::sync::mpsc;

use crate::config::ServiceConfig;
use crate::dispatch::{Request, dispatch, run_collected};
use crate::error::InvokeError;
use crate::outcome::InvocationOutcome;
use crate::spawn::spawn_invocation;
use crate::stream::{ChannelSink, ResultStream, StreamEvent};


/// Invokes functions from a shared registry.
///
/// Cloning is cheap; clones share the registry.
#[derive(Debug, Clone)]
pub struct FunctionService {
	registry: Arc<FunctionRegistry>,
	config: ServiceConfig,
}

impl FunctionService {
	/// Creates a service with an empty registry using the configured duplicate policy.
	pub fn new(config: ServiceConfig) -> Self {
		let registry = FunctionRegistry::with_policy("functions", config.duplicate_policy);
		Self::with_registry(Arc::new(registry), config)
	}

	pub fn with_registry(registry: Arc<FunctionRegistry>, config: ServiceConfig) -> Self {
		Self { registry, config }
	}

	pub fn registry(&self) -> &FunctionRegistry {
		&self.registry
	}

	pub fn config(&self) -> &ServiceConfig {
		&self.config
	}

	/// Runs `id` with `arguments` on the calling thread.
	pub fn invoke(&self, id: &str, arguments: Option<Vec<Value>>) -> Result<InvocationOutcome, InvokeError> {
		let mut execution = self.execution(id);
		execution.arguments = arguments;
		execution.execute()
	}

	/// Starts building an invocation of `id`.
	pub fn execution(&self, id: &str) -> Execution<'_> {
		Execution {
			service: self,
			id: id.to_owned(),
			arguments: None,
			filter: None,
			region: None,
		}
	}
}

/// Builder for a single invocation.
#[must_use]
pub struct Execution<'s> {
	service: &'s FunctionService,
	id: String,
	arguments: Option<Vec<Value>>,
	filter: Option<Vec<Value>>,
	region: Option<Arc<dyn Region>>,
}

impl Execution<'_> {
	pub fn with_args(mut self, arguments: Vec<Value>) -> Self {
		self.arguments = Some(arguments);
		self
	}

	/// Restricts a region-bound function to the given keys.
	pub fn with_filter(mut self, keys: Vec<Value>) -> Self {
		self.filter = Some(keys);
		self
	}

	pub fn on_region(mut self, region: Arc<dyn Region>) -> Self {
		self.region = Some(region);
		self
	}

	fn prepare(self) -> Result<(Request, &'static FunctionDef, ServiceConfig), InvokeError> {
		let def = self.service.registry.resolve(&self.id)?;
		if def.requires_region() && self.region.is_none() {
			return Err(InvokeError::RegionRequired { id: self.id });
		}
		let request = Request {
			def,
			arguments: self.arguments,
			filter: self.filter,
			region: self.region,
		};
		Ok((request, def, self.service.config.clone()))
	}

	/// Runs the function on the calling thread and collects every result.
	pub fn execute(self) -> Result<InvocationOutcome, InvokeError> {
		let (request, _, config) = self.prepare()?;
		Ok(run_collected(request, config.isolate_panics))
	}

	/// Runs the function on a blocking worker, streaming results as they are sent.
	///
	/// Uses the current tokio runtime when called from within one.
	pub fn execute_streaming(self) -> Result<ResultStream, InvokeError> {
		let (request, def, config) = self.prepare()?;
		let (tx, rx) = mpsc::channel(config.stream_capacity.max(1));
		let isolate_panics = config.isolate_panics;
		spawn_invocation(def.id(), move || {
			let mut sink = ChannelSink::new(tx);
			if let Some(fault) = dispatch(request, &mut sink, isolate_panics) {
				sink.push(StreamEvent::Error(fault));
			}
		})?;
		Ok(ResultStream::new(rx))
	}
}

impl std::fmt::Debug for Execution<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Execution")
			.field("id", &self.id)
			.field("arguments", &self.arguments)
			.field("filter", &self.filter)
			.field("region", &self.region.as_ref().map(|region| region.name()))
			.finish()
	}
}
