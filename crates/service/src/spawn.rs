use std::io;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

fn runtime_handle() -> io::Result<Handle> {
	if let Ok(handle) = Handle::try_current() {
		return Ok(handle);
	}

	static GLOBAL_RT: OnceLock<Runtime> = OnceLock::new();
	if let Some(runtime) = GLOBAL_RT.get() {
		return Ok(runtime.handle().clone());
	}
	let runtime = Builder::new_multi_thread().worker_threads(1).thread_name("gridfn-invoke").build()?;
	Ok(GLOBAL_RT.get_or_init(|| runtime).handle().clone())
}

/// Runs a function invocation on the blocking pool.
///
/// Uses the ambient tokio runtime when there is one, otherwise a lazily
/// built process-wide runtime.
pub(crate) fn spawn_invocation<F, R>(function_id: &'static str, f: F) -> io::Result<JoinHandle<R>>
where
	F: FnOnce() -> R + Send + 'static,
	R: Send + 'static,
{
	tracing::trace!(function_id, "invoke.spawn_blocking");
	Ok(runtime_handle()?.spawn_blocking(f))
}
