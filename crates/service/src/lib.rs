//! Invocation entry points for registered grid functions.
//!
//! [`FunctionService`] resolves a function by identifier, builds its context
//! and runs it, turning whatever the function did into an outcome:
//! * [`Execution::execute`] runs on the calling thread and returns an
//!   [`InvocationOutcome`].
//! * [`Execution::execute_streaming`] runs on a blocking worker and yields
//!   [`StreamEvent`]s as the function sends them.
//!
//! Exceptions sent through the result sender and faults raised by the
//! function body stay distinguishable via [`ErrorKind`].

mod config;
mod dispatch;
mod error;
mod outcome;
mod service;
mod spawn;
mod stream;

pub use config::ServiceConfig;
pub use error::{ConfigError, InvokeError};
pub use outcome::{Completion, ErrorKind, InvocationError, InvocationOutcome};
pub use service::{Execution, FunctionService};
pub use stream::{ResultStream, StreamEvent};
