//! Function definitions and the per-invocation execution surface.
//!
//! * [`FunctionDef`]: a named handler plus metadata, declared with [`function!`]
//!   and collected through [`inventory`].
//! * [`FunctionContext`]: arguments, filter and region handed to one invocation.
//! * [`ResultSender`]: the `Open -> Terminated` result channel a handler
//!   terminates exactly once.
//! * [`Region`]: key-value store a function may write to.

mod context;
mod def;
mod error;
mod macros;
mod region;
mod sender;

pub use context::FunctionContext;
pub use def::{FunctionDef, FunctionHandler, FunctionMeta, FunctionReg, collected_functions, flags};
pub use error::FunctionError;
#[doc(hidden)]
pub use inventory;
pub use region::{MemoryRegion, Region, RegionError};
pub use sender::{ResultSender, ResultSink, SendError, SenderEvent, SenderState, Terminal};
