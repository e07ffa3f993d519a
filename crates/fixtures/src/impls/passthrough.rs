use gridfn_function::{FunctionContext, FunctionDef, FunctionError, function};
use gridfn_value::Value;

use crate::ids;

pub const NO_ARGUMENTS_MESSAGE: &str = "Expected arguments; no arguments received";

function!(FN_PASSTHROUGH, {
	id: ids::PASSTHROUGH,
	description: "Echoes its arguments back unchanged",
}, handler: passthrough);

fn passthrough(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	let Some(args) = ctx.arguments() else {
		ctx.send_exception(NO_ARGUMENTS_MESSAGE)?;
		return Ok(());
	};
	let echoed = Value::List(args.to_vec());
	ctx.send_final(echoed)?;
	Ok(())
}

pub const DEFS: &[&FunctionDef] = &[&FN_PASSTHROUGH];
