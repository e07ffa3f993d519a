use gridfn_function::{FunctionContext, FunctionDef, FunctionError, flags, function};

use crate::ids;

function!(FN_PUT, {
	id: ids::PUT,
	description: "Writes arguments [key, value] into the bound region",
	flags: flags::REQUIRES_REGION,
}, handler: put);

fn put(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	let args = ctx.require_arguments()?;
	let [key, value] = args else {
		return Err(FunctionError::InvalidArgument(format!(
			"expected [key, value], got {} arguments",
			args.len()
		)));
	};
	let (key, value) = (key.clone(), value.clone());
	let region = ctx.region()?;
	tracing::trace!(region = region.name(), "fixture.put");
	region.put(key, value)?;
	ctx.send_final(true)?;
	Ok(())
}

pub const DEFS: &[&FunctionDef] = &[&FN_PUT];
