use gridfn_function::{FunctionContext, FunctionDef, FunctionError, function};
use gridfn_value::Value;

use crate::ids;

function!(FN_SUM, {
	id: ids::SUM,
	description: "Adds its numeric arguments as doubles",
}, handler: sum);

/// Any numeric variant is accepted as an addend. Folds from `+0.0` so an
/// empty argument list sums to positive zero.
fn sum(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	let total = ctx
		.require_arguments()?
		.iter()
		.try_fold(0.0, |total, addend| addend.as_number().map(|n| total + n))?;
	ctx.send_final(Value::Double(total))?;
	Ok(())
}

pub const DEFS: &[&FunctionDef] = &[&FN_SUM];
