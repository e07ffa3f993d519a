//! Fixtures returning a fixed value regardless of their arguments.

use gridfn_function::{FunctionContext, FunctionDef, FunctionError, function};
use gridfn_value::{Value, ValueSet};

use crate::{AMBIGUOUS_LONG, ids};

macro_rules! literal {
	($static_name:ident, $handler:ident, $id:expr, $desc:expr, $value:expr) => {
		function!($static_name, {
			id: $id,
			description: $desc,
		}, handler: $handler);

		fn $handler(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
			ctx.send_final($value)?;
			Ok(())
		}
	};
}

literal!(FN_RETURN_FLOAT, return_float, ids::RETURN_FLOAT, "Returns the float 1.0", Value::Float(1.0));
literal!(FN_RETURN_INTEGER, return_integer, ids::RETURN_INTEGER, "Returns the 32-bit integer 1", Value::Int(1));
literal!(FN_RETURN_LONG, return_long, ids::RETURN_LONG, "Returns the 64-bit integer 1", Value::Long(1));
literal!(FN_RETURN_SHORT, return_short, ids::RETURN_SHORT, "Returns the 16-bit integer 1", Value::Short(1));
literal!(FN_RETURN_NULL, return_null, ids::RETURN_NULL, "Returns null", Value::Null);
literal!(
	FN_RETURN_NEGATIVE_AMBIGUOUS_LONG,
	return_negative_ambiguous_long,
	ids::RETURN_NEGATIVE_AMBIGUOUS_LONG,
	"Returns -2^53, the first integer a double cannot tell from its neighbour",
	Value::Long(-AMBIGUOUS_LONG)
);
literal!(
	FN_RETURN_POSITIVE_AMBIGUOUS_LONG,
	return_positive_ambiguous_long,
	ids::RETURN_POSITIVE_AMBIGUOUS_LONG,
	"Returns 2^53, the first integer a double cannot tell from its neighbour",
	Value::Long(AMBIGUOUS_LONG)
);
literal!(
	FN_RETURN_SET,
	return_set,
	ids::RETURN_SET,
	"Returns the set {\"foo\", \"bar\"}",
	["foo", "bar"].into_iter().map(Value::from).collect::<ValueSet>()
);

pub const DEFS: &[&FunctionDef] = &[
	&FN_RETURN_FLOAT,
	&FN_RETURN_INTEGER,
	&FN_RETURN_LONG,
	&FN_RETURN_NEGATIVE_AMBIGUOUS_LONG,
	&FN_RETURN_NULL,
	&FN_RETURN_POSITIVE_AMBIGUOUS_LONG,
	&FN_RETURN_SET,
	&FN_RETURN_SHORT,
];
