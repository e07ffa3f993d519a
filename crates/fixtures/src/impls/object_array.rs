use gridfn_function::{FunctionContext, FunctionDef, FunctionError, function};
use gridfn_value::{JSON_CLASS_NAME, Record, Value};

use crate::ids;

pub const OBJECT_ARRAY_FIELD: &str = "someArray";
pub const OBJECT_ARRAY_ITEM: &str = "000000000000000000000000";
pub const OBJECT_ARRAY_LEN: usize = 11;

function!(FN_RETURN_OBJECT_ARRAY_TRIGGERS_ERROR, {
	id: ids::RETURN_OBJECT_ARRAY_TRIGGERS_ERROR,
	description: "Returns a JSON object whose string array trips the host encoder",
}, handler: return_object_array);

/// Sized to overflow the host runtime's encoding of an object array written
/// into a structured object, so the host fails while serializing the result.
/// The harness itself has no such limit and delivers it as-is.
fn return_object_array(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	let items = vec![Value::from(OBJECT_ARRAY_ITEM); OBJECT_ARRAY_LEN];
	let object = Record::new(JSON_CLASS_NAME).with_field(OBJECT_ARRAY_FIELD, items);
	ctx.send_final(object)?;
	Ok(())
}

pub const DEFS: &[&FunctionDef] = &[&FN_RETURN_OBJECT_ARRAY_TRIGGERS_ERROR];
