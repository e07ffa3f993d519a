use gridfn_function::{FunctionContext, FunctionDef, FunctionError, function};

use crate::ids;

pub const SUCCESS_MESSAGE: &str = "TestFunction succeeded.";
pub const FIRST_RESULT: &str = "First result";
pub const EXCEPTION_SENT_MESSAGE: &str = "Test exception message sent by server.";
pub const EXCEPTION_THROWN_MESSAGE: &str = "Test exception message thrown by server.";

function!(FN_TEST_FUNCTION, {
	id: ids::TEST_FUNCTION,
	description: "Reports success",
}, handler: test_function);

function!(FN_TEST_FUNCTION_EXCEPTION, {
	id: ids::TEST_FUNCTION_EXCEPTION,
	description: "Fails without touching its result sender",
}, handler: test_function_exception);

function!(FN_TEST_FUNCTION_EXCEPTION_RESULT, {
	id: ids::TEST_FUNCTION_EXCEPTION_RESULT,
	description: "Sends one partial result, then an exception",
}, handler: test_function_exception_result);

fn test_function(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	ctx.send_final(SUCCESS_MESSAGE)?;
	Ok(())
}

fn test_function_exception(_: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	Err(FunctionError::failed(EXCEPTION_THROWN_MESSAGE))
}

fn test_function_exception_result(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	ctx.send_partial(FIRST_RESULT)?;
	ctx.send_exception(EXCEPTION_SENT_MESSAGE)?;
	Ok(())
}

pub const DEFS: &[&FunctionDef] = &[
	&FN_TEST_FUNCTION,
	&FN_TEST_FUNCTION_EXCEPTION,
	&FN_TEST_FUNCTION_EXCEPTION_RESULT,
];
