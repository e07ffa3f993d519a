/// Declares a function definition and submits it for collection.
///
/// ```ignore
/// function!(RETURN_NULL, {
///     id: "ReturnNull",
///     description: "Returns null",
/// }, handler: return_null);
/// ```
#[macro_export]
macro_rules! function {
	($static_name:ident, {
		id: $id:expr,
		description: $desc:expr
		$(, flags: $flags:expr)?
		$(,)?
	}, handler: $handler:expr) => {
		pub static $static_name: $crate::FunctionDef = $crate::FunctionDef {
			meta: $crate::FunctionMeta {
				id: $id,
				description: $desc,
				flags: $crate::__fn_opt!($({$flags})?, $crate::flags::NONE),
			},
			handler: $handler,
		};

		$crate::inventory::submit! { $crate::FunctionReg(&$static_name) }
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fn_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
