use gridfn_function::FunctionDef;

pub(crate) mod literals;
pub(crate) mod object_array;
pub(crate) mod passthrough;
pub(crate) mod put;
pub(crate) mod sum;
pub(crate) mod test_function;

pub(crate) const DEFS: &[&[&FunctionDef]] = &[
	literals::DEFS,
	object_array::DEFS,
	passthrough::DEFS,
	put::DEFS,
	sum::DEFS,
	test_function::DEFS,
];
