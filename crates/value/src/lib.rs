//! Value model exchanged between grid functions and their callers.
//!
//! [`Value`] is a closed set of variants covering everything a function may
//! receive as arguments or send back as results: numeric subtypes, strings,
//! booleans, null, ordered lists, unordered sets and structured records.
//! Numeric subtypes are kept distinct so callers can assert on the exact type
//! a function produced.
//!
//! Two encodings are provided:
//! * [`Value::to_json`] / [`Value::from_json`]: the view a JavaScript client has
//!   of a value (type tags dropped, sets flattened to arrays).
//! * [`wire`]: a type-tagged encoding that round-trips every variant exactly.

mod json;
mod record;
mod set;
pub mod wire;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use json::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use record::{JSON_CLASS_NAME, Record, RecordIter};
pub use set::ValueSet;

/// A single typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
	Null,
	Bool(bool),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	String(String),
	List(Vec<Value>),
	Set(ValueSet),
	Object(Record),
}

impl Value {
	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn value_type(&self) -> ValueType {
		match self {
			Self::Null => ValueType::Null,
			Self::Bool(_) => ValueType::Bool,
			Self::Short(_) => ValueType::Short,
			Self::Int(_) => ValueType::Int,
			Self::Long(_) => ValueType::Long,
			Self::Float(_) => ValueType::Float,
			Self::Double(_) => ValueType::Double,
			Self::String(_) => ValueType::String,
			Self::List(_) => ValueType::List,
			Self::Set(_) => ValueType::Set,
			Self::Object(_) => ValueType::Object,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	pub fn as_bool(&self) -> Result<bool, ValueTypeError> {
		match self {
			Self::Bool(val) => Ok(*val),
			other => Err(ValueTypeError::new("bool", other.value_type())),
		}
	}

	pub fn as_short(&self) -> Result<i16, ValueTypeError> {
		match self {
			Self::Short(val) => Ok(*val),
			other => Err(ValueTypeError::new("short", other.value_type())),
		}
	}

	pub fn as_int(&self) -> Result<i32, ValueTypeError> {
		match self {
			Self::Int(val) => Ok(*val),
			other => Err(ValueTypeError::new("int", other.value_type())),
		}
	}

	pub fn as_long(&self) -> Result<i64, ValueTypeError> {
		match self {
			Self::Long(val) => Ok(*val),
			other => Err(ValueTypeError::new("long", other.value_type())),
		}
	}

	pub fn as_float(&self) -> Result<f32, ValueTypeError> {
		match self {
			Self::Float(val) => Ok(*val),
			other => Err(ValueTypeError::new("float", other.value_type())),
		}
	}

	pub fn as_double(&self) -> Result<f64, ValueTypeError> {
		match self {
			Self::Double(val) => Ok(*val),
			other => Err(ValueTypeError::new("double", other.value_type())),
		}
	}

	/// Widens any numeric variant to `f64`.
	///
	/// Longs beyond 2^53 lose precision here; use [`Value::as_long`] when the
	/// exact integer matters.
	pub fn as_number(&self) -> Result<f64, ValueTypeError> {
		match self {
			Self::Short(val) => Ok(f64::from(*val)),
			Self::Int(val) => Ok(f64::from(*val)),
			Self::Long(val) => Ok(*val as f64),
			Self::Float(val) => Ok(f64::from(*val)),
			Self::Double(val) => Ok(*val),
			other => Err(ValueTypeError::new("number", other.value_type())),
		}
	}

	pub fn as_str(&self) -> Result<&str, ValueTypeError> {
		match self {
			Self::String(val) => Ok(val),
			other => Err(ValueTypeError::new("string", other.value_type())),
		}
	}

	pub fn as_list(&self) -> Result<&[Value], ValueTypeError> {
		match self {
			Self::List(vals) => Ok(vals),
			other => Err(ValueTypeError::new("list", other.value_type())),
		}
	}

	pub fn as_set(&self) -> Result<&ValueSet, ValueTypeError> {
		match self {
			Self::Set(set) => Ok(set),
			other => Err(ValueTypeError::new("set", other.value_type())),
		}
	}

	pub fn as_record(&self) -> Result<&Record, ValueTypeError> {
		match self {
			Self::Object(val) => Ok(val),
			other => Err(ValueTypeError::new("object", other.value_type())),
		}
	}
}

impl From<bool> for Value {
	fn from(val: bool) -> Self {
		Self::Bool(val)
	}
}

impl From<i16> for Value {
	fn from(val: i16) -> Self {
		Self::Short(val)
	}
}

impl From<i32> for Value {
	fn from(val: i32) -> Self {
		Self::Int(val)
	}
}

impl From<i64> for Value {
	fn from(val: i64) -> Self {
		Self::Long(val)
	}
}

impl From<f32> for Value {
	fn from(val: f32) -> Self {
		Self::Float(val)
	}
}

impl From<f64> for Value {
	fn from(val: f64) -> Self {
		Self::Double(val)
	}
}

impl From<String> for Value {
	fn from(val: String) -> Self {
		Self::String(val)
	}
}

impl From<&str> for Value {
	fn from(val: &str) -> Self {
		Self::String(val.to_owned())
	}
}

impl From<Vec<Value>> for Value {
	fn from(vals: Vec<Value>) -> Self {
		Self::List(vals)
	}
}

impl From<ValueSet> for Value {
	fn from(set: ValueSet) -> Self {
		Self::Set(set)
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Self::Object(record)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(val: Option<T>) -> Self {
		val.map_or(Self::Null, Into::into)
	}
}

/// Coarse value type used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Null,
	Bool,
	Short,
	Int,
	Long,
	Float,
	Double,
	String,
	List,
	Set,
	Object,
}

impl ValueType {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::String => "string",
			Self::List => "list",
			Self::Set => "set",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned by typed accessors like [`Value::as_long`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {got}")]
pub struct ValueTypeError {
	expected: &'static str,
	got: ValueType,
}

impl ValueTypeError {
	pub fn new(expected: &'static str, got: ValueType) -> Self {
		Self { expected, got }
	}

	pub fn expected(&self) -> &'static str {
		self.expected
	}

	pub fn got(&self) -> ValueType {
		self.got
	}
}
