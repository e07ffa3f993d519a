//! Client-side JSON view of values.
//!
//! Mirrors what a JavaScript caller observes: numbers lose their subtype, sets
//! become arrays and records become plain objects. Longs are emitted as exact
//! integers; ones a JavaScript number cannot hold exactly are logged.

use serde_json::{Map, Value as Json};

use crate::{JSON_CLASS_NAME, Record, Value};

/// Largest integer a JavaScript number represents exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
/// Smallest integer a JavaScript number represents exactly (`-(2^53 - 1)`).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

impl Value {
	/// Converts to the JSON shape a client receives.
	pub fn to_json(&self) -> Json {
		match self {
			Self::Null => Json::Null,
			Self::Bool(val) => Json::Bool(*val),
			Self::Short(val) => Json::from(*val),
			Self::Int(val) => Json::from(*val),
			Self::Long(val) => {
				warn_if_unsafe(*val);
				Json::from(*val)
			}
			Self::Float(val) => Json::from(*val),
			Self::Double(val) => Json::from(*val),
			Self::String(val) => Json::String(val.clone()),
			Self::List(vals) => Json::Array(vals.iter().map(Self::to_json).collect()),
			Self::Set(set) => Json::Array(set.iter().map(Self::to_json).collect()),
			Self::Object(record) => {
				let mut map = Map::with_capacity(record.len());
				for (key, value) in record {
					map.insert(key.clone(), value.to_json());
				}
				Json::Object(map)
			}
		}
	}

	/// Converts client-supplied JSON into a value.
	///
	/// Every JSON number becomes a [`Value::Double`] and every object a record
	/// of class [`JSON_CLASS_NAME`], matching how a JavaScript client encodes
	/// its arguments.
	pub fn from_json(json: &Json) -> Self {
		match json {
			Json::Null => Self::Null,
			Json::Bool(val) => Self::Bool(*val),
			Json::Number(num) => num.as_f64().map_or(Self::Null, Self::Double),
			Json::String(val) => Self::String(val.clone()),
			Json::Array(vals) => Self::List(vals.iter().map(Self::from_json).collect()),
			Json::Object(map) => {
				let mut record = Record::with_capacity(JSON_CLASS_NAME, map.len());
				for (key, value) in map {
					record.push(key.clone(), Self::from_json(value));
				}
				Self::Object(record)
			}
		}
	}
}

fn warn_if_unsafe(val: i64) {
	if val > MAX_SAFE_INTEGER {
		tracing::warn!(value = val, "Received 64 bit integer greater than Number.MAX_SAFE_INTEGER (2^53 - 1)");
	} else if val < MIN_SAFE_INTEGER {
		tracing::warn!(value = val, "Received 64 bit integer less than Number.MIN_SAFE_INTEGER (-1 * 2^53 + 1)");
	}
}
