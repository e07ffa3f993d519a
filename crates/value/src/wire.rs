//! Type-tagged encoding that preserves every variant exactly.
//!
//! Each value is written as `{"type": <tag>, "value": <payload>}`, e.g.
//! `{"type":"long","value":9007199254740992}`. Integers are written as JSON
//! integers, never as floats, so 64-bit values survive a round trip.

use crate::{Record, Value, ValueSet, ValueType};

#[derive(Debug, thiserror::Error)]
pub enum WireError {
	#[error("non-finite {0} cannot be encoded")]
	NonFinite(ValueType),
	#[error("failed to encode value: {0}")]
	Encode(#[source] serde_json::Error),
	#[error("failed to decode value: {0}")]
	Decode(#[source] serde_json::Error),
}

pub fn encode(value: &Value) -> Result<String, WireError> {
	ensure_finite(value)?;
	serde_json::to_string(value).map_err(WireError::Encode)
}

/// Encodes `value` so that values comparing equal encode identically.
///
/// Set members are ordered by their own canonical encoding, recursively, and
/// negative zero is written as zero. Suitable as a lookup key; decoding it
/// yields a value equal to the input.
pub fn encode_canonical(value: &Value) -> Result<String, WireError> {
	ensure_finite(value)?;
	serde_json::to_string(&canonicalize(value)?).map_err(WireError::Encode)
}

pub fn decode(input: &str) -> Result<Value, WireError> {
	serde_json::from_str(input).map_err(WireError::Decode)
}

// JSON has no NaN or infinity; serde_json would silently emit `null`.
fn ensure_finite(value: &Value) -> Result<(), WireError> {
	match value {
		Value::Float(val) if !val.is_finite() => Err(WireError::NonFinite(ValueType::Float)),
		Value::Double(val) if !val.is_finite() => Err(WireError::NonFinite(ValueType::Double)),
		Value::List(vals) => vals.iter().try_for_each(ensure_finite),
		Value::Set(set) => set.iter().try_for_each(ensure_finite),
		Value::Object(record) => record.iter().try_for_each(|(_, v)| ensure_finite(v)),
		_ => Ok(()),
	}
}

fn canonicalize(value: &Value) -> Result<Value, WireError> {
	Ok(match value {
		Value::Float(val) if *val == 0.0 => Value::Float(0.0),
		Value::Double(val) if *val == 0.0 => Value::Double(0.0),
		Value::List(vals) => Value::List(vals.iter().map(canonicalize).collect::<Result<_, _>>()?),
		Value::Set(set) => {
			let mut members = set
				.iter()
				.map(|member| {
					let member = canonicalize(member)?;
					let encoded = serde_json::to_string(&member).map_err(WireError::Encode)?;
					Ok((encoded, member))
				})
				.collect::<Result<Vec<_>, WireError>>()?;
			members.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
			Value::Set(members.into_iter().map(|(_, member)| member).collect::<ValueSet>())
		}
		Value::Object(record) => {
			let mut canonical = Record::with_capacity(record.class_name(), record.len());
			for (key, val) in record {
				canonical.push(key.clone(), canonicalize(val)?);
			}
			Value::Object(canonical)
		}
		other => other.clone(),
	})
}
