use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::wire::{self, WireError};
use crate::{JSON_CLASS_NAME, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, Record, Value, ValueSet, ValueType};

const TWO_POW_53: i64 = 9_007_199_254_740_992;

#[test]
fn set_equality_ignores_order() {
	let a: ValueSet = vec![Value::from("foo"), Value::from("bar")].into();
	let b: ValueSet = vec![Value::from("bar"), Value::from("foo")].into();
	assert_eq!(a, b);
	assert_eq!(Value::Set(a), Value::Set(b));
}

#[test]
fn set_insert_rejects_duplicates() {
	let mut set = ValueSet::new();
	assert!(set.insert(Value::from("foo")));
	assert!(!set.insert(Value::from("foo")));
	assert!(set.insert(Value::Long(1)));
	assert!(set.insert(Value::Int(1)), "int and long are distinct members");
	assert_eq!(set.len(), 3);
}

#[test]
fn typed_accessor_reports_mismatch() {
	let err = Value::from("x").as_long().unwrap_err();
	assert_eq!(err.expected(), "long");
	assert_eq!(err.got(), ValueType::String);
	assert_eq!(err.to_string(), "expected long, got string");
}

#[test]
fn as_number_widens_numeric_variants() {
	assert_eq!(Value::Short(2).as_number(), Ok(2.0));
	assert_eq!(Value::Int(3).as_number(), Ok(3.0));
	assert_eq!(Value::Long(4).as_number(), Ok(4.0));
	assert_eq!(Value::Float(1.5).as_number(), Ok(1.5));
	assert_eq!(Value::Double(2.5).as_number(), Ok(2.5));
	assert!(Value::Bool(true).as_number().is_err());
}

#[test]
fn option_converts_to_null() {
	assert_eq!(Value::from(None::<i32>), Value::Null);
	assert_eq!(Value::from(Some(7i32)), Value::Int(7));
}

#[test]
fn record_get_returns_last_write() {
	let record = Record::new("Point").with_field("x", 1i32).with_field("x", 2i32);
	assert_eq!(record.get("x"), Some(&Value::Int(2)));
	assert_eq!(record.class_name(), "Point");
	assert!(!record.contains("y"));
}

#[test]
fn to_json_keeps_ambiguous_longs_exact() {
	let positive = Value::Long(TWO_POW_53).to_json();
	let negative = Value::Long(-TWO_POW_53).to_json();
	assert_eq!(positive.as_i64(), Some(TWO_POW_53));
	assert_eq!(negative.as_i64(), Some(-TWO_POW_53));
	assert_eq!(positive.to_string(), "9007199254740992");
	assert_eq!(negative.to_string(), "-9007199254740992");
}

#[test]
fn to_json_flattens_collections() {
	let set: ValueSet = vec![Value::from("foo")].into();
	let record = Record::new("Anything").with_field("tags", Value::Set(set)).with_field("n", Value::Null);
	assert_eq!(Value::Object(record).to_json(), json!({ "tags": ["foo"], "n": null }));
	assert_eq!(Value::Double(f64::NAN).to_json(), json!(null));
}

#[test]
fn from_json_uses_client_encoding() {
	let value = Value::from_json(&json!([1, "two", true, null, { "k": 2.5 }]));
	let expected = Value::List(vec![
		Value::Double(1.0),
		Value::from("two"),
		Value::Bool(true),
		Value::Null,
		Value::Object(Record::new(JSON_CLASS_NAME).with_field("k", 2.5f64)),
	]);
	assert_eq!(value, expected);
}

#[test]
fn wire_tags_are_stable() {
	assert_eq!(wire::encode(&Value::Long(TWO_POW_53)).unwrap(), r#"{"type":"long","value":9007199254740992}"#);
	assert_eq!(wire::encode(&Value::Null).unwrap(), r#"{"type":"null"}"#);
	assert_ne!(wire::encode(&Value::Int(1)).unwrap(), wire::encode(&Value::Long(1)).unwrap());
}

#[test]
fn wire_round_trips_ambiguous_longs() {
	for val in [TWO_POW_53, -TWO_POW_53, i64::MAX, i64::MIN] {
		let encoded = wire::encode(&Value::Long(val)).unwrap();
		assert_eq!(wire::decode(&encoded).unwrap(), Value::Long(val));
	}
}

#[test]
fn wire_round_trips_nested_values() {
	let set: ValueSet = vec![Value::from("foo"), Value::from("bar")].into();
	let value = Value::Object(
		Record::new("Nested")
			.with_field("set", Value::Set(set))
			.with_field("list", Value::List(vec![Value::Short(1), Value::Float(1.0)])),
	);
	let encoded = wire::encode(&value).unwrap();
	assert_eq!(wire::decode(&encoded).unwrap(), value);
}

#[test]
fn wire_rejects_non_finite_numbers() {
	let value = Value::List(vec![Value::Double(f64::INFINITY)]);
	assert!(matches!(wire::encode(&value), Err(WireError::NonFinite(ValueType::Double))));
	assert!(matches!(wire::decode("{\"type\":\"bogus\"}"), Err(WireError::Decode(_))));
}

#[test]
fn canonical_encoding_ignores_set_order() {
	let forward: ValueSet = vec![Value::from("foo"), Value::from("bar"), Value::Int(1)].into();
	let backward: ValueSet = vec![Value::Int(1), Value::from("bar"), Value::from("foo")].into();
	let wrap = |set: ValueSet| Value::List(vec![Value::Set(set)]);
	assert_ne!(
		wire::encode(&wrap(forward.clone())).unwrap(),
		wire::encode(&wrap(backward.clone())).unwrap()
	);
	assert_eq!(
		wire::encode_canonical(&wrap(forward.clone())).unwrap(),
		wire::encode_canonical(&wrap(backward)).unwrap()
	);

	let encoded = wire::encode_canonical(&wrap(forward.clone())).unwrap();
	assert_eq!(wire::decode(&encoded).unwrap(), wrap(forward));
}

#[test]
fn canonical_encoding_folds_negative_zero() {
	assert_eq!(
		wire::encode_canonical(&Value::Double(-0.0)).unwrap(),
		wire::encode_canonical(&Value::Double(0.0)).unwrap()
	);
	assert_eq!(
		wire::encode_canonical(&Value::Float(-0.0)).unwrap(),
		wire::encode_canonical(&Value::Float(0.0)).unwrap()
	);
	assert_ne!(
		wire::encode_canonical(&Value::Int(1)).unwrap(),
		wire::encode_canonical(&Value::Long(1)).unwrap()
	);
	assert!(matches!(
		wire::encode_canonical(&Value::Float(f32::NAN)),
		Err(WireError::NonFinite(ValueType::Float))
	));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

fn warnings_while_converting(val: i64) -> String {
	let logs = CapturedLogs::default();
	let writer = logs.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.with_max_level(tracing::Level::WARN)
		.finish();
	tracing::subscriber::with_default(subscriber, || {
		let _ = Value::Long(val).to_json();
	});
	let bytes = logs.0.lock().clone();
	String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn unsafe_longs_warn_on_json_conversion() {
	let above = warnings_while_converting(TWO_POW_53);
	assert!(
		above.contains("Received 64 bit integer greater than Number.MAX_SAFE_INTEGER (2^53 - 1)"),
		"{above}"
	);

	let below = warnings_while_converting(-TWO_POW_53);
	assert!(
		below.contains("Received 64 bit integer less than Number.MIN_SAFE_INTEGER (-1 * 2^53 + 1)"),
		"{below}"
	);
}

#[test]
fn safe_longs_convert_silently() {
	for val in [MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, 0] {
		let logs = warnings_while_converting(val);
		assert!(logs.is_empty(), "{val}: {logs}");
	}
}
