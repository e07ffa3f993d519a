use serde::{Deserialize, Serialize};

use crate::Value;

/// Class name given to records built from client-side JSON objects.
pub const JSON_CLASS_NAME: &str = "JSON object";

/// Structured object: a class name plus insertion-ordered named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
	class_name: String,
	fields: Vec<(String, Value)>,
}

impl Record {
	pub fn new(class_name: impl Into<String>) -> Self {
		Self {
			class_name: class_name.into(),
			fields: Vec::new(),
		}
	}

	pub fn with_capacity(class_name: impl Into<String>, capacity: usize) -> Self {
		Self {
			class_name: class_name.into(),
			fields: Vec::with_capacity(capacity),
		}
	}

	pub fn class_name(&self) -> &str {
		&self.class_name
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn push<K>(&mut self, key: K, value: Value)
	where
		K: Into<String>,
	{
		self.fields.push((key.into(), value));
	}

	/// Builder form of [`Record::push`].
	pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.push(key, value.into());
		self
	}

	pub fn contains(&self, key: impl AsRef<str>) -> bool {
		self.get(key).is_some()
	}

	/// Returns the last value written under `key`.
	pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
		let key = key.as_ref();
		self.fields.iter().rfind(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn iter(&self) -> RecordIter<'_> {
		RecordIter { inner: self.fields.iter() }
	}
}

pub struct RecordIter<'a> {
	inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for RecordIter<'a> {
	type Item = (&'a String, &'a Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(key, value)| (key, value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a> ExactSizeIterator for RecordIter<'a> {}

impl<'a> IntoIterator for &'a Record {
	type Item = (&'a String, &'a Value);
	type IntoIter = RecordIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
