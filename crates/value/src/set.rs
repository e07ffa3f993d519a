use serde::{Deserialize, Serialize};

use crate::Value;

/// Unordered collection of distinct values.
///
/// Membership uses [`Value`] equality, so `Int(1)` and `Long(1)` are distinct
/// members. Equality between sets ignores insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct ValueSet {
	items: Vec<Value>,
}

impl ValueSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `value`, returning `false` if an equal member was already present.
	pub fn insert(&mut self, value: Value) -> bool {
		if self.contains(&value) {
			return false;
		}
		self.items.push(value);
		true
	}

	pub fn contains(&self, value: &Value) -> bool {
		self.items.iter().any(|item| item == value)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}
}

impl PartialEq for ValueSet {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.items.iter().all(|item| other.contains(item))
	}
}

impl FromIterator<Value> for ValueSet {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		let mut set = Self::new();
		for value in iter {
			set.insert(value);
		}
		set
	}
}

impl From<Vec<Value>> for ValueSet {
	fn from(vals: Vec<Value>) -> Self {
		vals.into_iter().collect()
	}
}

impl From<ValueSet> for Vec<Value> {
	fn from(set: ValueSet) -> Self {
		set.items
	}
}

impl<'a> IntoIterator for &'a ValueSet {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
