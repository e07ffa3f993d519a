//! Key-value store a function may write to.
//!
//! A [`Region`] only promises per-key atomic writes; functions never lock it
//! themselves. [`MemoryRegion`] keys entries by their canonical wire encoding:
//! keys that compare equal share an entry, and keys of different numeric
//! subtypes never alias.

use gridfn_value::Value;
use gridfn_value::wire::{self, WireError};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;


#[derive(Debug, thiserror::Error)]
pub enum RegionError {
	#[error("null keys are not supported")]
	NullKey,
	#[error("key cannot be stored: {0}")]
	Key(#[from] WireError),
}

/// Store interface consumed by functions that mutate state.
pub trait Region: Send + Sync {
	fn name(&self) -> &str;

	fn put(&self, key: Value, value: Value) -> Result<(), RegionError>;

	fn get(&self, key: &Value) -> Result<Option<Value>, RegionError>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn clear(&self);
}

/// In-process region backed by a hash map.
#[derive(Debug)]
pub struct MemoryRegion {
	name: String,
	entries: RwLock<FxHashMap<String, (Value, Value)>>,
}

impl MemoryRegion {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			entries: RwLock::new(FxHashMap::default()),
		}
	}

	/// Returns all stored keys, in no particular order.
	pub fn keys(&self) -> Vec<Value> {
		self.entries.read().values().map(|(key, _)| key.clone()).collect()
	}
}

fn entry_key(key: &Value) -> Result<String, RegionError> {
	if key.is_null() {
		return Err(RegionError::NullKey);
	}
	Ok(wire::encode_canonical(key)?)
}

impl Region for MemoryRegion {
	fn name(&self) -> &str {
		&self.name
	}

	fn put(&self, key: Value, value: Value) -> Result<(), RegionError> {
		let encoded = entry_key(&key)?;
		tracing::trace!(region = %self.name, key = %encoded, "region.put");
		self.entries.write().insert(encoded, (key, value));
		Ok(())
	}

	fn get(&self, key: &Value) -> Result<Option<Value>, RegionError> {
		let encoded = entry_key(key)?;
		Ok(self.entries.read().get(&encoded).map(|(_, value)| value.clone()))
	}

	fn len(&self) -> usize {
		self.entries.read().len()
	}

	fn clear(&self) {
		self.entries.write().clear();
	}
}
