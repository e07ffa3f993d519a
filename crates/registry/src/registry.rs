use std::sync::Arc;

use arc_swap::ArcSwap;
use gridfn_function::FunctionDef;
use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::policy::{DuplicatePolicy, InsertAction};

type Table = FxHashMap<&'static str, &'static FunctionDef>;

/// Registry of function definitions keyed by identifier.
pub struct FunctionRegistry {
	label: &'static str,
	policy: DuplicatePolicy,
	snap: ArcSwap<Table>,
}

impl FunctionRegistry {
	/// Creates an empty registry that rejects duplicate identifiers.
	pub fn new(label: &'static str) -> Self {
		Self::with_policy(label, DuplicatePolicy::default())
	}

	pub fn with_policy(label: &'static str, policy: DuplicatePolicy) -> Self {
		Self {
			label,
			policy,
			snap: ArcSwap::from_pointee(Table::default()),
		}
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Registers `def` under its identifier.
	///
	/// Registering the same definition twice is a no-op reported as
	/// [`InsertAction::KeptExisting`].
	pub fn register(&self, def: &'static FunctionDef) -> Result<InsertAction, RegistryError> {
		loop {
			let old = self.snap.load_full();

			let action = match old.get(def.id()) {
				Some(existing) if std::ptr::eq(*existing, def) => return Ok(InsertAction::KeptExisting),
				Some(_) => match self.policy {
					DuplicatePolicy::Reject => {
						return Err(RegistryError::DuplicateIdentifier { id: def.id().to_owned() });
					}
					DuplicatePolicy::FirstWins => {
						tracing::debug!(registry = self.label, function_id = def.id(), "registry.duplicate_ignored");
						return Ok(InsertAction::KeptExisting);
					}
					DuplicatePolicy::LastWins => InsertAction::ReplacedExisting,
				},
				None => InsertAction::InsertedNew,
			};

			let mut table = Table::clone(&old);
			table.insert(def.id(), def);
			let prev = self.snap.compare_and_swap(&old, Arc::new(table));

			if Arc::ptr_eq(&prev, &old) {
				tracing::trace!(registry = self.label, function_id = def.id(), ?action, "registry.register");
				return Ok(action);
			}
			// CAS failed, retry with updated snapshot
		}
	}

	/// Registers every definition, returning how many changed the registry.
	///
	/// Stops at the first error; definitions registered before it stay.
	pub fn register_all<I>(&self, defs: I) -> Result<usize, RegistryError>
	where
		I: IntoIterator<Item = &'static FunctionDef>,
	{
		let mut changed = 0;
		for def in defs {
			if self.register(def)? != InsertAction::KeptExisting {
				changed += 1;
			}
		}
		Ok(changed)
	}

	/// Looks up a definition by identifier.
	pub fn resolve(&self, id: &str) -> Result<&'static FunctionDef, RegistryError> {
		self.get(id).ok_or_else(|| RegistryError::UnknownIdentifier { id: id.to_owned() })
	}

	#[inline]
	pub fn get(&self, id: &str) -> Option<&'static FunctionDef> {
		self.snap.load().get(id).copied()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.snap.load().contains_key(id)
	}

	/// Returns all registered identifiers, sorted.
	pub fn ids(&self) -> Vec<&'static str> {
		let mut ids: Vec<_> = self.snap.load().keys().copied().collect();
		ids.sort_unstable();
		ids
	}

	/// Returns all registered definitions, sorted by identifier.
	pub fn all(&self) -> Vec<&'static FunctionDef> {
		let mut defs: Vec<_> = self.snap.load().values().copied().collect();
		defs.sort_by_key(|def| def.id());
		defs
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl std::fmt::Debug for FunctionRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionRegistry")
			.field("label", &self.label)
			.field("policy", &self.policy)
			.field("len", &self.len())
			.finish()
	}
}
