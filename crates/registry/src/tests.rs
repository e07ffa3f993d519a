use std::sync::Arc;

use gridfn_function::{FunctionContext, FunctionDef, FunctionError, FunctionMeta, flags};
use pretty_assertions::assert_eq;

use crate::{DuplicatePolicy, FunctionRegistry, InsertAction, RegistryError};

fn send_true(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	ctx.send_final(true)?;
	Ok(())
}

fn send_false(ctx: &mut FunctionContext<'_>) -> Result<(), FunctionError> {
	ctx.send_final(false)?;
	Ok(())
}

const fn def(id: &'static str, description: &'static str, handler: gridfn_function::FunctionHandler) -> FunctionDef {
	FunctionDef {
		meta: FunctionMeta {
			id,
			description,
			flags: flags::NONE,
		},
		handler,
	}
}

static ALPHA: FunctionDef = def("alpha", "first alpha", send_true);
static ALPHA_AGAIN: FunctionDef = def("alpha", "second alpha", send_false);
static BETA: FunctionDef = def("beta", "beta", send_true);

fn leak_def(id: String) -> &'static FunctionDef {
	let id: &'static str = Box::leak(id.into_boxed_str());
	Box::leak(Box::new(def(id, "generated", send_true)))
}

#[test]
fn resolve_returns_registered_definition() {
	let registry = FunctionRegistry::new("test");
	assert_eq!(registry.register(&ALPHA), Ok(InsertAction::InsertedNew));
	assert_eq!(registry.register(&BETA), Ok(InsertAction::InsertedNew));

	let resolved = registry.resolve("alpha").unwrap();
	assert!(std::ptr::eq(resolved, &ALPHA));
	assert_eq!(registry.len(), 2);
	assert_eq!(registry.ids(), vec!["alpha", "beta"]);
	assert!(registry.contains("beta"));
}

#[test]
fn resolve_unknown_identifier_fails() {
	let registry = FunctionRegistry::new("test");
	assert!(registry.is_empty());
	let err = registry.resolve("missing").unwrap_err();
	assert_eq!(err, RegistryError::UnknownIdentifier { id: "missing".into() });
	assert_eq!(err.to_string(), "unknown function identifier: missing");
	assert!(registry.get("missing").is_none());
}

#[test]
fn reject_policy_refuses_duplicates() {
	let registry = FunctionRegistry::new("test");
	assert_eq!(registry.policy(), DuplicatePolicy::Reject);
	registry.register(&ALPHA).unwrap();

	let err = registry.register(&ALPHA_AGAIN).unwrap_err();
	assert_eq!(err, RegistryError::DuplicateIdentifier { id: "alpha".into() });
	assert_eq!(registry.resolve("alpha").unwrap().description(), "first alpha");
}

#[test]
fn same_definition_twice_is_a_noop() {
	let registry = FunctionRegistry::new("test");
	registry.register(&ALPHA).unwrap();
	assert_eq!(registry.register(&ALPHA), Ok(InsertAction::KeptExisting));
	assert_eq!(registry.len(), 1);
}

#[test]
fn first_wins_keeps_existing() {
	let registry = FunctionRegistry::with_policy("test", DuplicatePolicy::FirstWins);
	registry.register(&ALPHA).unwrap();
	assert_eq!(registry.register(&ALPHA_AGAIN), Ok(InsertAction::KeptExisting));
	assert_eq!(registry.resolve("alpha").unwrap().description(), "first alpha");
}

#[test]
fn last_wins_overwrites() {
	let registry = FunctionRegistry::with_policy("test", DuplicatePolicy::LastWins);
	registry.register(&ALPHA).unwrap();
	assert_eq!(registry.register(&ALPHA_AGAIN), Ok(InsertAction::ReplacedExisting));
	assert_eq!(registry.resolve("alpha").unwrap().description(), "second alpha");
	assert_eq!(registry.len(), 1);
}

#[test]
fn register_all_stops_at_first_duplicate() {
	let registry = FunctionRegistry::new("test");
	let err = registry.register_all([&ALPHA, &BETA, &ALPHA_AGAIN]).unwrap_err();
	assert!(matches!(err, RegistryError::DuplicateIdentifier { .. }));
	assert_eq!(registry.len(), 2);

	let registry = FunctionRegistry::new("test");
	assert_eq!(registry.register_all([&ALPHA, &BETA, &ALPHA]), Ok(2));
}

#[test]
fn all_lists_winning_definitions_by_identifier() {
	let registry = FunctionRegistry::with_policy("test", DuplicatePolicy::LastWins);
	registry.register_all([&BETA, &ALPHA, &ALPHA_AGAIN]).unwrap();
	let descriptions: Vec<_> = registry.all().iter().map(|def| (def.id(), def.description())).collect();
	assert_eq!(descriptions, vec![("alpha", "second alpha"), ("beta", "beta")]);
	assert!(FunctionRegistry::new("empty").all().is_empty());
}

#[test]
fn concurrent_registrations_are_not_lost() {
	let registry = Arc::new(FunctionRegistry::new("test"));
	let handles: Vec<_> = (0..8)
		.map(|t| {
			let registry = Arc::clone(&registry);
			std::thread::spawn(move || {
				for i in 0..16 {
					registry.register(leak_def(format!("fn-{t}-{i}"))).unwrap();
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}
	assert_eq!(registry.len(), 128);
	assert!(registry.resolve("fn-7-15").is_ok());
}
