//! Fuzz Integration Tests
//!
//! This module uses proptest to fuzz the route grammar, the in-memory
//! history and the dispatch pipeline with random inputs.
//!
//! # Fuzz Targets
//!
//! - Route parsing with arbitrary path strings
//! - Parser/formatter round trips over the typed route space
//! - In-memory history invariants under random command sequences
//! - Navigation dispatch pass-through with random intents


use fixtures::{AppAction, AppRoute, RecordingStore, format_route, from_action, parse_route};
use proptest::prelude::*;
use route_sync::{
	DispatchFn, History, MemoryHistory, Middleware, Navigation, NavigationMiddleware,
};
use std::sync::Arc;

fn terminal() -> DispatchFn<AppAction> {
	Arc::new(|action| action)
}

/// Strategy over the typed route space.
fn any_route() -> impl Strategy<Value = AppRoute> {
	prop_oneof![
		Just(AppRoute::Home),
		Just(AppRoute::Users),
		any::<u64>().prop_map(AppRoute::User),
		Just(AppRoute::NotFound),
	]
}

/// A single history command drawn by the history fuzzer.
#[derive(Debug, Clone)]
enum Command {
	Push(String),
	Replace(String),
	Go(isize),
}

fn any_command() -> impl Strategy<Value = Command> {
	let path = "[a-z0-9]{1,8}".prop_map(|segment| format!("/{segment}"));
	prop_oneof![
		path.clone().prop_map(Command::Push),
		path.prop_map(Command::Replace),
		(-4isize..=4).prop_map(Command::Go),
	]
}

// =============================================================================
// Route grammar fuzzing
// =============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(50))]

	/// Fuzz the parser with arbitrary path-like strings.
	/// Parsing must never panic, and any accepted path must survive a
	/// format/parse round trip.
	#[test]
	fn fuzz_parser_accepts_or_rejects_without_panic(path in "[/a-zA-Z0-9._-]{0,64}") {
		if let Some(route) = parse_route(&path) {
			prop_assert_eq!(parse_route(&format_route(&route)), Some(route));
		}
	}

	/// Every typed route formats to a path its own parser accepts.
	#[test]
	fn fuzz_typed_route_round_trip(route in any_route()) {
		prop_assert_eq!(parse_route(&format_route(&route)), Some(route));
	}
}

// =============================================================================
// History invariant fuzzing
// =============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(50))]

	/// Fuzz the in-memory history with random command sequences.
	/// After every command the index stays inside the entry list and the
	/// current path is the indexed entry.
	#[test]
	fn fuzz_history_invariants_hold(commands in prop::collection::vec(any_command(), 0..32)) {
		let history = MemoryHistory::new();

		for command in commands {
			match command {
				Command::Push(path) => history.push(&path).unwrap(),
				Command::Replace(path) => history.replace(&path).unwrap(),
				Command::Go(n) => history.go(n),
			}

			let entries = history.entries();
			let index = history.index();
			prop_assert!(!entries.is_empty());
			prop_assert!(index < entries.len());
			prop_assert_eq!(&history.current_path(), &entries[index]);
		}
	}

	/// Pushes always land at the tip: the pushed path becomes the last
	/// entry and nothing remains ahead of it.
	#[test]
	fn fuzz_push_truncates_forward_entries(
		paths in prop::collection::vec("[a-z]{1,6}", 1..8),
		steps_back in 0isize..8,
	) {
		let history = MemoryHistory::new();
		for segment in &paths {
			history.push(&format!("/{segment}")).unwrap();
		}
		history.go(-steps_back);
		history.push("/tip").unwrap();

		let entries = history.entries();
		prop_assert_eq!(entries.last().map(String::as_str), Some("/tip"));
		prop_assert_eq!(history.index(), entries.len() - 1);
	}
}

// =============================================================================
// Dispatch pipeline fuzzing
// =============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(50))]

	/// Fuzz the navigation middleware with random intents. Dispatch must
	/// never panic, must return the action unchanged, and must leave the
	/// history in a consistent state.
	#[test]
	fn fuzz_navigation_dispatch_passes_through(
		route in any_route(),
		selector in 0u8..7,
		offset in -4isize..=4,
	) {
		let history = MemoryHistory::new();
		let store = RecordingStore::new();
		let middleware: NavigationMiddleware<AppRoute, fixtures::AppState, AppAction> =
			NavigationMiddleware::new(Arc::new(history.clone()), from_action, format_route);
		let dispatch = middleware.apply(store.clone(), terminal());

		let navigation = match selector {
			0 => Navigation::PushInternal(route),
			1 => Navigation::ReplaceInternal(route),
			2 => Navigation::PushExternal(format_route(&route)),
			3 => Navigation::ReplaceExternal(format_route(&route)),
			4 => Navigation::Go(offset),
			5 => Navigation::GoBack,
			_ => Navigation::GoForward,
		};

		let action = AppAction::Navigate(navigation);
		prop_assert_eq!(dispatch(action.clone()), action);
		prop_assert!(history.index() < history.entries().len());
	}
}
