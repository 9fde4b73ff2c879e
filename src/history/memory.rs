//! In-memory history facility.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use super::{History, HistoryListener};
use crate::error::RouterError;
use crate::route_type::RouteType;
use crate::signal::{Signal, Subscription};

/// Configuration for [`MemoryHistory`].
///
/// Follows the crate's config-struct idiom: construct with struct-update
/// syntax over [`Default`].
///
/// # Example
///
/// ```
/// use route_sync::{MemoryHistory, MemoryHistoryConfig};
///
/// let history = MemoryHistory::with_config(MemoryHistoryConfig {
///     initial_entries: vec!["/".to_string(), "/users".to_string()],
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistoryConfig {
	/// Entries present before any navigation. An empty list falls back to
	/// `["/"]`; a facility always has a current location.
	pub initial_entries: Vec<String>,
	/// Starting position. Defaults to the last entry; out-of-range values
	/// are clamped rather than rejected.
	pub initial_index: Option<usize>,
}

impl Default for MemoryHistoryConfig {
	fn default() -> Self {
		Self {
			initial_entries: vec!["/".to_string()],
			initial_index: None,
		}
	}
}

/// Backing state: the ordered entry list plus the current position.
struct MemoryState {
	entries: Vec<String>,
	index: usize,
	last_action: RouteType,
}

/// An in-memory [`History`] backed by an ordered entry list.
///
/// Cloning shares the backing state, so a clone kept by a test can inspect
/// the entries while a router drives the original. Commands never fail.
///
/// Semantics:
///
/// - `push` truncates every entry beyond the current position before
///   appending, so forward history is discarded;
/// - `replace` overwrites the current entry in place, leaving the position
///   and any forward entries untouched;
/// - `go` moves only if the target stays within the entry list.
///
/// Every successful command notifies listeners exactly once, synchronously,
/// before the call returns.
#[derive(Clone)]
pub struct MemoryHistory {
	state: Arc<RwLock<MemoryState>>,
	changes: Signal<(String, RouteType)>,
}

impl MemoryHistory {
	/// Creates a history with a single `"/"` entry.
	pub fn new() -> Self {
		Self::with_config(MemoryHistoryConfig::default())
	}

	/// Creates a history from a configuration.
	pub fn with_config(config: MemoryHistoryConfig) -> Self {
		let mut entries = config.initial_entries;
		if entries.is_empty() {
			entries.push("/".to_string());
		}
		let last = entries.len() - 1;
		let index = config.initial_index.unwrap_or(last).min(last);

		Self {
			state: Arc::new(RwLock::new(MemoryState {
				entries,
				index,
				last_action: RouteType::Pop,
			})),
			changes: Signal::new("memory_history.changes"),
		}
	}

	/// Returns a copy of the entry list, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.state.read().entries.clone()
	}

	/// Returns the current position within the entry list.
	pub fn index(&self) -> usize {
		self.state.read().index
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.read();
		f.debug_struct("MemoryHistory")
			.field("entries", &state.entries)
			.field("index", &state.index)
			.finish()
	}
}

impl History for MemoryHistory {
	fn current_path(&self) -> String {
		let state = self.state.read();
		state.entries[state.index].clone()
	}

	fn current_action(&self) -> RouteType {
		self.state.read().last_action
	}

	fn listen(&self, listener: HistoryListener) -> Subscription {
		self.changes
			.connect(move |(path, action): &(String, RouteType)| listener(path, *action))
	}

	fn push(&self, path: &str) -> Result<(), RouterError> {
		{
			let mut state = self.state.write();
			let keep = state.index + 1;
			state.entries.truncate(keep);
			state.entries.push(path.to_string());
			state.index = state.entries.len() - 1;
			state.last_action = RouteType::Push;
		}
		tracing::debug!(path, "history push");
		self.changes.emit(&(path.to_string(), RouteType::Push));
		Ok(())
	}

	fn replace(&self, path: &str) -> Result<(), RouterError> {
		{
			let mut state = self.state.write();
			let index = state.index;
			state.entries[index] = path.to_string();
			state.last_action = RouteType::Replace;
		}
		tracing::debug!(path, "history replace");
		self.changes.emit(&(path.to_string(), RouteType::Replace));
		Ok(())
	}

	fn go(&self, n: isize) {
		let path = {
			let mut state = self.state.write();
			// checked_add keeps extreme offsets in the out-of-range path
			// instead of overflowing.
			let target = match (state.index as isize).checked_add(n) {
				Some(target) if target >= 0 && target < state.entries.len() as isize => target,
				_ => {
					tracing::debug!(offset = n, "history go out of range, ignored");
					return;
				}
			};
			state.index = target as usize;
			state.last_action = RouteType::Pop;
			state.entries[state.index].clone()
		};
		tracing::debug!(path = %path, offset = n, "history go");
		self.changes.emit(&(path, RouteType::Pop));
	}
}
