//! The history facility contract.
//!
//! A history facility records an ordered sequence of visited locations and
//! notifies listeners of changes. [`MemoryHistory`] is the in-process
//! implementation; real backends (a browser bridge, an embedded webview)
//! implement [`History`] the same way and are injected into the router;
//! the crate never captures an ambient facility as module-level state, so
//! multiple isolated instances can coexist in one process.

pub mod memory;

pub use memory::{MemoryHistory, MemoryHistoryConfig};

use crate::error::RouterError;
use crate::route_type::RouteType;
use crate::signal::Subscription;

/// Listener invoked with the new current path and how it became active.
pub type HistoryListener = Box<dyn Fn(&str, RouteType) + Send + Sync>;

/// A browser-style history facility.
///
/// A facility always has a current location. Change notifications are
/// delivered synchronously, on the thread that triggered the navigation,
/// in the exact order navigations occur.
pub trait History: Send + Sync {
	/// Returns the path of the current location.
	fn current_path(&self) -> String;

	/// Returns how the current location became active.
	///
	/// Reports [`RouteType::Pop`] for an initial load, [`RouteType::Push`]
	/// or [`RouteType::Replace`] after the corresponding command.
	fn current_action(&self) -> RouteType;

	/// Subscribes to change notifications for every subsequent navigation.
	fn listen(&self, listener: HistoryListener) -> Subscription;

	/// Appends a new entry for `path` and makes it current, discarding any
	/// forward entries beyond the previous position.
	fn push(&self, path: &str) -> Result<(), RouterError>;

	/// Overwrites the current entry with `path` in place.
	fn replace(&self, path: &str) -> Result<(), RouterError>;

	/// Moves the current position by a signed offset. Out-of-range moves
	/// are silent no-ops, not errors.
	fn go(&self, n: isize);

	/// Moves one entry backwards. Equivalent to `go(-1)`.
	fn back(&self) {
		self.go(-1);
	}

	/// Moves one entry forwards. Equivalent to `go(1)`.
	fn forward(&self) {
		self.go(1);
	}
}
