//! Classification of how the current location became active.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a location transition was produced by the history facility.
///
/// `Push` and `Replace` mark programmatic navigations; `Pop` marks
/// traversal through existing entries (back/forward/go) and the initial
/// load. Equality is tag equality; the tag carries no further identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteType {
	/// A new entry was appended.
	Push,
	/// An existing entry became current (traversal or initial load).
	Pop,
	/// The current entry was overwritten.
	Replace,
}

impl RouteType {
	/// Branches on the tag, invoking exactly the matching handler.
	///
	/// This is the supported way to consume a `RouteType`: the underlying
	/// `match` is exhaustive, so a new variant forces every call site to
	/// be updated.
	///
	/// # Example
	///
	/// ```
	/// use route_sync::RouteType;
	///
	/// let label = RouteType::Push.fold(|| "push", || "pop", || "replace");
	/// assert_eq!(label, "push");
	/// ```
	pub fn fold<T>(
		self,
		on_push: impl FnOnce() -> T,
		on_pop: impl FnOnce() -> T,
		on_replace: impl FnOnce() -> T,
	) -> T {
		match self {
			Self::Push => on_push(),
			Self::Pop => on_pop(),
			Self::Replace => on_replace(),
		}
	}
}
