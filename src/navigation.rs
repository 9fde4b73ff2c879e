//! Outgoing navigation intents.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value describing an intended change of location.
///
/// Produced by application logic (usually embedded in a store action),
/// consumed exactly once by [`NavigationMiddleware`](crate::NavigationMiddleware)
/// which translates it into a single history command, then discarded.
///
/// The `Internal` variants carry a typed route that the caller's formatter
/// turns into a path; the `External` variants carry a literal URL that
/// bypasses the formatter entirely. No validation is performed on external
/// URLs; callers must ensure they match the application's route grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Navigation<R> {
	/// Append a new entry for a typed route.
	PushInternal(R),
	/// Overwrite the current entry with a typed route.
	ReplaceInternal(R),
	/// Append a new entry for a literal URL.
	PushExternal(String),
	/// Overwrite the current entry with a literal URL.
	ReplaceExternal(String),
	/// Move by a signed offset through existing entries.
	Go(isize),
	/// Move one entry backwards.
	GoBack,
	/// Move one entry forwards.
	GoForward,
}

impl<R> Navigation<R> {
	/// Branches on the variant, invoking exactly the matching handler.
	///
	/// The underlying `match` is exhaustive, so adding a variant forces a
	/// compile-time update at every call site.
	#[allow(clippy::too_many_arguments)]
	pub fn fold<T>(
		self,
		on_push_internal: impl FnOnce(R) -> T,
		on_replace_internal: impl FnOnce(R) -> T,
		on_push_external: impl FnOnce(String) -> T,
		on_replace_external: impl FnOnce(String) -> T,
		on_go: impl FnOnce(isize) -> T,
		on_go_back: impl FnOnce() -> T,
		on_go_forward: impl FnOnce() -> T,
	) -> T {
		match self {
			Self::PushInternal(route) => on_push_internal(route),
			Self::ReplaceInternal(route) => on_replace_internal(route),
			Self::PushExternal(url) => on_push_external(url),
			Self::ReplaceExternal(url) => on_replace_external(url),
			Self::Go(n) => on_go(n),
			Self::GoBack => on_go_back(),
			Self::GoForward => on_go_forward(),
		}
	}
}
