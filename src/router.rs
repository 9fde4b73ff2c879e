//! Router over a history facility.

use std::fmt;
use std::sync::Arc;

use crate::error::RouterError;
use crate::history::{History, MemoryHistory};
use crate::signal::{Signal, Subscription};

/// Command-only capability to alter the current location.
///
/// A `Navigator` exposes nothing but the navigation commands; handing one
/// to application code cannot leak the change stream or the entry list.
#[derive(Clone)]
pub struct Navigator {
	history: Arc<dyn History>,
}

impl Navigator {
	/// Appends a new entry for `path`.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		tracing::debug!(path, "navigator push");
		self.history.push(path)
	}

	/// Overwrites the current entry with `path`.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		tracing::debug!(path, "navigator replace");
		self.history.replace(path)
	}

	/// Moves the current position by a signed offset. Out-of-range moves
	/// are silent no-ops.
	pub fn go(&self, n: isize) {
		self.history.go(n);
	}

	/// Moves one entry backwards.
	pub fn back(&self) {
		self.history.back();
	}

	/// Moves one entry forwards.
	pub fn forward(&self) {
		self.history.forward();
	}
}

impl fmt::Debug for Navigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator").finish()
	}
}

/// Wraps a history facility, exposing a stream of current-path strings and
/// a [`Navigator`] capability.
///
/// The history dependency is injected rather than captured as global
/// state, so multiple isolated routers can coexist in one process (tests,
/// multi-window embedding). A router is created once at application start
/// and lives for the process lifetime.
///
/// # Example
///
/// ```
/// use route_sync::Router;
///
/// let (router, _history) = Router::in_memory();
/// let _subscription = router.routes().connect(|path: &String| {
///     println!("now at {path}");
/// });
///
/// router.navigator().push("/users/7").unwrap();
/// ```
pub struct Router {
	history: Arc<dyn History>,
	routes: Signal<String>,
	listener: Subscription,
}

impl Router {
	/// Creates a router over any history facility.
	pub fn new(history: Arc<dyn History>) -> Self {
		let routes: Signal<String> = Signal::new("router.routes");
		let listener = history.listen(Box::new({
			let routes = routes.clone();
			move |path: &str, _action| routes.emit(&path.to_string())
		}));

		Self {
			history,
			routes,
			listener,
		}
	}

	/// Creates a router over a fresh [`MemoryHistory`], returning a shared
	/// handle to the backing history for inspection.
	pub fn in_memory() -> (Self, MemoryHistory) {
		let history = MemoryHistory::new();
		let router = Self::new(Arc::new(history.clone()));
		(router, history)
	}

	/// The stream of current-path strings, one emission per navigation.
	pub fn routes(&self) -> &Signal<String> {
		&self.routes
	}

	/// Returns the command capability for this router's history.
	pub fn navigator(&self) -> Navigator {
		Navigator {
			history: Arc::clone(&self.history),
		}
	}

	/// Re-emits the current path on the route stream without changing
	/// history, forcing downstream subscribers to re-evaluate.
	pub fn push_current_route(&self) {
		self.routes.emit(&self.history.current_path());
	}

	/// Detaches the router from its history facility. Subsequent
	/// navigations no longer reach the route stream. Idempotent.
	pub fn detach(&self) -> bool {
		self.listener.unsubscribe()
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.routes)
			.finish()
	}
}
