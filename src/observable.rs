//! Route changes as a subscribable stream.

use std::fmt;
use std::sync::Arc;

use crate::history::History;
use crate::middleware::ParserFn;
use crate::route_type::RouteType;
use crate::signal::Subscription;

/// Exposes route changes as a stream of `(route, RouteType)` pairs: the
/// alternative to dispatching store actions.
///
/// Subscribing triggers an immediate, synchronous emission of the current
/// route, then one emission per subsequent history change for the life of
/// the subscription. Parse failures degrade to the not-found route, the
/// same fail-soft contract as the middleware. Each subscriber holds its
/// own history listener; unsubscribing detaches it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use route_sync::{MemoryHistory, RouteObservable, RouteType};
///
/// let history = MemoryHistory::new();
/// let observable = RouteObservable::new(
///     Arc::new(history.clone()),
///     |path: &str| (path == "/").then_some("home"),
///     "not-found",
/// );
///
/// let subscription = observable.subscribe(|route: &&str, route_type| {
///     // Fires immediately with ("home", RouteType::Pop).
///     let _ = (route, route_type);
/// });
/// # assert!(subscription.unsubscribe());
/// ```
pub struct RouteObservable<R> {
	history: Arc<dyn History>,
	parser: ParserFn<R>,
	not_found: R,
}

impl<R> RouteObservable<R>
where
	R: Clone + Send + Sync + 'static,
{
	/// Creates the observable from a history facility and the caller's
	/// parser/fallback pair.
	pub fn new(
		history: Arc<dyn History>,
		parser: impl Fn(&str) -> Option<R> + Send + Sync + 'static,
		not_found: R,
	) -> Self {
		Self {
			history,
			parser: Arc::new(parser),
			not_found,
		}
	}

	/// Subscribes to route changes.
	///
	/// `subscriber` is invoked immediately with the current route and how
	/// it became active, then once per subsequent history change until the
	/// returned [`Subscription`] is cancelled.
	pub fn subscribe(&self, subscriber: impl Fn(&R, RouteType) + Send + Sync + 'static) -> Subscription {
		let current = (self.parser)(&self.history.current_path())
			.unwrap_or_else(|| self.not_found.clone());
		subscriber(&current, self.history.current_action());

		let parser = Arc::clone(&self.parser);
		let not_found = self.not_found.clone();
		self.history.listen(Box::new(move |path, route_type| {
			let route = parser(path).unwrap_or_else(|| not_found.clone());
			subscriber(&route, route_type);
		}))
	}
}

impl<R> fmt::Debug for RouteObservable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteObservable").finish()
	}
}
