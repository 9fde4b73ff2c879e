//! Store integration.
//!
//! The store is modeled after the standard middleware-chain shape: a
//! middleware receives the store surface and the next dispatch stage, and
//! returns the stage exposed upstream, `(store) -> (next) -> (action) ->
//! action`. Two middlewares bridge the two directions of synchronization:
//!
//! - [`RouteMiddleware`] turns history notifications into dispatched
//!   actions (incoming);
//! - [`NavigationMiddleware`] turns actions carrying a [`Navigation`]
//!   intent into history commands (outgoing).
//!
//! Both are fail-soft: malformed paths degrade to the caller's not-found
//! route, and failed history commands are logged and swallowed. No error
//! ever propagates into the store.

use parking_lot::RwLock;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::history::History;
use crate::navigation::Navigation;
use crate::route_type::RouteType;
use crate::signal::Subscription;

/// The store surface middlewares may use.
pub trait StoreApi<S, A>: Send + Sync {
	/// Dispatches an action through the full middleware chain.
	fn dispatch(&self, action: A);

	/// Returns a snapshot of the current state.
	fn get_state(&self) -> S;
}

/// A dispatch stage: consumes an action and returns the (possibly
/// transformed) action handed back by the rest of the chain.
pub type DispatchFn<A> = Arc<dyn Fn(A) -> A + Send + Sync>;

/// Parses a path into a typed route; `None` means the path is outside the
/// caller's route grammar.
pub type ParserFn<R> = Arc<dyn Fn(&str) -> Option<R> + Send + Sync>;

/// Formats a typed route back into a path string.
pub type FormatterFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Builds the store action for an observed route change.
pub type OnRouteFn<R, S, A> = Arc<dyn Fn(&R, &S, RouteType) -> A + Send + Sync>;

/// Extracts a navigation intent from an action, if it carries one.
pub type FromActionFn<R, A> = Arc<dyn Fn(&A) -> Option<Navigation<R>> + Send + Sync>;

/// A composable interception point in the store's dispatch pipeline.
pub trait Middleware<S, A>: Send + Sync {
	/// Wraps `next`, returning the dispatch stage exposed upstream.
	fn apply(&self, store: Arc<dyn StoreApi<S, A>>, next: DispatchFn<A>) -> DispatchFn<A>;
}

/// Composes middlewares around a terminal dispatch stage.
///
/// Middlewares wrap the terminal stage in reverse registration order, so
/// the first middleware added sees each action first.
///
/// # Example
///
/// ```ignore
/// let dispatch = MiddlewareChain::new()
///     .add_middleware(Arc::new(route_middleware))
///     .add_middleware(Arc::new(navigation_middleware))
///     .build(store, terminal);
/// ```
pub struct MiddlewareChain<S, A> {
	middlewares: Vec<Arc<dyn Middleware<S, A>>>,
}

impl<S, A> MiddlewareChain<S, A> {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self {
			middlewares: Vec::new(),
		}
	}

	/// Adds a middleware to the chain.
	pub fn add_middleware(mut self, middleware: Arc<dyn Middleware<S, A>>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	/// Builds the final dispatch stage by composing all middleware around
	/// `terminal` (usually the reducer entry point).
	pub fn build(self, store: Arc<dyn StoreApi<S, A>>, terminal: DispatchFn<A>) -> DispatchFn<A> {
		let mut next = terminal;
		for middleware in self.middlewares.into_iter().rev() {
			next = middleware.apply(Arc::clone(&store), next);
		}
		next
	}
}

impl<S, A> Default for MiddlewareChain<S, A> {
	fn default() -> Self {
		Self::new()
	}
}

/// Bridges history notifications to store dispatch.
///
/// On [`apply`](Middleware::apply) it immediately parses the current
/// location and dispatches the derived action, classified as whatever the
/// history reports (typically [`RouteType::Pop`] for an initial load).
/// It then subscribes to every subsequent history notification for its
/// lifetime: each new path is parsed through the caller-supplied parser,
/// falling back to the not-found route on parse failure, and dispatched
/// via the caller-supplied action constructor.
///
/// The dispatch stage it contributes is a pass-through; outgoing actions
/// are the business of [`NavigationMiddleware`].
pub struct RouteMiddleware<R, S, A> {
	history: Arc<dyn History>,
	parser: ParserFn<R>,
	not_found: R,
	on_route: OnRouteFn<R, S, A>,
	listener: RwLock<Option<Subscription>>,
}

impl<R, S, A> RouteMiddleware<R, S, A>
where
	R: Clone + Send + Sync + 'static,
	S: 'static,
	A: 'static,
{
	/// Creates the middleware from a history facility and the caller's
	/// route functions.
	pub fn new(
		history: Arc<dyn History>,
		parser: impl Fn(&str) -> Option<R> + Send + Sync + 'static,
		not_found: R,
		on_route: impl Fn(&R, &S, RouteType) -> A + Send + Sync + 'static,
	) -> Self {
		Self {
			history,
			parser: Arc::new(parser),
			not_found,
			on_route: Arc::new(on_route),
			listener: RwLock::new(None),
		}
	}

	/// Detaches the history listener installed by `apply`. Idempotent;
	/// returns `true` if a listener was detached.
	pub fn detach(&self) -> bool {
		self.listener
			.write()
			.take()
			.map(|subscription| subscription.unsubscribe())
			.unwrap_or(false)
	}
}

impl<R, S, A> Middleware<S, A> for RouteMiddleware<R, S, A>
where
	R: Clone + Send + Sync + 'static,
	S: 'static,
	A: 'static,
{
	fn apply(&self, store: Arc<dyn StoreApi<S, A>>, next: DispatchFn<A>) -> DispatchFn<A> {
		// Initial route: whatever the history currently reports.
		let initial = (self.parser)(&self.history.current_path())
			.unwrap_or_else(|| self.not_found.clone());
		let action = (self.on_route)(&initial, &store.get_state(), self.history.current_action());
		store.dispatch(action);

		let parser = Arc::clone(&self.parser);
		let not_found = self.not_found.clone();
		let on_route = Arc::clone(&self.on_route);
		let subscription = self.history.listen(Box::new(move |path, route_type| {
			let route = parser(path).unwrap_or_else(|| not_found.clone());
			let action = on_route(&route, &store.get_state(), route_type);
			store.dispatch(action);
		}));

		if let Some(previous) = self.listener.write().replace(subscription) {
			previous.unsubscribe();
		}

		next
	}
}

/// Bridges store actions to history commands.
///
/// Each action passing through the chain is offered to the caller-supplied
/// extractor; when it yields a [`Navigation`] intent, the intent is folded
/// into exactly one history command: internal routes are formatted to a
/// path by the caller-supplied formatter, external URLs go through
/// verbatim. The original action is always forwarded to the next stage
/// afterwards, whether or not a navigation fired.
pub struct NavigationMiddleware<R, S, A> {
	history: Arc<dyn History>,
	from_action: FromActionFn<R, A>,
	formatter: FormatterFn<R>,
	_state: PhantomData<fn() -> S>,
}

impl<R, S, A> NavigationMiddleware<R, S, A>
where
	R: Send + Sync + 'static,
	A: 'static,
{
	/// Creates the middleware from a history facility, an intent
	/// extractor, and a route formatter.
	pub fn new(
		history: Arc<dyn History>,
		from_action: impl Fn(&A) -> Option<Navigation<R>> + Send + Sync + 'static,
		formatter: impl Fn(&R) -> String + Send + Sync + 'static,
	) -> Self {
		Self {
			history,
			from_action: Arc::new(from_action),
			formatter: Arc::new(formatter),
			_state: PhantomData,
		}
	}
}

impl<R, S, A> Middleware<S, A> for NavigationMiddleware<R, S, A>
where
	R: Send + Sync + 'static,
	S: 'static,
	A: 'static,
{
	fn apply(&self, _store: Arc<dyn StoreApi<S, A>>, next: DispatchFn<A>) -> DispatchFn<A> {
		let history = Arc::clone(&self.history);
		let from_action = Arc::clone(&self.from_action);
		let formatter = Arc::clone(&self.formatter);

		Arc::new(move |action: A| {
			if let Some(navigation) = from_action(&action) {
				let result = navigation.fold(
					|route| history.push(&formatter(&route)),
					|route| history.replace(&formatter(&route)),
					|url| history.push(&url),
					|url| history.replace(&url),
					|n| {
						history.go(n);
						Ok(())
					},
					|| {
						history.back();
						Ok(())
					},
					|| {
						history.forward();
						Ok(())
					},
				);
				// Fail-soft: a rejected command never reaches the store.
				if let Err(err) = result {
					tracing::warn!(error = %err, "navigation command failed");
				}
			}
			next(action)
		})
	}
}
