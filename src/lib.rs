//! route-sync: history/store synchronization
//!
//! Navigation middleware binding a browser-style history facility to a
//! Redux-style store. URL changes become typed actions dispatched into the
//! store; actions carrying a navigation intent become history commands.
//!
//! ## Architecture
//!
//! ```text
//! history change → listener → parser → RouteType → action → dispatch
//!                                                              ↑
//! action → Navigation intent → formatter → history command ────┘
//! ```
//!
//! Key modules:
//!
//! - [`route_type`]: how a location became active (push/pop/replace)
//! - [`navigation`]: outgoing navigation intents
//! - [`signal`]: the synchronous publish/subscribe channel everything
//!   notifies through
//! - [`history`]: the facility contract plus the in-memory implementation
//! - [`router`]: path stream + command capability over a facility
//! - [`middleware`]: store integration (both directions)
//! - [`observable`]: route changes as a stream instead of dispatches
//!
//! Everything is synchronous and single-threaded by design: notifications
//! are delivered in exact navigation order, on the thread that navigated,
//! before the triggering call returns. The only cancellation primitive is
//! unsubscribing.
//!
//! Parse failures fall back to the caller's not-found route and invalid
//! `go` offsets are silent no-ops; there is no error path into the store.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use route_sync::{
//!     MemoryHistory, MiddlewareChain, Navigation, NavigationMiddleware, RouteMiddleware,
//!     RouteType,
//! };
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! enum Route {
//!     Home,
//!     NotFound,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! enum Action {
//!     RouteChanged(Route, RouteType),
//!     Navigate(Navigation<Route>),
//! }
//!
//! # struct NoopStore;
//! # impl route_sync::StoreApi<(), Action> for NoopStore {
//! #     fn dispatch(&self, _action: Action) {}
//! #     fn get_state(&self) {}
//! # }
//! let history = MemoryHistory::new();
//!
//! let route_middleware = RouteMiddleware::new(
//!     Arc::new(history.clone()),
//!     |path: &str| (path == "/").then_some(Route::Home),
//!     Route::NotFound,
//!     |route: &Route, _state: &(), route_type| Action::RouteChanged(route.clone(), route_type),
//! );
//! let navigation_middleware = NavigationMiddleware::new(
//!     Arc::new(history.clone()),
//!     |action: &Action| match action {
//!         Action::Navigate(navigation) => Some(navigation.clone()),
//!         _ => None,
//!     },
//!     |route: &Route| match route {
//!         Route::Home => "/".to_string(),
//!         Route::NotFound => "/404".to_string(),
//!     },
//! );
//!
//! let dispatch = MiddlewareChain::<(), Action>::new()
//!     .add_middleware(Arc::new(route_middleware))
//!     .add_middleware(Arc::new(navigation_middleware))
//!     .build(Arc::new(NoopStore), Arc::new(|action| action));
//!
//! dispatch(Action::Navigate(Navigation::PushInternal(Route::Home)));
//! ```

pub mod error;
pub mod history;
pub mod middleware;
pub mod navigation;
pub mod observable;
pub mod route_type;
pub mod router;
pub mod signal;

// Re-exports
pub use error::RouterError;
pub use history::{History, HistoryListener, MemoryHistory, MemoryHistoryConfig};
pub use middleware::{
	DispatchFn, FormatterFn, FromActionFn, Middleware, MiddlewareChain, NavigationMiddleware,
	OnRouteFn, ParserFn, RouteMiddleware, StoreApi,
};
pub use navigation::Navigation;
pub use observable::RouteObservable;
pub use route_type::RouteType;
pub use router::{Navigator, Router};
pub use signal::{Signal, Subscription};
