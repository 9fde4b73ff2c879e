//! Synchronous publish/subscribe channel.
//!
//! This is the crate's stream primitive: an ordered receiver list with
//! synchronous fan-out on the emitting thread. There is no buffering, no
//! batching and no deduplication; every emission reaches every receiver
//! before `emit` returns, in connection order. Unsubscribing is the only
//! cancellation primitive and is idempotent.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Type alias for boxed receiver functions.
type ReceiverFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A connected receiver and its identity.
struct ReceiverInfo<T> {
	id: u64,
	receiver: ReceiverFn<T>,
}

impl<T> Clone for ReceiverInfo<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			receiver: Arc::clone(&self.receiver),
		}
	}
}

/// A channel that delivers values to connected receivers synchronously.
///
/// Cloning a `Signal` shares the receiver list, so any clone may emit or
/// connect. Receivers are snapshotted before fan-out: a receiver may
/// re-enter the channel (for example, push a new navigation while handling
/// a notification) without deadlocking; nested emissions interleave on the
/// same thread.
///
/// # Example
///
/// ```
/// use route_sync::Signal;
///
/// let paths: Signal<String> = Signal::new("paths");
/// let subscription = paths.connect(|path: &String| println!("now at {path}"));
///
/// paths.emit(&"/users/7".to_string());
/// assert!(subscription.unsubscribe());
/// assert!(!subscription.unsubscribe());
/// ```
pub struct Signal<T: Send + Sync + 'static> {
	receivers: Arc<RwLock<Vec<ReceiverInfo<T>>>>,
	next_id: Arc<AtomicU64>,
	name: String,
}

impl<T: Send + Sync + 'static> Signal<T> {
	/// Creates a new channel with a diagnostic name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			receivers: Arc::new(RwLock::new(Vec::new())),
			next_id: Arc::new(AtomicU64::new(0)),
			name: name.into(),
		}
	}

	/// Connects a receiver; it is invoked for every subsequent emission
	/// until the returned [`Subscription`] is cancelled.
	pub fn connect<F>(&self, receiver: F) -> Subscription
	where
		F: Fn(&T) + Send + Sync + 'static,
	{
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		self.receivers.write().push(ReceiverInfo {
			id,
			receiver: Arc::new(receiver),
		});

		let receivers = Arc::clone(&self.receivers);
		Subscription {
			cancel: Box::new(move || {
				let mut receivers = receivers.write();
				let before = receivers.len();
				receivers.retain(|info| info.id != id);
				receivers.len() < before
			}),
		}
	}

	/// Delivers `value` to every connected receiver, in connection order,
	/// before returning.
	pub fn emit(&self, value: &T) {
		let snapshot: Vec<ReceiverFn<T>> = self
			.receivers
			.read()
			.iter()
			.map(|info| Arc::clone(&info.receiver))
			.collect();

		tracing::trace!(channel = %self.name, receivers = snapshot.len(), "emit");

		for receiver in snapshot {
			receiver(value);
		}
	}

	/// Returns the number of connected receivers.
	pub fn receiver_count(&self) -> usize {
		self.receivers.read().len()
	}

	/// Disconnects every receiver.
	pub fn disconnect_all(&self) {
		self.receivers.write().clear();
	}
}

impl<T: Send + Sync + 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			receivers: Arc::clone(&self.receivers),
			next_id: Arc::clone(&self.next_id),
			name: self.name.clone(),
		}
	}
}

impl<T: Send + Sync + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("name", &self.name)
			.field("receiver_count", &self.receiver_count())
			.finish()
	}
}

/// Handle for a connected receiver.
///
/// Cancellation is explicit: dropping the handle leaves the receiver
/// connected for the life of the channel, matching the long-lived
/// listeners this crate installs.
pub struct Subscription {
	cancel: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Subscription {
	/// Creates a subscription from a cancellation closure.
	///
	/// Custom [`History`](crate::History) backends use this to hand out
	/// handles for listeners they manage themselves. The closure must
	/// return `true` only on the call that actually detached the listener.
	pub fn new(cancel: impl Fn() -> bool + Send + Sync + 'static) -> Self {
		Self {
			cancel: Box::new(cancel),
		}
	}

	/// Disconnects the receiver. Returns `true` if it was still connected;
	/// repeated calls are no-ops returning `false`.
	pub fn unsubscribe(&self) -> bool {
		(self.cancel)()
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription").finish()
	}
}

#[cfg(test)]
mod tests {
	use super::Signal;
	use parking_lot::Mutex;
	use std::sync::Arc;

	#[test]
	fn test_emissions_are_delivered_in_order() {
		let signal: Signal<String> = Signal::new("test");
		let seen = Arc::new(Mutex::new(Vec::new()));

		let _subscription = signal.connect({
			let seen = Arc::clone(&seen);
			move |value: &String| seen.lock().push(value.clone())
		});

		signal.emit(&"a".to_string());
		signal.emit(&"b".to_string());
		signal.emit(&"c".to_string());

		assert_eq!(*seen.lock(), vec!["a", "b", "c"]);
	}

	#[test]
	fn test_receivers_run_in_connection_order() {
		let signal: Signal<u32> = Signal::new("test");
		let order = Arc::new(Mutex::new(Vec::new()));

		let _first = signal.connect({
			let order = Arc::clone(&order);
			move |_| order.lock().push("first")
		});
		let _second = signal.connect({
			let order = Arc::clone(&order);
			move |_| order.lock().push("second")
		});

		signal.emit(&0);
		assert_eq!(*order.lock(), vec!["first", "second"]);
	}

	#[test]
	fn test_unsubscribe_is_idempotent() {
		let signal: Signal<u32> = Signal::new("test");
		let count = Arc::new(Mutex::new(0u32));

		let subscription = signal.connect({
			let count = Arc::clone(&count);
			move |_| *count.lock() += 1
		});

		signal.emit(&0);
		assert!(subscription.unsubscribe());
		assert!(!subscription.unsubscribe());
		signal.emit(&0);

		assert_eq!(*count.lock(), 1);
		assert_eq!(signal.receiver_count(), 0);
	}

	#[test]
	fn test_receiver_may_reenter_the_channel() {
		let signal: Signal<u32> = Signal::new("test");
		let seen = Arc::new(Mutex::new(Vec::new()));

		let _subscription = signal.connect({
			let signal = signal.clone();
			let seen = Arc::clone(&seen);
			move |value: &u32| {
				seen.lock().push(*value);
				if *value == 0 {
					signal.emit(&1);
				}
			}
		});

		signal.emit(&0);
		assert_eq!(*seen.lock(), vec![0, 1]);
	}

	#[test]
	fn test_clone_shares_receivers() {
		let signal: Signal<u32> = Signal::new("test");
		let clone = signal.clone();
		let count = Arc::new(Mutex::new(0u32));

		let _subscription = clone.connect({
			let count = Arc::clone(&count);
			move |_| *count.lock() += 1
		});

		signal.emit(&0);
		assert_eq!(*count.lock(), 1);
		assert_eq!(signal.receiver_count(), 1);

		signal.disconnect_all();
		assert_eq!(clone.receiver_count(), 0);
	}
}
