//! Error type for history-facing operations.

use thiserror::Error;

/// Errors a history backend can report.
///
/// The in-memory facility never fails; these variants exist for real
/// backends (a browser bridge, an embedded webview) whose commands can be
/// rejected. Store-facing layers log and swallow them rather than
/// propagating, so a failed command never surfaces as a dispatched error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// The backend rejected or failed a navigation command.
	#[error("navigation failed: {0}")]
	NavigationFailed(String),

	/// No ambient history facility is available in this environment.
	#[error("history facility unavailable: {0}")]
	Unavailable(String),
}
