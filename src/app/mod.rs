//! App layer - screen state and the controller that drives it
//!
//! The controller receives UI events and network completions,
//! updates state, and emits network commands and render state.

pub mod list_sync;
pub mod submission;
pub mod state;
pub mod actor;
pub mod commands;

pub use list_sync::{ListPhase, ListSyncState};
pub use submission::SubmissionState;
pub use state::ScreenState;
pub use actor::ScreenController;
