//! # Postboard TUI
//!
//! A terminal client that lists posts from a REST endpoint, refreshes them on
//! demand, and creates new posts.
//!
//! ## Features
//! - Initial load and pull-style refresh (refresh asks for more posts)
//! - Draft form with submit; created posts are prepended locally
//! - Failed refreshes keep the list, failed submits keep the draft
//! - One outstanding request per state object, stale completions discarded
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - Screen controller (state machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{ListPhase, ListSyncState, ScreenController, ScreenState, SubmissionState};
pub use config::Config;
pub use error::ApiError;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Draft, DraftField, Post};
pub use network::{NetworkActor, PostsClient};
