//! Network layer - posts resource requests
//!
//! The Network actor receives fetch/create commands and sends back completions.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::PostsClient;
