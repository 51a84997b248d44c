//! Network messages - communication between the screen controller and the network layer

use crate::error::ApiError;
use crate::models::{Draft, Post};

/// Commands sent from the controller to the network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Read up to `limit` posts
    FetchPosts { id: u64, limit: usize },
    /// Create a post from the draft
    CreatePost { id: u64, draft: Draft },
    /// Abort outstanding requests and stop the network actor
    Shutdown,
}

impl NetworkCommand {
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkCommand::FetchPosts { id, .. } => Some(*id),
            NetworkCommand::CreatePost { id, .. } => Some(*id),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Completions sent from the network layer back to the controller
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    PostsFetched {
        id: u64,
        result: Result<Vec<Post>, ApiError>,
    },
    PostCreated {
        id: u64,
        result: Result<Post, ApiError>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PostsFetched { id, .. } => *id,
            NetworkResponse::PostCreated { id, .. } => *id,
        }
    }

    pub fn is_error(&self) -> bool {
        match self {
            NetworkResponse::PostsFetched { result, .. } => result.is_err(),
            NetworkResponse::PostCreated { result, .. } => result.is_err(),
        }
    }
}
