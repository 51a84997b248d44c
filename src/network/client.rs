//! HTTP client for the posts resource - executes requests and decodes responses

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::ApiError;
use crate::models::{Draft, Post};

/// Client for `GET /posts` and `POST /posts`.
///
/// Performs no retries; every call is exactly one request.
#[derive(Clone, Debug)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    /// Build a client from the loaded configuration
    pub fn new(config: &Config) -> Self {
        PostsClient::with_client(create_client(config), &config.base_url)
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        PostsClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    /// Fetch at most `limit` posts in server order
    pub async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let resp = self
            .client
            .get(self.posts_url())
            .query(&[("_limit", limit)])
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, limit, elapsed_ms = start.elapsed().as_millis() as u64, "Fetched posts");

        decode_posts(status, &body, limit)
    }

    /// Create a post from the draft; the server assigns `id` and `userId`
    pub async fn create_post(&self, draft: &Draft) -> Result<Post, ApiError> {
        let start = Instant::now();
        let resp = self.client.post(self.posts_url()).json(draft).send().await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, elapsed_ms = start.elapsed().as_millis() as u64, "Created post");

        decode_created(status, &body)
    }
}

/// Decode a list response, truncating to `limit` if the server over-delivers
pub(crate) fn decode_posts(status: u16, body: &str, limit: usize) -> Result<Vec<Post>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::UnexpectedStatus(status));
    }

    let mut posts: Vec<Post> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    posts.truncate(limit);
    Ok(posts)
}

/// Decode a create response. Any 2xx is success.
pub(crate) fn decode_created(status: u16, body: &str) -> Result<Post, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Validation {
            status,
            message: rejection_message(status, body),
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Pull a human-readable reason out of an error body
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(text) = json.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(200).collect();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("request rejected")
        .to_string()
}

/// Create an HTTP client with default configuration
pub fn create_client(config: &Config) -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "HTTP client configuration rejected, using defaults");
            reqwest::Client::new()
        })
}
