//! Draft and create-post state

use crate::error::ApiError;
use crate::messages::NetworkCommand;
use crate::models::{Draft, DraftField, Post};

#[derive(Debug, Clone)]
pub struct SubmissionState {
    draft: Draft,
    error_message: Option<String>,
    /// Id of the create request in flight
    pending: Option<u64>,
    allow_empty: bool,
}

impl SubmissionState {
    pub fn new(allow_empty: bool) -> Self {
        SubmissionState {
            draft: Draft::default(),
            error_message: None,
            pending: None,
            allow_empty,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn accepts(&self, id: u64) -> bool {
        self.pending == Some(id)
    }

    /// Replace one field of the draft. Any string is accepted.
    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Body => self.draft.body = value,
        }
    }

    /// Issue a create for the current draft. Returns `None` while a create is
    /// already in flight, or when the draft is blank and blank drafts are disallowed.
    pub fn begin_submit(&mut self, id: u64) -> Option<NetworkCommand> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, create already in flight");
            return None;
        }

        if !self.allow_empty && self.draft.is_blank() {
            self.error_message = Some(String::from("title or body is required"));
            return None;
        }

        self.pending = Some(id);
        self.error_message = None;
        tracing::debug!(id, "Submitting draft");
        Some(NetworkCommand::CreatePost {
            id,
            draft: self.draft.clone(),
        })
    }

    /// Clear the draft and hand the created post back for merging into the list
    pub fn on_submit_success(&mut self, post: Post) -> Post {
        tracing::debug!(post_id = post.id, "Draft submitted");
        self.pending = None;
        self.error_message = None;
        self.draft = Draft::default();
        post
    }

    /// Keep the draft so nothing typed is lost
    pub fn on_submit_failure(&mut self, err: &ApiError) {
        tracing::warn!(error = %err, "Submit failed");
        self.pending = None;
        self.error_message = Some(format!("failed to submit post: {}", err));
    }
}
