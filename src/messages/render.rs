//! Render state - data structure sent from the screen controller to the UI for rendering

use chrono::{DateTime, Utc};

use crate::app::list_sync::ListPhase;
use crate::messages::ui_events::InputMode;
use crate::models::{Draft, DraftField, Post};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Post list
    pub posts: Vec<Post>,
    pub list_phase: ListPhase,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub list_error: Option<String>,
    pub last_synced: Option<DateTime<Utc>>,
    pub list_scroll: usize,

    // Draft form
    pub draft: Draft,
    pub focused_field: DraftField,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub is_submitting: bool,
    pub submit_error: Option<String>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            posts: Vec::new(),
            list_phase: ListPhase::Initial,
            is_loading: true,
            is_refreshing: false,
            list_error: None,
            last_synced: None,
            list_scroll: 0,
            draft: Draft::default(),
            focused_field: DraftField::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            is_submitting: false,
            submit_error: None,
            show_help: false,
        }
    }
}
