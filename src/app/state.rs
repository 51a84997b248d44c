//! Screen state - pure data structure with no I/O logic

use crate::app::list_sync::ListSyncState;
use crate::app::submission::SubmissionState;
use crate::config::Config;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::DraftField;

/// Everything the posts screen owns while mounted
pub struct ScreenState {
    // Synchronized data
    pub list: ListSyncState,
    pub submission: SubmissionState,

    // Form state
    pub focused_field: DraftField,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // List view
    pub list_scroll: usize,

    // Popups
    pub show_help: bool,

    pub next_request_id: u64,
    pub mounted: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ScreenState {
    pub fn new(config: &Config) -> Self {
        ScreenState {
            list: ListSyncState::new(config.default_limit, config.refresh_limit),
            submission: SubmissionState::new(config.allow_empty_submission),
            focused_field: DraftField::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            list_scroll: 0,
            show_help: false,
            next_request_id: 1,
            mounted: true,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Content of the focused draft field
    pub fn current_input(&self) -> &str {
        self.submission.draft().field(self.focused_field)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            posts: self.list.items().map(|items| items.to_vec()).unwrap_or_default(),
            list_phase: self.list.phase(),
            is_loading: self.list.is_loading(),
            is_refreshing: self.list.is_refreshing(),
            list_error: self.list.error_message().map(str::to_string),
            last_synced: self.list.last_synced(),
            list_scroll: self.list_scroll,
            draft: self.submission.draft().clone(),
            focused_field: self.focused_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            is_submitting: self.submission.is_submitting(),
            submit_error: self.submission.error_message().map(str::to_string),
            show_help: self.show_help,
        }
    }
}
