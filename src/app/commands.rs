//! Command handlers - screen logic for processing UI events and completions

use crate::app::ScreenState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};

impl ScreenState {
    // ========================
    // Synchronization
    // ========================

    /// First fetch, issued once when the screen appears
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        self.list.begin_initial_load(id)
    }

    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        if !self.mounted {
            return None;
        }
        let id = self.next_id();
        self.list.begin_refresh(id)
    }

    pub fn submit(&mut self) -> Option<NetworkCommand> {
        // The form is hidden until the first load completes
        if !self.mounted || self.list.is_loading() {
            return None;
        }
        if self.input_mode == InputMode::Editing {
            self.stop_editing();
        }
        let id = self.next_id();
        self.submission.begin_submit(id)
    }

    /// After this, completions are dropped without touching state
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Route a completion to the state that issued it
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if !self.mounted {
            tracing::debug!(id = response.id(), "Discarding completion after unmount");
            return;
        }

        match response {
            NetworkResponse::PostsFetched { id, result } => {
                if !self.list.accepts(id) {
                    tracing::warn!(id, "Discarding stale fetch completion");
                    return;
                }
                match result {
                    Ok(posts) => {
                        self.list.on_fetch_success(posts);
                        self.clamp_scroll();
                    }
                    Err(e) => self.list.on_fetch_failure(&e),
                }
            }
            NetworkResponse::PostCreated { id, result } => {
                if !self.submission.accepts(id) {
                    tracing::warn!(id, "Discarding stale create completion");
                    return;
                }
                match result {
                    Ok(post) => {
                        let post = self.submission.on_submit_success(post);
                        self.list.prepend(post);
                        self.list_scroll = 0;
                        if self.input_mode == InputMode::Normal {
                            self.cursor_position = 0;
                        } else {
                            self.cursor_position = self.cursor_position.min(self.current_input().len());
                        }
                    }
                    Err(e) => self.submission.on_submit_failure(&e),
                }
            }
        }
    }

    // ========================
    // List scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.list_scroll = self.list_scroll.saturating_add(1);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let len = self.list.items().map(|items| items.len()).unwrap_or(0);
        self.list_scroll = self.list_scroll.min(len.saturating_sub(1));
    }

    // ========================
    // Draft editing
    // ========================

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn start_editing(&mut self) {
        if self.list.is_loading() {
            return;
        }
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        let cursor_pos = self.cursor_position;
        let mut value = self.current_input().to_string();
        if cursor_pos <= value.len() {
            value.insert(cursor_pos, c);
            self.submission.update_draft(self.focused_field, value);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.input_mode == InputMode::Editing && self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let mut value = self.current_input().to_string();
            let prev_pos = value[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            value.remove(prev_pos);
            self.submission.update_draft(self.focused_field, value);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Help
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
