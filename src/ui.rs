use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Post;

/// Renders a text input field for the draft form
pub fn render_input<'a>(content: &'a str, placeholder: &'a str, is_focused: bool, mode: InputMode) -> Paragraph<'a> {
    let border_style = if is_focused && mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    if content.is_empty() {
        Paragraph::new(Span::styled(placeholder, Style::default().fg(Color::DarkGray))).block(block)
    } else {
        Paragraph::new(content).block(block).wrap(Wrap { trim: false })
    }
}

/// Terminal column of a byte offset into `text`
pub fn cursor_column(text: &str, byte_pos: usize) -> u16 {
    let end = byte_pos.min(text.len());
    let chars = text.get(..end).map(|s| s.chars().count()).unwrap_or(end);
    u16::try_from(chars).unwrap_or(u16::MAX)
}

/// Label of the submit button
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "submitting..."
    } else {
        "submit post"
    }
}

/// Renders posts as cards: bold title line followed by the body
pub fn post_items(posts: &[Post]) -> Vec<ListItem<'static>> {
    posts
        .iter()
        .map(|post| {
            let mut lines = vec![Line::from(Span::styled(
                post.title.clone(),
                Style::default().fg(Color::White).bold(),
            ))];
            for body_line in post.body.lines() {
                lines.push(Line::from(Span::styled(
                    body_line.to_string(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect()
}

/// Title of the post list block
pub fn list_title(state: &RenderState) -> String {
    if state.is_refreshing {
        format!(" Post List ({}) refreshing... ", state.posts.len())
    } else {
        format!(" Post List ({}) ", state.posts.len())
    }
}

/// Status bar text
pub fn status_text(state: &RenderState) -> String {
    let hints = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field | Ctrl+S:submit "
    } else {
        " r:refresh | s:submit | e:edit | Tab:field | ?:help | q:quit "
    };

    match state.last_synced {
        Some(at) => format!("{}| synced {} ", hints, at.with_timezone(&chrono::Local).format("%H:%M:%S")),
        None => hints.to_string(),
    }
}

/// Centered rectangle for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false), "submit post");
        assert_eq!(submit_label(true), "submitting...");
    }

    #[test]
    fn test_cursor_column_counts_chars() {
        assert_eq!(cursor_column("éx", 2), 1);
        assert_eq!(cursor_column("éx", 3), 2);
        assert_eq!(cursor_column("abc", 10), 3);
    }

    #[test]
    fn test_list_title_shows_refreshing() {
        let mut state = RenderState::default();
        assert_eq!(list_title(&state), " Post List (0) ");
        state.is_refreshing = true;
        assert!(list_title(&state).contains("refreshing"));
    }

    #[test]
    fn test_post_items_one_per_post() {
        let posts = vec![
            Post { id: 1, user_id: 1, title: "a".into(), body: "x\ny".into() },
            Post { id: 2, user_id: 1, title: "b".into(), body: String::new() },
        ];
        assert_eq!(post_items(&posts).len(), 2);
    }
}
