//! Postboard TUI - actor-based posts client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - Screen controller - state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use postboard_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use postboard_tui::messages::ui_events::{key_to_ui_event, InputMode};
use postboard_tui::models::DraftField;
use postboard_tui::ui::{centered_rect, cursor_column, list_title, post_items, render_input, status_text, submit_label};
use postboard_tui::{
    Config, NetworkActor, NetworkCommand, NetworkResponse, PostsClient, RenderState, ScreenController,
    UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring config file, using defaults");
        Config::default()
    });
    tracing::info!(base_url = %config.base_url, version = APP_VERSION, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(PostsClient::new(&config), net_resp_tx);
    let network_task = tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn screen controller; mounting triggers the initial load
    let controller = ScreenController::new(&config, net_cmd_tx, render_tx);
    let controller_task = tokio::spawn(controller.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = controller_task.await;
    let _ = network_task.await;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.input_mode, current_state.show_help) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    if state.is_loading {
        draw_loading(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Length(10), // Draft form
            Constraint::Min(5),     // Post list
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let title = Paragraph::new(format!(" {} v{} ", APP_NAME, APP_VERSION))
        .style(Style::default().fg(Color::Black).bg(Color::Cyan).bold());
    f.render_widget(title, chunks[0]);

    draw_form(f, state, chunks[1]);
    draw_posts(f, state, chunks[2]);

    let bar = Paragraph::new(status_text(state)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 20, area);
    let text = Paragraph::new("Loading posts...")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", APP_NAME)));
    f.render_widget(text, popup);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" New Post ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Body
            Constraint::Length(2), // Submit + error
        ])
        .split(inner);

    for (field, row) in [(DraftField::Title, rows[0]), (DraftField::Body, rows[1])] {
        let is_focused = state.focused_field == field;
        let content = state.draft.field(field);
        let input = render_input(content, field.label(), is_focused, state.input_mode);
        f.render_widget(input, row);

        if is_focused && state.input_mode == InputMode::Editing {
            let max_x = row.x + row.width.saturating_sub(2);
            let column = cursor_column(content, state.cursor_position);
            let cursor_x = row.x.saturating_add(column).saturating_add(1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, row.y + 1));
        }
    }

    let button_style = if state.is_submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    };
    let mut lines = vec![Line::from(Span::styled(format!(" {} ", submit_label(state.is_submitting)), button_style))];
    if let Some(err) = &state.submit_error {
        lines.push(Line::from(Span::styled(err.clone(), Style::default().fg(Color::Red))));
    }
    f.render_widget(Paragraph::new(lines), rows[2]);
}

fn draw_posts(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(state))
        .title_bottom(Line::from(" End of List ").centered());

    let mut sections = vec![Constraint::Min(1)];
    if state.list_error.is_some() {
        sections.insert(0, Constraint::Length(1));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(sections)
        .split(inner);

    let list_area = if let Some(err) = &state.list_error {
        f.render_widget(
            Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red)),
            rows[0],
        );
        rows[1]
    } else {
        rows[0]
    };

    if state.posts.is_empty() {
        // A failed first load shows only the error
        if state.list_error.is_none() {
            f.render_widget(
                Paragraph::new("No posts found").style(Style::default().fg(Color::DarkGray)),
                list_area,
            );
        }
        return;
    }

    let list = List::new(post_items(&state.posts)).highlight_style(Style::default().bg(Color::DarkGray));
    let mut list_state = ListState::default();
    list_state.select(Some(state.list_scroll));
    f.render_stateful_widget(list, list_area, &mut list_state);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 POSTBOARD - Keyboard Shortcuts

 LIST
   r / F5             Refresh posts
   ↑ / ↓              Scroll posts

 NEW POST
   Tab                Switch title/body
   e / Enter          Edit field
   Esc                Stop editing
   s / Ctrl+S         Submit post

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
