//! Screen controller - message loop processing UI events and network completions

use tokio::sync::mpsc;

use crate::app::state::ScreenState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// Controller that owns the screen state and drives it from events
pub struct ScreenController {
    state: ScreenState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl ScreenController {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        ScreenController {
            state: ScreenState::new(config),
            network_tx,
            render_tx,
        }
    }

    /// Run the controller message loop until the screen is closed
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount: kick off the initial load
        if let Some(cmd) = self.state.mount() {
            self.dispatch(cmd);
        }
        self.render();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Unmount before anything else can arrive
                        self.state.unmount();
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    self.render();
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), failed = response.is_error(), "Completion received");
                    self.state.handle_response(response);
                    self.render();
                }
                else => break,
            }
        }

        tracing::info!("Screen closed");
    }

    fn dispatch(&self, cmd: NetworkCommand) {
        if self.network_tx.send(cmd).is_err() {
            tracing::warn!("Network layer is gone, command dropped");
        }
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // List
            UiEvent::Refresh => {
                if let Some(cmd) = self.state.refresh() {
                    self.dispatch(cmd);
                }
            }
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Draft form
            UiEvent::NextField => self.state.next_field(),
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::Submit => {
                if let Some(cmd) = self.state.submit() {
                    self.dispatch(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::list_sync::ListPhase;
    use crate::error::ApiError;
    use crate::models::Post;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn start() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (net_tx, net_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let controller = ScreenController::new(&Config::default(), net_tx, render_tx);
        let handle = tokio::spawn(controller.run(ui_rx, resp_rx));

        Harness {
            ui_tx,
            resp_tx,
            net_rx,
            render_rx,
            handle,
        }
    }

    impl Harness {
        async fn wait_for(&mut self, pred: impl Fn(&RenderState) -> bool) -> RenderState {
            loop {
                let state = self.render_rx.recv().await.expect("controller stopped");
                if pred(&state) {
                    return state;
                }
            }
        }
    }

    fn post(id: u64) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("post {}", id),
            body: String::from("body"),
        }
    }

    #[tokio::test]
    async fn test_mount_loads_posts() {
        let mut h = start();

        let first = h.render_rx.recv().await.unwrap();
        assert!(first.is_loading);
        assert!(first.posts.is_empty());

        let cmd = h.net_rx.recv().await.unwrap();
        assert!(matches!(cmd, NetworkCommand::FetchPosts { limit: 10, .. }));

        h.resp_tx
            .send(NetworkResponse::PostsFetched {
                id: cmd.id().unwrap(),
                result: Ok(vec![post(1), post(2)]),
            })
            .unwrap();

        let ready = h.wait_for(|s| s.list_phase == ListPhase::Ready).await;
        assert!(!ready.is_loading);
        assert_eq!(ready.posts.len(), 2);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
        assert_eq!(h.net_rx.recv().await, Some(NetworkCommand::Shutdown));
    }

    #[tokio::test]
    async fn test_repeated_submit_issues_one_request() {
        let mut h = start();
        let fetch = h.net_rx.recv().await.unwrap();
        h.resp_tx
            .send(NetworkResponse::PostsFetched {
                id: fetch.id().unwrap(),
                result: Ok(vec![post(1)]),
            })
            .unwrap();
        h.wait_for(|s| s.list_phase == ListPhase::Ready).await;

        h.ui_tx.send(UiEvent::Submit).unwrap();
        h.ui_tx.send(UiEvent::Submit).unwrap();
        h.ui_tx.send(UiEvent::Refresh).unwrap();
        h.ui_tx.send(UiEvent::Refresh).unwrap();
        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();

        let mut creates = 0;
        let mut fetches = 0;
        while let Ok(cmd) = h.net_rx.try_recv() {
            match cmd {
                NetworkCommand::CreatePost { .. } => creates += 1,
                NetworkCommand::FetchPosts { limit, .. } => {
                    assert_eq!(limit, 20);
                    fetches += 1;
                }
                NetworkCommand::Shutdown => {}
            }
        }
        assert_eq!(creates, 1);
        assert_eq!(fetches, 1);
    }

    #[tokio::test]
    async fn test_failed_initial_load_surfaces_error() {
        let mut h = start();
        let cmd = h.net_rx.recv().await.unwrap();
        h.resp_tx
            .send(NetworkResponse::PostsFetched {
                id: cmd.id().unwrap(),
                result: Err(ApiError::Network("offline".into())),
            })
            .unwrap();

        let failed = h.wait_for(|s| s.list_phase == ListPhase::Failed).await;
        assert!(!failed.is_loading);
        assert!(failed.posts.is_empty());
        assert!(failed.list_error.unwrap().contains("offline"));

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
    }
}
