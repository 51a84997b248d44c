//! Network actor - runs posts requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::PostsClient;

/// Network actor that executes fetch and create commands
pub struct NetworkActor {
    client: PostsClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: PostsClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPosts { id, limit }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, limit, "Fetching posts");
                                let result = client.fetch_posts(limit).await;
                                match &result {
                                    Ok(posts) => tracing::info!(id, count = posts.len(), "Fetch completed"),
                                    Err(e) => tracing::warn!(id, error = %e, "Fetch failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::PostsFetched { id, result });
                            });
                        }

                        Some(NetworkCommand::CreatePost { id, draft }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, title = %draft.title, "Creating post");
                                let result = client.create_post(&draft).await;
                                match &result {
                                    Ok(post) => tracing::info!(id, post_id = post.id, "Create completed"),
                                    Err(e) => tracing::warn!(id, error = %e, "Create failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::PostCreated { id, result });
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            let outstanding = self.active_requests.len();
                            if outstanding > 0 {
                                tracing::info!(outstanding, "Aborting outstanding requests");
                            }
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Reap completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
