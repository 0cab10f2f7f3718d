//! Network actor - runs fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_films, fetch_listing, fetch_place};

/// Network actor that executes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    api_base: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config.request_timeout()),
            api_base: config.api_base.clone(),
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
                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                        Some(cmd) => self.spawn(cmd),
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }

    fn spawn(&mut self, cmd: NetworkCommand) {
        let response_tx = self.response_tx.clone();
        let client = self.client.clone();

        match cmd {
            NetworkCommand::FetchPage { id, page } => {
                let api_base = self.api_base.clone();
                self.active_requests.spawn(async move {
                    tracing::info!(id, page, "Fetching listing page");
                    let response = match fetch_listing(&client, &api_base, page).await {
                        Ok(page) => NetworkResponse::PageLoaded { id, page },
                        Err(e) => NetworkResponse::PageFailed { id, message: e.describe() },
                    };
                    tracing::info!(id, failed = response.is_failure(), "Listing fetch completed");
                    let _ = response_tx.send(response);
                });
            }

            NetworkCommand::FetchHomeworld { id, url } => {
                self.active_requests.spawn(async move {
                    tracing::info!(id, url = %url, "Fetching homeworld");
                    let response = match fetch_place(&client, &url).await {
                        Ok(place) => NetworkResponse::HomeworldLoaded { id, place },
                        Err(e) => NetworkResponse::HomeworldFailed { id, message: e.describe() },
                    };
                    let _ = response_tx.send(response);
                });
            }

            NetworkCommand::FetchFilms { id, urls } => {
                self.active_requests.spawn(async move {
                    tracing::info!(id, count = urls.len(), "Fetching films");
                    let response = match fetch_films(&client, urls).await {
                        Ok(films) => NetworkResponse::FilmsLoaded { id, films },
                        Err(e) => NetworkResponse::FilmsFailed { id, message: e.describe() },
                    };
                    tracing::info!(id, failed = response.is_failure(), "Film batch completed");
                    let _ = response_tx.send(response);
                });
            }

            NetworkCommand::Shutdown => {}
        }
    }
}
