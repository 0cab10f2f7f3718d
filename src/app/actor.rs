//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        start_page: u32,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(start_page),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount: fetch the first page
        if let Some(cmd) = self.state.load_current_page() {
            self.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), "Network response received");
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: NetworkCommand) {
        let _ = self.network_tx.send(cmd);
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Grid
            UiEvent::MoveCursor(delta) => self.state.move_cursor(delta),
            UiEvent::SelectEntry => {
                for cmd in self.state.select_entry() {
                    self.send(cmd);
                }
            }

            // Pagination
            UiEvent::NextPage => {
                if let Some(cmd) = self.state.next_page() {
                    self.send(cmd);
                }
            }
            UiEvent::PrevPage => {
                if let Some(cmd) = self.state.prev_page() {
                    self.send(cmd);
                }
            }

            // Overlay
            UiEvent::CloseDetail => self.state.close_detail(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
