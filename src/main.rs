//! Holocron TUI - Actor-based character directory viewer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use holocron_tui::messages::ui_events::{key_to_ui_event, KeyContext};
use holocron_tui::ui::{draw_ui, grid_columns};
use holocron_tui::{AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, RenderState, UiEvent};

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
    let config = Config::load()?;

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| ".".into());
    let log_name = config
        .log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| holocron_tui::constants::DEFAULT_LOG_FILE.into());
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(
        version = holocron_tui::constants::APP_VERSION,
        api_base = %config.api_base,
        "Starting"
    );

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
    let network_actor = NetworkActor::new(&config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config.start_page, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut ctx = KeyContext::from_render(&current_state, grid_columns(terminal.size()?.width));
    let mut tick: usize = 0;

    loop {
        terminal.draw(|f| draw_ui(f, &current_state, tick))?;
        tick = tick.wrapping_add(1);

        // Poll for events with timeout
        if event::poll(Duration::from_millis(80))? {
            if let Event::Key(key) = event::read()? {
                if current_state.refresh(render_rx) {
                    ctx = KeyContext::from_render(&current_state, 0);
                }
                ctx.columns = grid_columns(terminal.size()?.width);
                if let Some(event) = key_to_ui_event(key, ctx) {
                    ctx.apply(&event);
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        if current_state.refresh(render_rx) {
            ctx = KeyContext::from_render(&current_state, ctx.columns);
        }
    }

    Ok(())
}
