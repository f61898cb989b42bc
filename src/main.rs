//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! Two players share the mouse: left-click a cell to place the current
//! player's token, press R once the round is over to start again, Q to quit.
//! Rendering goes through the framebuffer renderer in `term`; the game itself
//! lives in `core` and never touches the terminal.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::config::Config;
use tui_tictactoe::core::GameSession;
use tui_tictactoe::input::{click_position, handle_key_event, should_quit};
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    info!(?config, "starting tic-tac-toe");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "exiting");
    result
}

/// Log to a file so output never lands on the game screen.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install tracing subscriber")
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameSession::new();
    let view = GameView::new(config.cell_w, config.cell_h);
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            view.render_into(&game.snapshot(), viewport, &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty |= game.apply_action(action);
                }
            }
            Event::Mouse(mouse) => {
                let Some(click) = click_position(mouse) else {
                    continue;
                };
                match view.hit_test(viewport, click.column, click.row) {
                    Some(pos) => dirty |= game.request_move_at(pos),
                    None => debug!(x = click.column, y = click.row, "click outside board"),
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_install_is_reported() {
        let path = std::env::temp_dir().join(format!("tictactoe-{}.log", std::process::id()));
        let config = Config {
            log_path: Some(path.clone()),
            ..Config::default()
        };

        assert!(init_logging(&Config::default()).is_ok());
        assert!(init_logging(&config).is_ok());
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("tracing subscriber"), "{err:#}");

        let _ = std::fs::remove_file(path);
    }
}
