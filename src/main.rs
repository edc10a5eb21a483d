use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use grid_snake::error::AppError;
use grid_snake::input::{GameIntent, map_key_event};
use grid_snake::renderer::{self, container_from_terminal};
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, restore_terminal_best_effort};

/// Poll timeout used while no clock deadline is armed (idle, paused, or
/// game over): keeps the loop responsive to input and resize events.
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    install_panic_hook();
    run(cli)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;

    let size = terminal.terminal_mut().size()?;
    let container = container_from_terminal(size.width, size.height);
    let mut session = match cli.seed {
        Some(seed) => Session::new_with_seed(container, seed),
        None => Session::new(container),
    };

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session))?;

        if event::poll(poll_timeout(&session))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(intent) = map_key_event(key) {
                        if intent == GameIntent::Quit {
                            break;
                        }
                        session.handle_intent(intent, Instant::now());
                    }
                }
                Event::Resize(width, height) => {
                    session.resize(container_from_terminal(width, height));
                }
                _ => {}
            }
        }

        session.advance(Instant::now());
    }

    Ok(())
}

fn poll_timeout(session: &Session) -> Duration {
    session
        .next_deadline()
        .map(|deadline| deadline.saturating_duration_since(Instant::now()))
        .unwrap_or(IDLE_POLL_TIMEOUT)
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_best_effort();
        default_hook(panic_info);
    }));
}
