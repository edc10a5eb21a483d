//! Viewport-sized grid snake.
//!
//! The simulation core (`grid`, `snake`, `food`, `engine`, `clock`,
//! `input`, `session`) is a deterministic single-threaded state machine
//! with no terminal dependencies; the binary wires it to a ratatui front
//! end via `renderer`, `ui`, and `terminal_runtime`.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
