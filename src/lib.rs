//! Terminal Snake with smooth, time-stepped movement.
//!
//! The simulation advances from variable frame deltas through a fractional
//! accumulator, so the snake always lands on whole grid cells no matter how
//! frames are timed. The library half holds the full simulation (snake,
//! apple, session state machine, input protocol) so it can be driven
//! headless from tests; the binary wires it to a ratatui terminal.

pub mod apple;
pub mod config;
pub mod game;
pub mod input;
pub mod presence;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
