use rand::Rng;
use ratatui::style::Color;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Apple placement failure.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SpawnError {
    /// Every cell of the board is occupied by a snake.
    #[error("no free cell on the {width}x{height} board")]
    BoardFull { width: u16, height: u16 },
}

/// The prize entity: a single colored cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
    pub color: Color,
}

impl Apple {
    /// Creates an apple at `position`.
    #[must_use]
    pub fn new(position: Position, color: Color) -> Self {
        Self { position, color }
    }

    /// Spawns an apple on a uniformly random cell not occupied by any of
    /// the given snakes.
    ///
    /// Free cells are enumerated up front, so the sample is uniform over
    /// them and a fully occupied board fails instead of looping.
    pub fn spawn_random<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snakes: &[&Snake],
        color: Color,
    ) -> Result<Self, SpawnError> {
        let mut free = Vec::with_capacity(bounds.total_cells());
        for y in 0..i32::from(bounds.height) {
            for x in 0..i32::from(bounds.width) {
                let cell = Position { x, y };
                if !snakes.iter().any(|snake| snake.occupies(cell)) {
                    free.push(cell);
                }
            }
        }

        if free.is_empty() {
            return Err(SpawnError::BoardFull {
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(Self::new(free[rng.gen_range(0..free.len())], color))
    }

    /// True when `snake` has a segment on the apple's cell.
    #[must_use]
    pub fn eaten(&self, snake: &Snake) -> bool {
        snake.occupies(self.position)
    }
}
