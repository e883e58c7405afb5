use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::style::Color;

use crate::apple::{Apple, SpawnError};
use crate::config::{GridSize, Theme, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Ended,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    /// The head left the playfield.
    Offscreen,
    /// The head ran into the body.
    SelfCollision,
    /// No free cell was left for the next apple.
    BoardFull,
}

/// Complete mutable state for one game session.
///
/// Owns everything the frame loop mutates, so no game state lives outside
/// it. Created fresh for every play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub apple: Apple,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    elapsed_ms: f64,
    bounds: GridSize,
    apple_color: Color,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, theme: &Theme, speed: f64) -> Self {
        Self::new_with_seed(bounds, theme, speed, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    ///
    /// The snake starts against the left edge at mid-height, heading right;
    /// `speed` is in grid cells per millisecond.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, theme: &Theme, speed: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Position {
            x: INITIAL_SNAKE_LENGTH as i32 - 1,
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(
            start,
            Direction::Right,
            INITIAL_SNAKE_LENGTH,
            speed,
            theme.snake,
            bounds,
        );
        let apple = Apple::spawn_random(&mut rng, bounds, &[&snake], theme.apple)
            .expect("a fresh board must have a free cell for the first apple");

        Self {
            snake,
            apple,
            status: GameStatus::Running,
            end_reason: None,
            elapsed_ms: 0.0,
            bounds,
            apple_color: theme.apple,
            rng,
        }
    }

    /// Advances the session by one frame's elapsed time.
    ///
    /// Order matters: movement first, then the apple check (so growth and
    /// respawn are deterministic relative to the frame that caused them),
    /// then the frame's direction intent, then the terminal checks. Once
    /// ended, further frames are no-ops.
    pub fn frame(&mut self, dt_ms: f64, requested: Option<Direction>) {
        if self.status != GameStatus::Running {
            return;
        }
        self.elapsed_ms += dt_ms;

        self.snake.advance(dt_ms);

        if self.apple.eaten(&self.snake) {
            self.snake.grow();
            match Apple::spawn_random(&mut self.rng, self.bounds, &[&self.snake], self.apple_color)
            {
                Ok(apple) => self.apple = apple,
                Err(SpawnError::BoardFull { .. }) => {
                    self.end(EndReason::BoardFull);
                    return;
                }
            }
        }

        if let Some(direction) = requested {
            self.snake.request_direction(direction);
        }

        if self.snake.is_offscreen() {
            self.end(EndReason::Offscreen);
        } else if self.snake.has_self_collision() {
            self.end(EndReason::SelfCollision);
        }
    }

    /// Score of the session's snake.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    /// Playfield dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Total simulated time fed to this session.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    fn end(&mut self, reason: EndReason) {
        self.status = GameStatus::Ended;
        self.end_reason = Some(reason);
    }
}
