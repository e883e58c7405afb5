use std::collections::VecDeque;

use ratatui::style::Color;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so that offscreen coordinates stay representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Mutable snake state: time-accumulated movement, direction buffering,
/// growth, and collision checks.
///
/// Speed is in grid cells per millisecond. Movement from variable frame
/// deltas accumulates fractionally and is applied in whole-cell steps, so
/// the body always sits on grid cells regardless of frame timing.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    speed: f64,
    fractional_progress: f64,
    pending_growth: bool,
    initial_len: usize,
    color: Color,
    bounds: GridSize,
}

impl Snake {
    /// Creates a snake whose body trails `length` cells behind `start`,
    /// opposite to `direction`, so it visually follows its head.
    #[must_use]
    pub fn new(
        start: Position,
        direction: Direction,
        length: usize,
        speed: f64,
        color: Color,
        bounds: GridSize,
    ) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);
        debug_assert!(length > 0);

        let mut body = VecDeque::with_capacity(length);
        let mut cell = start;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.stepped(direction.opposite());
        }

        Self {
            body,
            direction,
            pending_direction: None,
            speed,
            fractional_progress: 0.0,
            pending_growth: false,
            initial_len: length,
            color,
            bounds,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(
        segments: Vec<Position>,
        direction: Direction,
        speed: f64,
        color: Color,
        bounds: GridSize,
    ) -> Self {
        debug_assert!(!segments.is_empty());

        let initial_len = segments.len();
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            speed,
            fractional_progress: 0.0,
            pending_growth: false,
            initial_len,
            color,
            bounds,
        }
    }

    /// Buffers a direction change for the next whole-cell step.
    ///
    /// At most one change is held at a time. Requests made while one is
    /// pending, and reversals of the committed direction, are dropped.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.pending_direction.is_none() && !direction.is_opposite(self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Advances the snake by `dt_ms` of travel time.
    ///
    /// Each whole step commits any pending direction, pushes a new head and
    /// drops the tail cell. A pending growth re-appends the vacated tail
    /// after the last step of the call. Returns the cell last vacated (or
    /// re-occupied) behind the tail, `None` when the accumulator did not
    /// reach a whole step.
    pub fn advance(&mut self, dt_ms: f64) -> Option<Position> {
        self.fractional_progress += self.speed * dt_ms;
        let steps = self.fractional_progress.trunc();
        self.fractional_progress -= steps;

        let mut last_tail = None;
        for _ in 0..steps as u64 {
            if let Some(pending) = self.pending_direction.take() {
                self.direction = pending;
            }

            let next_head = self.head().stepped(self.direction);
            self.body.push_front(next_head);
            last_tail = self.body.pop_back();
        }

        if let Some(tail) = last_tail {
            if self.pending_growth {
                self.body.push_back(tail);
                self.pending_growth = false;
            }
        }

        last_tail
    }

    /// Queues growth: the next step keeps the tail cell it would drop.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Cells grown since construction.
    #[must_use]
    pub fn score(&self) -> u32 {
        (self.body.len() - self.initial_len) as u32
    }

    /// True when the head has left the playfield.
    #[must_use]
    pub fn is_offscreen(&self) -> bool {
        !self.head().is_within_bounds(self.bounds)
    }

    /// True when any two distinct segments occupy the same cell.
    ///
    /// Pairwise over the body; quadratic, fine at these lengths.
    #[must_use]
    pub fn has_self_collision(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .any(|(i, segment)| self.body.iter().skip(i + 1).any(|other| segment == other))
    }

    /// True when any segment of this snake overlaps any segment of `other`.
    ///
    /// The two-snake check; self-collision is its distinct-index
    /// degenerate case.
    #[must_use]
    pub fn collides_with(&self, other: &Snake) -> bool {
        self.body.iter().any(|segment| other.occupies(*segment))
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the color fixed at construction.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn bounds_20x20() -> GridSize {
        GridSize {
            width: 20,
            height: 20,
        }
    }

    fn test_snake(start: Position, direction: Direction) -> Snake {
        // 0.01 cells/ms: one whole cell per 100 ms.
        Snake::new(start, direction, 3, 0.01, Color::Red, bounds_20x20())
    }

    #[test]
    fn body_trails_behind_the_head() {
        let snake = test_snake(Position { x: 2, y: 0 }, Direction::Right);
        let segments: Vec<Position> = snake.segments().copied().collect();

        assert_eq!(
            segments,
            vec![
                Position { x: 2, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 0, y: 0 },
            ]
        );

        let down = test_snake(Position { x: 5, y: 5 }, Direction::Down);
        let segments: Vec<Position> = down.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 5, y: 5 },
                Position { x: 5, y: 4 },
                Position { x: 5, y: 3 },
            ]
        );
    }

    #[test]
    fn one_step_moves_the_head_and_drops_the_tail() {
        let mut snake = test_snake(Position { x: 2, y: 0 }, Direction::Right);

        let dropped = snake.advance(100.0);

        assert_eq!(snake.head(), Position { x: 3, y: 0 });
        assert_eq!(snake.len(), 3);
        assert_eq!(dropped, Some(Position { x: 0, y: 0 }));
    }

    #[test]
    fn sub_step_delta_accumulates_without_moving() {
        let mut snake = test_snake(Position { x: 2, y: 0 }, Direction::Right);

        assert_eq!(snake.advance(40.0), None);
        assert_eq!(snake.head(), Position { x: 2, y: 0 });

        // 40 + 60 = 100 ms: exactly one cell.
        assert!(snake.advance(60.0).is_some());
        assert_eq!(snake.head(), Position { x: 3, y: 0 });
    }

    #[test]
    fn split_deltas_match_a_single_combined_delta() {
        let mut split = test_snake(Position { x: 2, y: 5 }, Direction::Right);
        let mut combined = split.clone();

        split.advance(100.0);
        split.advance(150.0);
        combined.advance(250.0);

        assert_eq!(split.head(), combined.head());
        assert_eq!(
            split.segments().collect::<Vec<_>>(),
            combined.segments().collect::<Vec<_>>()
        );
    }

    #[test]
    fn large_delta_applies_every_whole_step() {
        let mut snake = test_snake(Position { x: 2, y: 5 }, Direction::Right);

        let dropped = snake.advance(300.0);

        assert_eq!(snake.head(), Position { x: 5, y: 5 });
        assert_eq!(snake.len(), 3);
        assert_eq!(dropped, Some(Position { x: 2, y: 5 }));
    }

    #[test]
    fn reversal_requests_are_dropped() {
        let mut snake = test_snake(Position { x: 5, y: 5 }, Direction::Right);

        snake.request_direction(Direction::Left);
        snake.advance(100.0);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn only_the_first_request_per_step_is_kept() {
        let mut snake = test_snake(Position { x: 5, y: 5 }, Direction::Right);

        snake.request_direction(Direction::Up);
        snake.request_direction(Direction::Down);
        snake.advance(100.0);

        assert_eq!(snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn reversal_does_not_disturb_a_pending_request() {
        let mut snake = test_snake(Position { x: 5, y: 5 }, Direction::Right);

        snake.request_direction(Direction::Up);
        snake.request_direction(Direction::Left);
        snake.advance(100.0);

        assert_eq!(snake.head(), Position { x: 5, y: 4 });
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn growth_keeps_the_vacated_tail_cell() {
        let mut snake = test_snake(Position { x: 2, y: 0 }, Direction::Right);

        snake.grow();
        let tail = snake.advance(100.0);

        assert_eq!(snake.len(), 4);
        assert_eq!(tail, Some(Position { x: 0, y: 0 }));
        assert!(snake.occupies(Position { x: 0, y: 0 }));

        // Growth applies once; the next step drops the tail again.
        snake.advance(100.0);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn growth_waits_for_a_whole_step() {
        let mut snake = test_snake(Position { x: 2, y: 0 }, Direction::Right);

        snake.grow();
        assert_eq!(snake.advance(10.0), None);
        assert_eq!(snake.len(), 3);

        snake.advance(90.0);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn fresh_snake_has_no_self_collision() {
        let snake = test_snake(Position { x: 5, y: 5 }, Direction::Right);
        assert!(!snake.has_self_collision());
    }

    #[test]
    fn head_reentering_the_body_collides() {
        // A hook of five cells about to bite itself.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
            ],
            Direction::Left,
            0.01,
            Color::Red,
            bounds_20x20(),
        );
        snake.grow();
        snake.advance(100.0);
        assert!(!snake.has_self_collision());

        snake.grow();
        snake.request_direction(Direction::Down);
        snake.advance(100.0);
        assert!(snake.has_self_collision());
    }

    #[test]
    fn two_snake_collision_checks_all_segments() {
        let one = test_snake(Position { x: 5, y: 5 }, Direction::Right);
        let disjoint = test_snake(Position { x: 5, y: 7 }, Direction::Right);
        let crossing = test_snake(Position { x: 4, y: 5 }, Direction::Right);

        assert!(!one.collides_with(&disjoint));
        assert!(one.collides_with(&crossing));
        assert!(crossing.collides_with(&one));
    }

    #[test]
    fn offscreen_detects_every_edge() {
        let bounds = GridSize {
            width: 20,
            height: 1,
        };
        let mut snake = Snake::new(
            Position { x: 3, y: 0 },
            Direction::Right,
            3,
            0.01,
            Color::Red,
            bounds,
        );
        assert!(!snake.is_offscreen());

        // Up is perpendicular, so it is accepted; on a one-tall grid the
        // step puts the head at y = -1.
        snake.request_direction(Direction::Up);
        snake.advance(100.0);
        assert_eq!(snake.head(), Position { x: 3, y: -1 });
        assert!(snake.is_offscreen());
    }

    #[test]
    fn score_counts_growth_only() {
        let mut snake = test_snake(Position { x: 5, y: 5 }, Direction::Right);
        assert_eq!(snake.score(), 0);

        snake.advance(100.0);
        assert_eq!(snake.score(), 0);

        snake.grow();
        snake.advance(100.0);
        assert_eq!(snake.score(), 1);
    }
}
