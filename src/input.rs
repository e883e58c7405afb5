use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true iff the two directions are exactly reversed.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        other == self.opposite()
    }
}

/// Edge-triggered gesture store: holds the most recent swipe until read.
#[derive(Debug, Default)]
pub struct SwipeLatch {
    direction: Option<Direction>,
}

impl SwipeLatch {
    /// Records a swipe, replacing any unread one.
    pub fn record(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Consumes and returns the latched swipe, if any.
    pub fn take(&mut self) -> Option<Direction> {
        self.direction.take()
    }
}

/// Everything one frame's worth of terminal events folds down to.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PolledInput {
    /// The single requested direction for this frame, if any.
    pub direction: Option<Direction>,
    pub confirm: bool,
    pub quit: bool,
}

/// Direction keys seen while draining one frame's events.
#[derive(Debug, Clone, Copy, Default)]
struct FrameKeys {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

/// Minimum drag distance, in aspect-corrected cells, to count as a swipe.
const SWIPE_THRESHOLD: i32 = 3;

/// Polls keyboard and mouse-gesture input once per frame.
///
/// Mouse press-to-release drags are the terminal's swipe gestures; they
/// latch until read. Keyboard input is folded per frame and overrides a
/// stale swipe.
#[derive(Debug, Default)]
pub struct InputHandler {
    swipe: SwipeLatch,
    drag_origin: Option<(u16, u16)>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all pending terminal events and folds them into one frame's
    /// input. Returns immediately when no events are queued.
    pub fn poll(&mut self) -> io::Result<PolledInput> {
        let mut keys = FrameKeys::default();
        let mut confirm = false;
        let mut quit = false;

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Left | KeyCode::Char('a' | 'A') => keys.left = true,
                    KeyCode::Right | KeyCode::Char('d' | 'D') => keys.right = true,
                    KeyCode::Up | KeyCode::Char('w' | 'W') => keys.up = true,
                    KeyCode::Down | KeyCode::Char('s' | 'S') => keys.down = true,
                    KeyCode::Enter | KeyCode::Char(' ') => confirm = true,
                    KeyCode::Esc | KeyCode::Char('q' | 'Q') => quit = true,
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.drag_origin = Some((mouse.column, mouse.row));
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some((x, y)) = self.drag_origin.take() {
                            if let Some(direction) =
                                swipe_direction(x, y, mouse.column, mouse.row)
                            {
                                self.swipe.record(direction);
                            }
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        Ok(PolledInput {
            direction: compose_direction(self.swipe.take(), keys),
            confirm,
            quit,
        })
    }
}

/// Composes the frame's single requested direction.
///
/// The latched swipe is consumed first; keyboard keys seen this frame
/// override it, checked left, right, up, down with the last match winning.
fn compose_direction(swiped: Option<Direction>, keys: FrameKeys) -> Option<Direction> {
    let mut direction = swiped;
    if keys.left {
        direction = Some(Direction::Left);
    }
    if keys.right {
        direction = Some(Direction::Right);
    }
    if keys.up {
        direction = Some(Direction::Up);
    }
    if keys.down {
        direction = Some(Direction::Down);
    }
    direction
}

/// Maps a press-to-release drag to a swipe direction.
///
/// Terminal cells are roughly twice as tall as wide, so the vertical delta
/// is doubled before picking the dominant axis. Drags below the threshold
/// on both axes are not swipes.
fn swipe_direction(from_x: u16, from_y: u16, to_x: u16, to_y: u16) -> Option<Direction> {
    let dx = i32::from(to_x) - i32::from(from_x);
    let dy = (i32::from(to_y) - i32::from(from_y)) * 2;

    if dx.abs() < SWIPE_THRESHOLD && dy.abs() < SWIPE_THRESHOLD {
        return None;
    }

    if dx.abs() >= dy.abs() {
        Some(if dx < 0 {
            Direction::Left
        } else {
            Direction::Right
        })
    } else {
        Some(if dy < 0 { Direction::Up } else { Direction::Down })
    }
}
