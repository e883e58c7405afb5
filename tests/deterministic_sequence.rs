use ratatui::style::Color;

use vipera::apple::Apple;
use vipera::config::{GridSize, THEME_CLASSIC};
use vipera::game::{EndReason, GameSession, GameStatus};
use vipera::input::Direction;
use vipera::snake::{Position, Snake};

// 0.01 cells/ms: one whole cell per 100 ms.
const SPEED: f64 = 0.01;

#[test]
fn stepwise_apple_collection_and_offscreen_death() {
    let bounds = GridSize {
        width: 6,
        height: 4,
    };
    let mut state = GameSession::new_with_seed(bounds, &THEME_CLASSIC, SPEED, 42);

    state.snake = Snake::new(
        Position { x: 2, y: 1 },
        Direction::Right,
        3,
        SPEED,
        Color::Red,
        bounds,
    );
    state.apple = Apple::new(Position { x: 3, y: 1 }, Color::Green);

    // Frame 1: the head lands on the apple; growth is queued and a new
    // apple is spawned clear of the snake.
    state.frame(100.0, None);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 3, y: 1 });
    assert_eq!(state.snake.len(), 3);
    assert!(!state.apple.eaten(&state.snake));

    // Park the respawned apple away from the path the rest of the
    // scenario takes.
    state.apple = Apple::new(Position { x: 0, y: 3 }, Color::Green);

    // Frame 2: the queued growth materializes and the Up intent is buffered.
    state.frame(100.0, Some(Direction::Up));
    assert_eq!(state.snake.head(), Position { x: 4, y: 1 });
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.score(), 1);

    // Frame 3: the buffered turn commits.
    state.frame(100.0, None);
    assert_eq!(state.snake.head(), Position { x: 4, y: 0 });
    assert_eq!(state.status, GameStatus::Running);

    // Frame 4: one more step leaves the field.
    state.frame(100.0, None);
    assert_eq!(state.snake.head(), Position { x: 4, y: -1 });
    assert_eq!(state.status, GameStatus::Ended);
    assert_eq!(state.end_reason, Some(EndReason::Offscreen));
    assert_eq!(state.score(), 1);
}

#[test]
fn split_frame_deltas_match_a_single_delta() {
    let bounds = GridSize {
        width: 12,
        height: 8,
    };
    let mut split = GameSession::new_with_seed(bounds, &THEME_CLASSIC, SPEED, 7);
    let mut combined = GameSession::new_with_seed(bounds, &THEME_CLASSIC, SPEED, 7);

    let inputs = [
        Some(Direction::Down),
        None,
        Some(Direction::Right),
        None,
        Some(Direction::Up),
        None,
    ];

    // Intents go in with the delta that completes the whole step, so both
    // sessions buffer them against the same step boundary.
    for requested in inputs {
        split.frame(60.0, None);
        split.frame(40.0, requested);
        combined.frame(100.0, requested);
    }

    assert_eq!(split.status, combined.status);
    assert_eq!(split.snake.head(), combined.snake.head());
    assert_eq!(
        split.snake.segments().collect::<Vec<_>>(),
        combined.snake.segments().collect::<Vec<_>>()
    );
    assert_eq!(split.apple.position, combined.apple.position);
    assert_eq!(split.score(), combined.score());
}
