use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use vipera::config::{self, GridSize, Theme};
use vipera::game::{GameSession, GameStatus};
use vipera::input::InputHandler;
use vipera::presence::OnlineUsers;
use vipera::renderer::{self, Screen};
use vipera::score::{self, Scores};
use vipera::terminal_runtime::{self, TerminalSession};
use vipera::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Playfield width in grid cells.
    #[arg(long, default_value_t = config::DEFAULT_GRID_WIDTH,
          value_parser = clap::value_parser!(u16).range(8..=512))]
    width: u16,

    /// Playfield height in grid cells.
    #[arg(long, default_value_t = config::DEFAULT_GRID_HEIGHT,
          value_parser = clap::value_parser!(u16).range(6..=512))]
    height: u16,

    /// Snake speed in grid cells per second.
    #[arg(long, default_value_t = config::DEFAULT_SPEED_CELLS_PER_SEC)]
    speed: f64,

    /// Color theme.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Seed for deterministic apple placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(theme) = config::theme_by_name(&cli.theme) else {
        eprintln!(
            "Unknown theme '{}'. Available: {}",
            cli.theme,
            config::theme_names().join(", ")
        );
        return ExitCode::from(2);
    };
    if !cli.speed.is_finite() || cli.speed <= 0.0 {
        eprintln!("--speed must be a positive number of cells per second");
        return ExitCode::from(2);
    }

    let scores = match score::load_scores() {
        Ok(scores) => scores,
        Err(error) => {
            eprintln!(
                "Warning: could not read score file {}: {error}",
                score::scores_path().display()
            );
            Scores::default()
        }
    };

    terminal_runtime::install_panic_hook();

    let scores = match run(&cli, theme, scores) {
        Ok(scores) => scores,
        Err(error) => {
            eprintln!("Terminal error: {error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = score::save_scores(scores) {
        eprintln!("Failed to save scores: {error}");
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli, theme: &'static Theme, mut scores: Scores) -> io::Result<Scores> {
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let speed_cells_per_ms = cli.speed / 1000.0;
    let mut session = new_session(bounds, theme, speed_cells_per_ms, cli.seed);

    // The hosting environment's connection broadcast owns the sender side;
    // no transport is wired up locally.
    let (_update_cons, mut online_users) = OnlineUsers::channel();

    let mut screen = Screen::Start;
    let mut last_frame = Instant::now();

    loop {
        let info = HudInfo {
            high_score: scores.high_score,
            games_played: scores.games_played,
            online_users: online_users.poll(),
            theme,
        };
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session, screen, &info))?;

        let polled = input.poll()?;
        if polled.quit {
            break;
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        match screen {
            Screen::Start | Screen::GameOver { .. } => {
                if polled.confirm {
                    session = new_session(bounds, theme, speed_cells_per_ms, cli.seed);
                    screen = Screen::Playing;
                }
            }
            Screen::Playing => {
                session.frame(dt_ms, polled.direction);

                if session.status == GameStatus::Ended {
                    scores.games_played += 1;
                    let new_high = session.score() > scores.high_score;
                    if new_high {
                        scores.high_score = session.score();
                    }
                    screen = Screen::GameOver { new_high };
                }
            }
        }

        thread::sleep(Duration::from_millis(config::FRAME_SLEEP_MS));
    }

    Ok(scores)
}

fn new_session(bounds: GridSize, theme: &Theme, speed: f64, seed: Option<u64>) -> GameSession {
    match seed {
        Some(seed) => GameSession::new_with_seed(bounds, theme, speed, seed),
        None => GameSession::new(bounds, theme, speed),
    }
}
