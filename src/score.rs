use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "vipera";
const SCORE_FILE_NAME: &str = "highscore.json";

/// Persisted play statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Scores {
    pub high_score: u32,
    #[serde(default)]
    pub games_played: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads scores from disk.
///
/// A missing file is a first run and yields the defaults. An unreadable or
/// malformed file is an error, so the caller can surface a warning before
/// entering raw terminal mode.
pub fn load_scores() -> io::Result<Scores> {
    load_scores_from_path(&scores_path())
}

/// Saves scores to disk, creating parent directories when needed.
pub fn save_scores(scores: Scores) -> io::Result<()> {
    save_scores_to_path(&scores_path(), scores)
}

fn load_scores_from_path(path: &Path) -> io::Result<Scores> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Scores::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_scores_to_path(path: &Path, scores: Scores) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&scores)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
