use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "max_score";

/// Failure writing the persisted max score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to write max score file: {0}")]
    Io(#[from] io::Error),
}

/// Returns the platform-correct max score file path.
///
/// The file holds a single base-10 integer string, nothing else.
#[must_use]
pub fn score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted max score.
///
/// A missing or unparsable file silently degrades to 0; there is no error
/// path for reads.
#[must_use]
pub fn load_max_score() -> u32 {
    load_max_score_from_path(&score_path())
}

/// Saves the max score, creating parent directories when needed.
pub fn save_max_score(score: u32) -> Result<(), ScoreError> {
    save_max_score_to_path(&score_path(), score)
}

fn load_max_score_from_path(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

fn save_max_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, score.to_string())?;
    Ok(())
}
