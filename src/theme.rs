use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Theme, THEME_CLASSIC};

const APP_DIR_NAME: &str = "grid-snake";
const THEME_FILE_NAME: &str = "theme.json";

/// Failure loading the optional user theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse theme file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown color {value:?} for field {field}")]
    Color { field: &'static str, value: String },
}

/// Partial theme as written by the user; absent fields keep the default.
///
/// Colors accept ratatui's textual forms: named colors ("red",
/// "light-cyan"), hex ("#07d869"), or an indexed value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeOverlay {
    snake_head: Option<String>,
    snake_body: Option<String>,
    food: Option<String>,
    special_food: Option<String>,
    play_bg: Option<String>,
    border_fg: Option<String>,
    border_bg: Option<String>,
    hud_score: Option<String>,
}

/// Returns the user theme file path, when a config dir exists.
#[must_use]
pub fn theme_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(THEME_FILE_NAME);
    Some(base)
}

/// Loads the default theme with the user overlay applied.
///
/// A missing file yields the default theme; an unreadable or invalid file
/// is an error so the caller can warn before entering raw terminal mode.
pub fn load_theme() -> Result<Theme, ThemeError> {
    match theme_path() {
        Some(path) => load_theme_from_path(&path),
        None => Ok(THEME_CLASSIC),
    }
}

fn load_theme_from_path(path: &Path) -> Result<Theme, ThemeError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(THEME_CLASSIC),
        Err(error) => return Err(error.into()),
    };

    theme_from_json(&raw)
}

fn theme_from_json(raw: &str) -> Result<Theme, ThemeError> {
    let overlay: ThemeOverlay = serde_json::from_str(raw)?;
    let mut theme = THEME_CLASSIC;

    apply("snake_head", &overlay.snake_head, &mut theme.snake_head)?;
    apply("snake_body", &overlay.snake_body, &mut theme.snake_body)?;
    apply("food", &overlay.food, &mut theme.food)?;
    apply("special_food", &overlay.special_food, &mut theme.special_food)?;
    apply("play_bg", &overlay.play_bg, &mut theme.play_bg)?;
    apply("border_fg", &overlay.border_fg, &mut theme.border_fg)?;
    apply("border_bg", &overlay.border_bg, &mut theme.border_bg)?;
    apply("hud_score", &overlay.hud_score, &mut theme.hud_score)?;

    Ok(theme)
}

fn apply(field: &'static str, value: &Option<String>, slot: &mut Color) -> Result<(), ThemeError> {
    if let Some(raw) = value {
        *slot = raw.parse().map_err(|_| ThemeError::Color {
            field,
            value: raw.clone(),
        })?;
    }

    Ok(())
}
