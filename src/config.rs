use ratatui::style::Color;

/// Side length of the square play field, in cells.
pub const BOARD_SIZE: u16 = 25;

/// Fixed gameplay tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Delay between input/render passes of the main loop, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Points granted by ordinary food.
pub const NORMAL_FOOD_POINTS: u32 = 1;

/// Points granted by special food.
pub const SPECIAL_FOOD_POINTS: u32 = 3;

/// Ordinary pickups required before special food spawns.
pub const SPECIAL_FOOD_THRESHOLD: u8 = 3;

/// Solid block glyph used for every painted cell.
pub const GLYPH_CELL: &str = "█";

/// A color theme applied to all visual elements.
///
/// Every entity is a solid colored block; the head color must differ from
/// the body color so the travel direction stays readable.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Block color for the snake head.
    pub snake_head: Color,
    /// Block color for body segments.
    pub snake_body: Color,
    /// Block color for ordinary food.
    pub food: Color,
    /// Block color for special food.
    pub special_food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
}

/// Default theme, matching the classic palette: cyan head, green body,
/// red food, gold special food.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Cyan,
    snake_body: Color::Rgb(7, 216, 105),
    food: Color::Red,
    special_food: Color::Rgb(255, 215, 0),
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
};
