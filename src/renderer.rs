use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, BOARD_SIZE, GLYPH_CELL};
use crate::game::{GameState, GameStatus};
use crate::paint::{self, Tile};
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);
    let board = board_rect(play_area);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let buffer = frame.buffer_mut();
    for instruction in paint::paint(state) {
        let Some((x, y)) = cell_to_terminal(inner, instruction.cell) else {
            continue;
        };

        let mut style = Style::new().fg(tile_color(instruction.tile, theme));
        if instruction.blinking {
            style = style.add_modifier(Modifier::SLOW_BLINK);
        }

        buffer.set_string(x, y, GLYPH_CELL, style);
    }

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, board, state.score, state.max_score, theme);
    }
}

fn tile_color(tile: Tile, theme: &Theme) -> ratatui::style::Color {
    match tile {
        Tile::SnakeHead => theme.snake_head,
        Tile::SnakeBody => theme.snake_body,
        Tile::Food => theme.food,
        Tile::SpecialFood => theme.special_food,
    }
}

/// Centers the bordered board inside the available play area, clamped when
/// the terminal is too small to fit all of it.
fn board_rect(area: Rect) -> Rect {
    let width = (BOARD_SIZE + 2).min(area.width);
    let height = (BOARD_SIZE + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a logical cell to a terminal coordinate inside `inner`, row-major
/// (row = y, column = x). Cells outside the board or the visible area are
/// skipped.
fn cell_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_on_board() {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
