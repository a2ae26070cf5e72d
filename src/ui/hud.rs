use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the two score indicators and returns the remaining play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [score_area, max_score_area, play_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let style = Style::new().fg(theme.hud_score);
    frame.render_widget(
        Paragraph::new(format!("Score: {}", state.score)).style(style),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(format!("Max Score: {}", state.max_score)).style(style),
        max_score_area,
    );

    play_area
}
