use crate::game::GameState;
use crate::snake::Cell;

/// What occupies a painted cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tile {
    SnakeHead,
    SnakeBody,
    Food,
    SpecialFood,
}

/// One cell paint instruction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellPaint {
    pub cell: Cell,
    pub tile: Tile,
    /// Request the pulsing treatment ordinary food gets.
    pub blinking: bool,
}

/// Produces the paint list for the current state.
///
/// Pure function of the state; the presentation layer clears the whole
/// board and then applies these instructions in order, so later entries win
/// when cells overlap (food is painted over the snake, special food last).
#[must_use]
pub fn paint(state: &GameState) -> Vec<CellPaint> {
    let mut paints = Vec::with_capacity(state.snake.len() + 2);

    for (index, segment) in state.snake.segments().enumerate() {
        paints.push(CellPaint {
            cell: *segment,
            tile: if index == 0 {
                Tile::SnakeHead
            } else {
                Tile::SnakeBody
            },
            blinking: false,
        });
    }

    paints.push(CellPaint {
        cell: state.food,
        tile: Tile::Food,
        blinking: true,
    });

    if let Some(cell) = state.special_food {
        paints.push(CellPaint {
            cell,
            tile: Tile::SpecialFood,
            blinking: false,
        });
    }

    paints
}
