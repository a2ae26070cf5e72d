use rand::Rng;

use crate::config::{BOARD_SIZE, NORMAL_FOOD_POINTS, SPECIAL_FOOD_POINTS};
use crate::snake::{Cell, Snake};

/// The two food variants on the board.
///
/// Ordinary food is always present; special food appears after a run of
/// ordinary pickups and stays until eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Normal,
    Special,
}

impl FoodKind {
    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Normal => NORMAL_FOOD_POINTS,
            Self::Special => SPECIAL_FOOD_POINTS,
        }
    }
}

/// Picks a uniformly random cell that is not occupied by the snake.
///
/// Rejection sampling: draw, retry while the draw lands on the snake. The
/// loop terminates because the snake can never fill the whole board while a
/// game is in progress.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Cell {
    loop {
        let cell = Cell {
            x: rng.gen_range(0..i32::from(BOARD_SIZE)),
            y: rng.gen_range(0..i32::from(BOARD_SIZE)),
        };

        if !snake.occupies(cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{place_food, FoodKind};
    use crate::snake::{Cell, Snake};

    #[test]
    fn food_placement_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 2, y: 0 },
            Cell { x: 2, y: 1 },
            Cell { x: 2, y: 2 },
        ]);

        for _ in 0..200 {
            let cell = place_food(&mut rng, &snake);
            assert!(!snake.occupies(cell));
            assert!(cell.is_on_board());
        }
    }

    #[test]
    fn special_food_is_worth_more() {
        assert_eq!(FoodKind::Normal.points(), 1);
        assert_eq!(FoodKind::Special.points(), 3);
    }
}
