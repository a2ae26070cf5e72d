use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{BOARD_SIZE, SPECIAL_FOOD_THRESHOLD};
use crate::food::{place_food, FoodKind};
use crate::input::{Direction, GameInput};
use crate::snake::{Cell, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What a single tick did, so the caller knows when to persist the score.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Tick was a no-op because the game is over.
    Idle,
    /// Snake moved onto an empty cell.
    Moved,
    /// Snake ate food of the given kind and grew.
    Ate(FoodKind),
    /// Snake hit a wall or itself; the game just ended.
    Collision,
}

impl TickOutcome {
    /// Returns true when the tick increased the score.
    #[must_use]
    pub fn score_changed(self) -> bool {
        matches!(self, Self::Ate(_))
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// The single pending movement direction; input overwrites it directly
    /// (latest valid input before a tick wins) and the tick reads it.
    pub direction: Direction,
    pub food: Cell,
    /// Special food position, `None` while unavailable.
    pub special_food: Option<Cell>,
    pub score: u32,
    /// Best score seen across games; survives `reset`.
    pub max_score: u32,
    /// Ordinary pickups since special food last spawned, cycles `{0,1,2}`.
    pub food_eaten: u8,
    pub status: GameStatus,
    pub tick_count: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_with_rng(StdRng::seed_from_u64(seed))
    }

    fn new_with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::new(random_cell(&mut rng));
        let food = place_food(&mut rng, &snake);

        Self {
            snake,
            direction: Direction::Right,
            food,
            special_food: None,
            score: 0,
            max_score: 0,
            food_eaten: 0,
            status: GameStatus::Running,
            tick_count: 0,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Terminal states are sticky: once the game is over every tick is a
    /// no-op until [`reset`](Self::reset).
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let candidate = self.snake.head().step(self.direction);

        // Collision is resolved against the pre-move body, old head
        // excluded, tail included.
        if !candidate.is_on_board() || self.snake.body_collides(candidate) {
            self.status = GameStatus::GameOver;
            return TickOutcome::Collision;
        }

        if candidate == self.food {
            self.score += FoodKind::Normal.points();
            self.food_eaten += 1;
            // Replacement food excludes the pre-move body only; the cell
            // the head is about to enter is still fair game.
            self.food = place_food(&mut self.rng, &self.snake);

            if self.food_eaten >= SPECIAL_FOOD_THRESHOLD {
                self.special_food = Some(place_food(&mut self.rng, &self.snake));
                self.food_eaten = 0;
            }

            self.snake.advance_grown(candidate);
            self.max_score = self.max_score.max(self.score);
            return TickOutcome::Ate(FoodKind::Normal);
        }

        if self.special_food == Some(candidate) {
            self.score += FoodKind::Special.points();
            self.max_score = self.max_score.max(self.score);
            self.special_food = None;
            // The tail stays on special pickups too, so the snake grows
            // exactly like it does on ordinary food.
            self.snake.advance_grown(candidate);
            return TickOutcome::Ate(FoodKind::Special);
        }

        self.snake.advance(candidate);
        TickOutcome::Moved
    }

    /// Applies one external input event.
    ///
    /// Direction changes are dropped while the game-over screen is up and
    /// when they would reverse the pending direction in place.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running && direction != self.direction.opposite() {
                    self.direction = direction;
                }
            }
            GameInput::Reset => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Starts a new game in place, keeping only the best score.
    pub fn reset(&mut self) {
        self.snake = Snake::new(random_cell(&mut self.rng));
        self.food = place_food(&mut self.rng, &self.snake);
        self.special_food = None;
        self.food_eaten = 0;
        self.direction = Direction::Right;
        self.score = 0;
        self.status = GameStatus::Running;
        self.tick_count = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn random_cell(rng: &mut StdRng) -> Cell {
    Cell {
        x: rng.gen_range(0..i32::from(BOARD_SIZE)),
        y: rng.gen_range(0..i32::from(BOARD_SIZE)),
    }
}

#[cfg(test)]
mod tests {
    use crate::food::FoodKind;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Cell, Snake};

    use super::{GameState, GameStatus, TickOutcome};

    fn state_with_snake_at(head: Cell, direction: Direction) -> GameState {
        let mut state = GameState::new_with_seed(1);
        state.snake = Snake::new(head);
        state.direction = direction;
        // Park the food out of the way so movement tests stay food-free.
        state.food = Cell { x: 0, y: 24 };
        state
    }

    #[test]
    fn eating_food_grows_scores_and_relocates_the_food() {
        let mut state = state_with_snake_at(Cell { x: 5, y: 5 }, Direction::Right);
        state.food = Cell { x: 6, y: 5 };

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Ate(FoodKind::Normal));
        assert_eq!(state.score, 1);
        assert_eq!(state.food_eaten, 1);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Cell { x: 6, y: 5 });
        assert!(state.snake.occupies(Cell { x: 5, y: 5 }));
        // Replacement food excluded the pre-move body, so it cannot sit on
        // any segment that already existed before the move.
        assert!(!state.snake.body_collides(state.food));
    }

    #[test]
    fn moving_without_food_keeps_length() {
        let mut state = state_with_snake_at(Cell { x: 5, y: 5 }, Direction::Right);

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Cell { x: 6, y: 5 });
    }

    #[test]
    fn wall_collision_ends_the_game_without_moving() {
        let mut state = state_with_snake_at(Cell { x: 0, y: 0 }, Direction::Left);

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Collision);
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Cell { x: 0, y: 0 });
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut state = GameState::new_with_seed(3);
        state.snake = Snake::from_segments(vec![
            Cell { x: 6, y: 6 },
            Cell { x: 5, y: 6 },
            Cell { x: 5, y: 7 },
            Cell { x: 6, y: 7 },
            Cell { x: 7, y: 7 },
            Cell { x: 7, y: 6 },
        ]);
        state.direction = Direction::Left;
        state.food = Cell { x: 0, y: 24 };

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn ticks_are_noops_after_game_over() {
        let mut state = state_with_snake_at(Cell { x: 0, y: 0 }, Direction::Left);
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        let ticks_before = state.tick_count;
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.tick_count, ticks_before);
        assert_eq!(state.snake.head(), Cell { x: 0, y: 0 });
    }

    #[test]
    fn reversal_input_is_rejected() {
        let mut state = state_with_snake_at(Cell { x: 5, y: 5 }, Direction::Right);

        state.apply_input(GameInput::Direction(Direction::Left));
        assert_eq!(state.direction, Direction::Right);

        state.apply_input(GameInput::Direction(Direction::Up));
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn direction_input_is_ignored_on_the_game_over_screen() {
        let mut state = state_with_snake_at(Cell { x: 0, y: 0 }, Direction::Left);
        state.tick();

        state.apply_input(GameInput::Direction(Direction::Down));

        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn third_pickup_spawns_special_food_and_resets_the_counter() {
        let mut state = state_with_snake_at(Cell { x: 5, y: 5 }, Direction::Right);

        for step in 0u8..3 {
            state.food = state.snake.head().step(Direction::Right);
            state.tick();
            assert_eq!(state.food_eaten, if step == 2 { 0 } else { step + 1 });
        }

        assert_eq!(state.score, 3);
        let special = state.special_food.expect("special food should be available");
        assert!(special.is_on_board());
        assert!(!state.snake.body_collides(special));
    }

    #[test]
    fn special_pickup_scores_three_grows_and_consumes_it() {
        let mut state = state_with_snake_at(Cell { x: 9, y: 10 }, Direction::Right);
        state.special_food = Some(Cell { x: 10, y: 10 });
        state.score = 4;
        state.max_score = 4;

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Ate(FoodKind::Special));
        assert_eq!(state.score, 7);
        assert_eq!(state.max_score, 7);
        assert_eq!(state.special_food, None);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Cell { x: 10, y: 10 });
    }

    #[test]
    fn special_cell_is_inert_while_unavailable() {
        let mut state = state_with_snake_at(Cell { x: 9, y: 10 }, Direction::Right);
        state.special_food = None;

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn reset_starts_over_but_keeps_max_score() {
        let mut state = state_with_snake_at(Cell { x: 0, y: 0 }, Direction::Left);
        state.score = 5;
        state.max_score = 9;
        state.food_eaten = 2;
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        state.apply_input(GameInput::Reset);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 9);
        assert_eq!(state.food_eaten, 0);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.len(), 1);
        assert!(state.snake.head().is_on_board());
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn snake_never_overlaps_itself_over_a_long_run() {
        let mut state = GameState::new_with_seed(11);
        state.snake = Snake::new(Cell { x: 12, y: 12 });
        state.direction = Direction::Right;

        // Walk a clockwise rectangle for a while, eating whatever food the
        // RNG happens to drop on the path.
        let turns = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        for lap in 0..40 {
            state.apply_input(GameInput::Direction(turns[lap % 4]));
            for _ in 0..6 {
                if state.status != GameStatus::Running {
                    return;
                }
                state.tick();

                let mut seen = std::collections::HashSet::new();
                for segment in state.snake.segments() {
                    assert!(seen.insert(*segment), "duplicate segment {segment:?}");
                }
            }
        }
    }

    #[test]
    fn max_score_is_monotone_across_ticks() {
        let mut state = state_with_snake_at(Cell { x: 2, y: 2 }, Direction::Right);
        let mut best = state.max_score;

        for _ in 0..10 {
            state.food = state.snake.head().step(Direction::Right);
            if state.status != GameStatus::Running {
                break;
            }
            state.tick();
            assert!(state.max_score >= best);
            best = state.max_score;
        }
    }
}
