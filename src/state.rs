use crate::Coords;
use crate::config::Settings;
use crate::error::{GameError, Result};
use crate::snake::{Crash, Direction, MoveResult, Snake};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What a single call to [`GameState::advance`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The run is over and waiting for a reset, nothing moved.
    Idle,
    Moved,
    Ate,
    GameOver(Crash),
}

/// The whole simulation: snake, food, score and the game-over lifecycle.
///
/// Nothing here knows about time or the terminal. The driver owns the clock
/// and calls `advance` once per tick, feeding key presses in through
/// `set_direction` and `reset` in between.
pub struct GameState {
    settings: Settings,
    snake: Snake,
    food: Coords,
    score: u32,
    final_score: Option<u32>,
    game_over: bool,
    awaiting_reset: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Result<Self> {
        Self::with_settings(Settings::default(), StdRng::from_entropy())
    }

    pub fn with_settings(settings: Settings, rng: StdRng) -> Result<Self> {
        validate(&settings)?;

        let snake = Snake::new(&settings.initial_snake, settings.initial_direction);
        let food = settings.food_seed;

        Ok(GameState {
            settings,
            snake,
            food,
            score: 0,
            final_score: None,
            game_over: false,
            awaiting_reset: false,
            rng,
        })
    }

    pub fn advance(&mut self) -> Tick {
        if self.game_over {
            return Tick::Idle;
        }

        match self.snake.move_step(self.settings.grid_size, self.food) {
            MoveResult::Moved { .. } => Tick::Moved,
            MoveResult::Ate { new_head } => {
                self.score += 1;
                self.food = self.random_cell();
                debug!("Ate food at {:?}, score {}, next food at {:?}", new_head, self.score, self.food);
                Tick::Ate
            }
            MoveResult::Crashed(crash) => {
                self.end_run(crash);
                Tick::GameOver(crash)
            }
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if !self.game_over {
            self.snake.set_direction(direction);
        }
    }

    pub fn reset(&mut self) {
        self.food = self.settings.food_seed;
        self.snake = Snake::new(&self.settings.initial_snake, self.settings.initial_direction);
        self.score = 0;
        self.final_score = None;
        self.game_over = false;
        self.awaiting_reset = false;
        info!("New game");
    }

    pub fn grid_size(&self) -> i16 {
        self.settings.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The score the last run ended with, kept until the next reset.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_awaiting_reset(&self) -> bool {
        self.awaiting_reset
    }

    ///////////////////////////////////////////////////////////////////////////

    fn end_run(&mut self, crash: Crash) {
        info!("Game over ({:?}) with score {}", crash, self.score);

        // Snapshot first: the run's state is wiped right away, before the
        // player gets to start a new game
        self.final_score = Some(self.score);
        self.game_over = true;
        self.awaiting_reset = true;
        self.snake = Snake::new(&self.settings.initial_snake, self.snake.get_direction());
        self.score = 0;
    }

    // Snake cells are not excluded
    fn random_cell(&mut self) -> Coords {
        let size = self.settings.grid_size;
        (self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }
}

fn validate(settings: &Settings) -> Result<()> {
    let size = settings.grid_size;
    if size <= 0 {
        return Err(GameError::InvalidGridSize(size));
    }

    if settings.initial_snake.is_empty() {
        return Err(GameError::EmptySnake);
    }

    let in_grid = |(x, y): Coords| x >= 0 && x < size && y >= 0 && y < size;
    let cells = settings.initial_snake.iter().map(|c| ("initial snake cell", *c))
        .chain(std::iter::once(("food seed", settings.food_seed)));

    for (what, cell) in cells {
        if !in_grid(cell) {
            return Err(GameError::OutOfBounds { what, cell, grid_size: size });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FOOD_SEED, INITIAL_DIRECTION, INITIAL_SNAKE};
    use crate::snake::Direction::*;

    fn seeded(settings: Settings) -> GameState {
        GameState::with_settings(settings, StdRng::seed_from_u64(7)).unwrap()
    }

    fn default_state() -> GameState {
        seeded(Settings::default())
    }

    fn cells(state: &GameState) -> Vec<Coords> {
        state.snake().body().iter().copied().collect()
    }

    #[test]
    fn first_tick_moves_left() {
        let mut state = default_state();
        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(cells(&state), vec![(15, 14), (15, 15)]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), (5, 5));
    }

    #[test]
    fn length_is_constant_without_food() {
        let mut state = default_state();
        for _ in 0..10 {
            let before = state.snake().head();
            assert_eq!(state.advance(), Tick::Moved);
            assert_eq!(state.snake().body().len(), 2);
            assert_eq!(state.snake().head(), (before.0, before.1 - 1));
        }
    }

    #[test]
    fn eating_grows_scores_and_moves_food() {
        let mut state = seeded(Settings { food_seed: (15, 14), ..Settings::default() });

        assert_eq!(state.advance(), Tick::Ate);
        assert_eq!(state.score(), 1);
        assert_eq!(cells(&state), vec![(15, 14), (15, 15), (16, 15)]);

        let (fx, fy) = state.food();
        assert!(fx >= 0 && fx < 30 && fy >= 0 && fy < 30);

        // Not eating on the next tick keeps the new length
        state.food = (0, 0);
        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(state.snake().body().len(), 3);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn food_relocation_is_uniform_over_the_grid() {
        let mut state = seeded(Settings { grid_size: 3, initial_snake: vec![(1, 1)], food_seed: (0, 0), ..Settings::default() });
        let mut seen = vec![false; 9];
        for _ in 0..500 {
            let (x, y) = state.random_cell();
            seen[(x * 3 + y) as usize] = true;
        }
        // Including the cell under the snake
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn reverse_input_is_ignored() {
        let mut state = default_state();
        state.set_direction(Right);
        state.advance();
        assert_eq!(state.snake().get_direction(), Left);
        assert_eq!(state.snake().head(), (15, 14));
    }

    #[test]
    fn wall_hit_ends_the_run() {
        let mut state = seeded(Settings { initial_snake: vec![(15, 0), (16, 0)], ..Settings::default() });

        assert_eq!(state.advance(), Tick::GameOver(Crash::Wall));
        assert!(state.is_game_over());
        assert!(state.is_awaiting_reset());
        assert_eq!(cells(&state), vec![(15, 0), (16, 0)]);
    }

    #[test]
    fn game_over_on_default_board_resets_snake_and_score() {
        let mut state = default_state();
        state.score = 4;
        // Fifteen steps left reach column 0, the sixteenth leaves the grid
        for _ in 0..15 {
            assert_eq!(state.advance(), Tick::Moved);
        }
        assert_eq!(state.snake().head(), (15, 0));
        assert_eq!(state.advance(), Tick::GameOver(Crash::Wall));

        assert_eq!(cells(&state), INITIAL_SNAKE.to_vec());
        assert_eq!(state.score(), 0);
        assert_eq!(state.final_score(), Some(4));
    }

    #[test]
    fn self_bite_ends_the_run() {
        let body = vec![(2, 2), (2, 3), (1, 3), (1, 2), (1, 1), (2, 1)];
        let mut state = seeded(Settings { initial_snake: body, food_seed: (8, 8), ..Settings::default() });
        state.set_direction(Up);
        assert_eq!(state.advance(), Tick::GameOver(Crash::SelfBite));
        assert!(state.is_game_over());
    }

    #[test]
    fn nothing_moves_while_game_over() {
        let mut state = seeded(Settings { initial_snake: vec![(15, 0), (16, 0)], ..Settings::default() });
        state.advance();

        state.set_direction(Down);
        assert_eq!(state.advance(), Tick::Idle);
        assert_eq!(cells(&state), vec![(15, 0), (16, 0)]);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut state = default_state();
        state.set_direction(Up);
        state.advance();
        state.score = 3;
        state.food = (1, 1);
        for _ in 0..20 {
            state.advance();
        }
        assert!(state.is_game_over());

        state.reset();
        assert_eq!(cells(&state), INITIAL_SNAKE.to_vec());
        assert_eq!(state.snake().get_direction(), INITIAL_DIRECTION);
        assert_eq!(state.food(), FOOD_SEED);
        assert_eq!(state.score(), 0);
        assert_eq!(state.final_score(), None);
        assert!(!state.is_game_over());
        assert!(!state.is_awaiting_reset());

        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(cells(&state), vec![(15, 14), (15, 15)]);
    }

    #[test]
    fn rejects_bad_settings() {
        let rng = || StdRng::seed_from_u64(1);

        let res = GameState::with_settings(Settings { grid_size: 0, ..Settings::default() }, rng());
        assert!(matches!(res, Err(GameError::InvalidGridSize(0))));

        let res = GameState::with_settings(Settings { initial_snake: vec![], ..Settings::default() }, rng());
        assert!(matches!(res, Err(GameError::EmptySnake)));

        let res = GameState::with_settings(Settings { initial_snake: vec![(30, 2)], ..Settings::default() }, rng());
        assert!(matches!(res, Err(GameError::OutOfBounds { cell: (30, 2), .. })));

        let res = GameState::with_settings(Settings { food_seed: (-1, 0), ..Settings::default() }, rng());
        assert!(matches!(res, Err(GameError::OutOfBounds { what: "food seed", .. })));
    }
}
