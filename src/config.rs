use std::time::Duration;

use crate::Coords;
use crate::snake::Direction;

use simplelog::LevelFilter;

pub const GRID_SIZE: i16 = 30;
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub const INITIAL_SNAKE: [Coords; 2] = [(GRID_SIZE / 2, GRID_SIZE / 2), (GRID_SIZE / 2 + 1, GRID_SIZE / 2)];
pub const INITIAL_DIRECTION: Direction = Direction::Left;
pub const FOOD_SEED: Coords = (5, 5);

pub const LOG_FILE: &str = "snake.log";
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Everything a fresh [`GameState`](crate::state::GameState) is built from.
/// Play always uses `Settings::default()`; other values only appear in tests.
#[derive(Clone, Debug)]
pub struct Settings {
    pub grid_size: i16,
    pub initial_snake: Vec<Coords>,
    pub initial_direction: Direction,
    pub food_seed: Coords,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            grid_size: GRID_SIZE,
            initial_snake: INITIAL_SNAKE.to_vec(),
            initial_direction: INITIAL_DIRECTION,
            food_seed: FOOD_SEED,
        }
    }
}
