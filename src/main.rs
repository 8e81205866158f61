mod config;
mod error;
mod game;
mod input;
mod render;
mod snake;
mod state;
mod term;
mod ticker;

use std::fs::File;

use log::info;
use simplelog::{Config, WriteLogger};

pub type TermInt = u16;
/// `(x, y)` as row and column. Signed so a step past the wall is representable.
pub type Coords = (i16, i16);

fn main() -> error::Result<()> {
    // The terminal belongs to the game, so logs go to a file
    WriteLogger::init(config::LOG_LEVEL, Config::default(), File::create(config::LOG_FILE)?)?;
    info!("Starting snake");

    let mut game = game::SnakeGame::new()?;
    game.run()
}
