use std::time::Instant;

use crate::{Coords, TermInt};
use crate::config::TICK_INTERVAL;
use crate::error::{GameError, Result};
use crate::input::{map_key, Command};
use crate::render::BoardView;
use crate::state::{GameState, Tick};
use crate::term::{ScreenPos, TermManager};
use crate::ticker::Ticker;

use log::{debug, info};

/// Each cell is drawn as a glyph plus a space, so the board looks square.
const CELL_WIDTH: TermInt = 2;

/// Where the score line and the bordered board go on screen.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    score_pos: ScreenPos,
    board_top_left: ScreenPos,
    board_size: ScreenPos,
}

impl Layout {
    fn fit(grid_size: i16, term_size: ScreenPos) -> Result<Self> {
        let grid = grid_size as TermInt;
        let board_size = (grid * CELL_WIDTH + 2, grid + 2);
        // One extra row above the board for the score
        let needed = (board_size.0, board_size.1 + 1);

        if term_size.0 < needed.0 || term_size.1 < needed.1 {
            return Err(GameError::TerminalTooSmall { needed, actual: term_size });
        }

        let left = (term_size.0 - needed.0) / 2;
        let top = (term_size.1 - needed.1) / 2;

        Ok(Layout {
            score_pos: (left, top),
            board_top_left: (left, top + 1),
            board_size,
        })
    }

    fn cell_pos(&self, (x, y): Coords) -> ScreenPos {
        (
            self.board_top_left.0 + 1 + y as TermInt * CELL_WIDTH,
            self.board_top_left.1 + 1 + x as TermInt,
        )
    }
}

pub struct SnakeGame {
    term: TermManager,
    state: GameState,
    layout: Layout,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        let state = GameState::new()?;
        let term = TermManager::new()?;
        let layout = Layout::fit(state.grid_size(), term.size())?;

        Ok(SnakeGame { term, state, layout })
    }

    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;

        if self.show_intro()? {
            self.play()?;
        }

        self.term.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Returns false if the player chose to quit instead of starting.
    fn show_intro(&mut self) -> Result<bool> {
        self.term.show_message(&[
            "Snake Game",
            "",
            "Arrow keys to move",
            "Esc or CTRL+C to quit",
            "",
            "Press any key to play",
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;

        Ok(map_key(&key) != Some(Command::Quit))
    }

    fn play(&mut self) -> Result<()> {
        info!("Starting a {0}x{0} game", self.state.grid_size());

        self.term.clear()?;
        self.term.draw_borders(self.layout.board_top_left, self.layout.board_size)?;
        self.draw_board()?;

        let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());

        loop {
            // Keys are handled as they come, the board only moves on ticks
            if let Some(key_ev) = self.term.poll_key(ticker.time_left(Instant::now()))? {
                match map_key(&key_ev) {
                    Some(Command::Quit) => break,
                    Some(Command::Turn(dir)) => self.state.set_direction(dir),
                    Some(Command::NewGame) if self.state.is_awaiting_reset() => {
                        self.state.reset();
                        self.term.hide_message()?;
                        self.draw_board()?;
                        ticker.restart(Instant::now());
                    }
                    _ => {}
                }
            }

            if !ticker.poll(Instant::now()) {
                continue;
            }

            match self.state.advance() {
                Tick::Idle => {}
                Tick::Moved | Tick::Ate => self.draw_board()?,
                Tick::GameOver(crash) => {
                    debug!("Run ended by {:?}", crash);
                    self.draw_board()?;
                    self.show_game_over()?;
                }
            }
        }

        info!("Player quit");
        Ok(())
    }

    fn draw_board(&mut self) -> Result<()> {
        let view = BoardView::of(&self.state);

        for (x, row) in view.cells.iter().enumerate() {
            for (y, tags) in row.iter().enumerate() {
                let pos = self.layout.cell_pos((x as i16, y as i16));
                self.term.print_at(pos, view.glyph(*tags))?;
                self.term.print_at((pos.0 + 1, pos.1), ' ')?;
            }
        }

        let score = format!("Score: {:<8}", view.score);
        self.term.print_str_at(self.layout.score_pos, &score)?;
        self.term.flush()
    }

    fn show_game_over(&mut self) -> Result<()> {
        let view = BoardView::of(&self.state);
        let score = format!("Score: {}", view.score);

        let mut lines = vec!["Game Over", &*score, ""];
        if view.show_new_game {
            lines.push("Press N or Enter for a new game,");
        }
        lines.push("or Esc to quit.");

        self.term.show_message(&lines)
    }
}
