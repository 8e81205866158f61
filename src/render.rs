use crate::Coords;
use crate::state::GameState;

pub const PLAIN_CHAR: char = '·';
pub const FOOD_CHAR: char = 'O';
pub const SNAKE_BODY_CHAR: char = '█';

/// Tags are additive: food can sit under the snake, and the head is also snake.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellTags {
    pub food: bool,
    pub snake: bool,
    pub head: bool,
}

/// A snapshot of everything the screen shows for one frame.
#[derive(Debug)]
pub struct BoardView {
    /// Indexed `[x][y]`, i.e. row then column.
    pub cells: Vec<Vec<CellTags>>,
    pub head_char: char,
    pub score: u32,
    pub game_over: bool,
    pub show_new_game: bool,
}

impl BoardView {
    pub fn of(state: &GameState) -> Self {
        let size = state.grid_size() as usize;
        let mut cells = vec![vec![CellTags::default(); size]; size];

        if let Some(cell) = cell_mut(&mut cells, state.food()) {
            cell.food = true;
        }
        for pos in state.snake().body() {
            if let Some(cell) = cell_mut(&mut cells, *pos) {
                cell.snake = true;
            }
        }
        if let Some(cell) = cell_mut(&mut cells, state.snake().head()) {
            cell.head = true;
        }

        BoardView {
            cells,
            head_char: state.snake().head_char(),
            score: state.final_score().unwrap_or_else(|| state.score()),
            game_over: state.is_game_over(),
            show_new_game: state.is_game_over() && state.is_awaiting_reset(),
        }
    }

    pub fn glyph(&self, tags: CellTags) -> char {
        if tags.head {
            self.head_char
        } else if tags.snake {
            SNAKE_BODY_CHAR
        } else if tags.food {
            FOOD_CHAR
        } else {
            PLAIN_CHAR
        }
    }
}

fn cell_mut(cells: &mut [Vec<CellTags>], (x, y): Coords) -> Option<&mut CellTags> {
    if x < 0 || y < 0 {
        return None;
    }
    cells.get_mut(x as usize)?.get_mut(y as usize)
}
