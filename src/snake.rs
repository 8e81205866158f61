use std::collections::VecDeque;

use crate::Coords;
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Rows grow downwards along `x`, columns grow rightwards along `y`.
    pub fn offset(self, pos: Coords) -> Coords {
        match self {
            Up => (pos.0 - 1, pos.1),
            Down => (pos.0 + 1, pos.1),
            Left => (pos.0, pos.1 - 1),
            Right => (pos.0, pos.1 + 1),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    SelfBite,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords },
    Ate { new_head: Coords },
    Crashed(Crash),
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
    pending: Direction,
}

impl Snake {
    pub fn new(cells: &[Coords], direction: Direction) -> Self {
        Snake { body: cells.iter().copied().collect(), direction, pending: direction }
    }

    /// Head first.
    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    /// Applies the buffered direction and moves one cell. The body is left
    /// untouched when the move crashes.
    pub fn move_step(&mut self, grid_size: i16, food: Coords) -> MoveResult {
        self.direction = self.pending;
        let new_head = self.direction.offset(self.head());

        let in_bounds = |c: i16| c >= 0 && c < grid_size;
        if !in_bounds(new_head.0) || !in_bounds(new_head.1) {
            return Crashed(Crash::Wall);
        }

        // The tail moves out of the way unless this move eats
        let ate = new_head == food;
        let remaining = if ate { self.body.len() } else { self.body.len() - 1 };
        if self.body.iter().take(remaining).any(|pos| *pos == new_head) {
            return Crashed(Crash::SelfBite);
        }

        self.body.push_front(new_head);

        if ate {
            Ate { new_head }
        } else {
            self.body.pop_back();
            Moved { new_head }
        }
    }

    /// Buffers a turn for the next step. Reversing onto the neck is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.pending = new_direction;
        }
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
