use crate::snake::Direction;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    NewGame,
    Quit,
}

/// Arrow keys steer; anything not listed here is dropped.
pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Up => Some(Command::Turn(Direction::Up)),
        KeyCode::Down => Some(Command::Turn(Direction::Down)),
        KeyCode::Left => Some(Command::Turn(Direction::Left)),
        KeyCode::Right => Some(Command::Turn(Direction::Right)),
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_turn() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(Command::Turn(Direction::Up)));
        assert_eq!(map_key(&key(KeyCode::Down)), Some(Command::Turn(Direction::Down)));
        assert_eq!(map_key(&key(KeyCode::Left)), Some(Command::Turn(Direction::Left)));
        assert_eq!(map_key(&key(KeyCode::Right)), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn new_game_and_quit() {
        assert_eq!(map_key(&key(KeyCode::Enter)), Some(Command::NewGame));
        assert_eq!(map_key(&key(KeyCode::Char('n'))), Some(Command::NewGame));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(Command::Quit));

        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert!(is_ctrl_c(&ctrl_c));
        assert_eq!(map_key(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        for code in [KeyCode::Char('w'), KeyCode::Char('c'), KeyCode::Char(' '), KeyCode::Tab, KeyCode::F(1)].iter() {
            assert_eq!(map_key(&key(*code)), None);
        }
    }
}
