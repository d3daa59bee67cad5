use super::player::Player;
use crate::game::action::Move;

/// always throws the one move it was configured with
#[derive(Debug)]
pub struct Constant {
    name: String,
    held: Move,
}

impl From<(String, Move)> for Constant {
    fn from((name, held): (String, Move)) -> Self {
        Self { name, held }
    }
}

impl Player for Constant {
    fn name(&self) -> &str {
        &self.name
    }
    fn act(&mut self) -> Move {
        self.held
    }
}
