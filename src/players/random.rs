use super::player::Player;
use crate::game::action::Move;
use crate::Arbitrary;

/// uniformly random move every round, learns nothing
#[derive(Debug)]
pub struct Random {
    name: String,
}

impl From<String> for Random {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl Player for Random {
    fn name(&self) -> &str {
        &self.name
    }
    fn act(&mut self) -> Move {
        Move::random()
    }
}
