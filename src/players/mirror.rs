use super::player::Player;
use crate::game::action::Move;
use crate::Arbitrary;

/// throws back whatever it saw last, random until it has seen anything
#[derive(Debug)]
pub struct Mirror {
    name: String,
    seen: Option<Move>,
}

impl From<String> for Mirror {
    fn from(name: String) -> Self {
        Self { name, seen: None }
    }
}

impl Player for Mirror {
    fn name(&self) -> &str {
        &self.name
    }
    fn act(&mut self) -> Move {
        self.seen.unwrap_or_else(Move::random)
    }
    fn learn(&mut self, _: Move, seen: Move) {
        self.seen = Some(seen);
    }
}
