use super::action::Move;

/// result of a round or a game, from the first seat's perspective
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub const fn flip(&self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((hero, villain): (Move, Move)) -> Self {
        if hero.beats(&villain) {
            Self::Win
        } else if villain.beats(&hero) {
            Self::Loss
        } else {
            Self::Draw
        }
    }
}
