#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const MAX: Self = Move::Scissors;
    pub const MIN: Self = Move::Rock;

    pub const fn all() -> &'static [Self] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }

    /// cyclic dominance: each move beats exactly one other and loses to exactly one other
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }

    /// the unique move that beats this one
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
}

impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => panic!("invalid move"),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}
impl From<Move> for usize {
    fn from(m: Move) -> usize {
        m as usize
    }
}

impl TryFrom<&str> for Move {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err("invalid move token"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "rock",
                Self::Paper => "paper",
                Self::Scissors => "scissors",
            }
        )
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..crate::N) as u8)
    }
}

use crate::Arbitrary;
