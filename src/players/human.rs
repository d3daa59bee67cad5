/// Terminal-driven seat. Prompts for a move token each round and keeps
/// the scrollback clean by not echoing the entry. The prompt re-asks on
/// an invalid token a few times, then throws at random rather than hold
/// the table hostage.
#[derive(Debug)]
pub struct Human {
    name: String,
}

impl Human {
    const RETRIES: usize = 3;
}

impl From<String> for Human {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl Player for Human {
    fn name(&self) -> &str {
        &self.name
    }
    fn act(&mut self) -> Move {
        for _ in 0..Self::RETRIES {
            let entry = Input::<String>::new()
                .with_prompt(format!("{}, enter your move (rock, paper, scissors)", self.name))
                .report(false)
                .interact();
            match entry {
                Ok(text) => match Move::try_from(text.as_str()) {
                    Ok(held) => return held,
                    Err(_) => println!("{}", "invalid move! enter rock, paper, or scissors".red()),
                },
                Err(_) => break,
            }
        }
        log::warn!("{} gave no valid move, throwing at random", self.name);
        Move::random()
    }
}

use super::player::Player;
use crate::game::action::Move;
use crate::Arbitrary;
use colored::Colorize;
use dialoguer::Input;
