use super::action::Move;
use super::outcome::Outcome;
use crate::players::player::Player;
use crate::save::history::History;
use crate::Count;
use anyhow::Result;
use colored::Colorize;

/// A fixed-length run of rounds between two seats.
///
/// Each round completes fully before the next begins: both moves are
/// collected, the round is narrated and scored, both seats observe the
/// result, and the round lands in the history log.
pub struct Game<'a> {
    one: &'a mut (dyn Player + 'static),
    two: &'a mut (dyn Player + 'static),
    history: &'a mut History,
    rounds: usize,
    score: (Count, Count),
}

impl<'a> From<(&'a mut (dyn Player + 'static), &'a mut (dyn Player + 'static), &'a mut History, usize)> for Game<'a> {
    fn from(
        (one, two, history, rounds): (&'a mut (dyn Player + 'static), &'a mut (dyn Player + 'static), &'a mut History, usize),
    ) -> Self {
        Self {
            one,
            two,
            history,
            rounds,
            score: (0, 0),
        }
    }
}

impl Game<'_> {
    pub fn play(&mut self) -> Result<Outcome> {
        for _ in 0..self.rounds {
            self.round()?;
        }
        Ok(self.verdict())
    }

    pub fn score(&self) -> (Count, Count) {
        self.score
    }

    fn round(&mut self) -> Result<()> {
        let x = self.one.act();
        let y = self.two.act();
        self.narrate(x, y);
        self.settle(x, y);
        self.one.learn(x, y);
        self.two.learn(y, x);
        let winner = match Outcome::from((x, y)) {
            Outcome::Win => Some(self.one.name()),
            Outcome::Loss => Some(self.two.name()),
            Outcome::Draw => None,
        };
        self.history.append(self.one.name(), x, self.two.name(), y, winner)?;
        Ok(())
    }

    fn narrate(&self, x: Move, y: Move) {
        println!(
            "{}  {}",
            format!("{}: {}", self.one.name(), x).yellow(),
            format!("{}: {}", self.two.name(), y).magenta()
        );
    }

    fn settle(&mut self, x: Move, y: Move) {
        match Outcome::from((x, y)) {
            Outcome::Win => {
                self.score.0 += 1;
                println!("{}", format!("{} wins this round!", self.one.name()).green());
            }
            Outcome::Loss => {
                self.score.1 += 1;
                println!("{}", format!("{} wins this round!", self.two.name()).green());
            }
            Outcome::Draw => {
                println!("{}", "it's a tie!".blue());
            }
        }
    }

    fn verdict(&self) -> Outcome {
        let (ours, theirs) = self.score;
        match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => {
                println!(
                    "{}",
                    format!(
                        "result: {} wins the game with score {} to {}",
                        self.one.name(),
                        ours,
                        theirs
                    )
                    .green()
                );
                Outcome::Win
            }
            std::cmp::Ordering::Less => {
                println!(
                    "{}",
                    format!(
                        "result: {} wins the game with score {} to {}",
                        self.two.name(),
                        theirs,
                        ours
                    )
                    .green()
                );
                Outcome::Loss
            }
            std::cmp::Ordering::Equal => {
                println!(
                    "{}",
                    format!("result: the game is a tie with both players scoring {}", ours).blue()
                );
                Outcome::Draw
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::constant::Constant;
    use std::path::PathBuf;

    fn scratch(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roshambot-{}-{}.csv", tag, std::process::id()))
    }

    #[test]
    fn rock_sweeps_scissors() {
        let path = scratch("sweep");
        let mut history = History::create(&path).unwrap();
        let mut one = Constant::from(("rocky".to_string(), Move::Rock));
        let mut two = Constant::from(("sid".to_string(), Move::Scissors));
        let mut game = Game::from((
            &mut one as &mut dyn Player,
            &mut two as &mut dyn Player,
            &mut history,
            3,
        ));
        assert_eq!(game.play().unwrap(), Outcome::Win);
        assert_eq!(game.score(), (3, 0));
        assert_eq!(History::scan(&path).len(), 3);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn identical_seats_draw() {
        let path = scratch("draw");
        let mut history = History::create(&path).unwrap();
        let mut one = Constant::from(("a".to_string(), Move::Paper));
        let mut two = Constant::from(("b".to_string(), Move::Paper));
        let mut game = Game::from((
            &mut one as &mut dyn Player,
            &mut two as &mut dyn Player,
            &mut history,
            3,
        ));
        assert_eq!(game.play().unwrap(), Outcome::Draw);
        assert_eq!(game.score(), (0, 0));
        std::fs::remove_file(path).ok();
    }
}
