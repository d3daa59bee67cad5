use super::game::Game;
use super::outcome::Outcome;
use crate::players::player::Player;
use crate::save::history::History;
use crate::Count;
use anyhow::Result;
use colored::Colorize;
use rand::seq::SliceRandom;
use std::path::Path;

/// Round-robin over the whole roster. Every unordered pair meets for a
/// configurable number of games, each game a fresh score but the same
/// agent memories, and every game win is worth one tournament point.
pub struct Tournament {
    roster: Vec<Box<dyn Player>>,
    scores: Vec<Count>,
    games: usize,
    rounds: usize,
    history: History,
}

impl Tournament {
    pub fn new(
        roster: Vec<Box<dyn Player>>,
        games: usize,
        rounds: usize,
        path: &Path,
    ) -> Result<Self> {
        let scores = vec![0; roster.len()];
        let history = History::create(path)?;
        Ok(Self {
            roster,
            scores,
            games,
            rounds,
            history,
        })
    }

    pub fn play(&mut self) -> Result<()> {
        let ref mut rng = rand::rng();
        let mut pairings = self.pairings();
        pairings.shuffle(rng);
        self.card(&pairings);
        let mut n = 0;
        for (i, j) in pairings {
            println!(
                "{}",
                format!(
                    "\nnext matchup: {} vs {}",
                    self.roster[i].name(),
                    self.roster[j].name()
                )
                .yellow()
            );
            for _ in 0..self.games {
                n += 1;
                println!("{}\nGAME   {}", "-".repeat(21), n);
                let (head, tail) = self.roster.split_at_mut(j);
                let ref mut game =
                    Game::from((head[i].as_mut(), tail[0].as_mut(), &mut self.history, self.rounds));
                match game.play()? {
                    Outcome::Win => self.scores[i] += 1,
                    Outcome::Loss => self.scores[j] += 1,
                    Outcome::Draw => continue,
                }
            }
        }
        log::info!("{:<24}{:<24}", "rounds recorded", self.history.rounds());
        self.announce();
        Ok(())
    }

    pub fn scores(&self) -> &[Count] {
        &self.scores
    }

    /// everyone holding the top score, in roster order
    pub fn winners(&self) -> Vec<&str> {
        let top = self.scores.iter().copied().max().unwrap_or(0);
        self.roster
            .iter()
            .zip(self.scores.iter())
            .filter(|(_, score)| **score == top)
            .map(|(player, _)| player.name())
            .collect()
    }

    /// all unordered pairs of roster indices
    fn pairings(&self) -> Vec<(usize, usize)> {
        let n = self.roster.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect()
    }

    fn card(&self, pairings: &[(usize, usize)]) {
        println!("{}", "tournament matchups:".cyan());
        for (i, j) in pairings.iter().copied() {
            println!("{} vs {}", self.roster[i].name(), self.roster[j].name());
        }
        println!("{}", "\nstarting tournament...".cyan());
    }

    fn announce(&self) {
        println!("\n{}", "tournament results:".cyan());
        for (player, score) in self.roster.iter().zip(self.scores.iter()) {
            println!("{}: {} wins", player.name(), score);
        }
        let winners = self.winners();
        match winners.len() {
            1 => println!("{}", format!("the overall winner is: {}", winners[0]).green()),
            _ => println!("{}", format!("the winners are: {}", winners.join(", ")).green()),
        }
    }
}
