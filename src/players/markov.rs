use super::player::Player;
use crate::game::action::Move;
use crate::markov::memory::Memory;
use crate::markov::transitions::Transitions;
use crate::save::history::History;
use crate::Arbitrary;
use std::path::Path;

/// The adaptive seat. Models the opponent as a second-order Markov
/// process over move pairs: every observed move lands in a transition
/// table keyed by the two moves before it, and each round it counters
/// the most frequent continuation of the current window. With no window
/// or no signal it throws at random, which is also its whole strategy
/// until two rounds have been observed.
#[derive(Debug)]
pub struct Markov {
    name: String,
    memory: Memory,
    transitions: Transitions,
}

impl Markov {
    pub fn new(name: String) -> Self {
        Self {
            name,
            memory: Memory::default(),
            transitions: Transitions::default(),
        }
    }

    /// Seed the table from a previous session's round history. The
    /// first seat's column is replayed through the identical live
    /// transition, so reloading a file is indistinguishable from having
    /// watched those rounds happen.
    pub fn recall(name: String, path: &Path) -> Self {
        let rows = History::scan(path);
        let transitions = Transitions::replay(rows.iter().map(|(x, _)| *x));
        log::info!(
            "{:<24}{:<24}",
            "recalled transitions",
            format!("{} observations", transitions.mass())
        );
        Self {
            name,
            memory: Memory::default(),
            transitions,
        }
    }
}

impl Player for Markov {
    fn name(&self) -> &str {
        &self.name
    }
    fn act(&mut self) -> Move {
        self.memory
            .window()
            .and_then(|(prior, last)| self.transitions.predict(prior, last))
            .map(|predicted| predicted.counter())
            .unwrap_or_else(Move::random)
    }
    fn learn(&mut self, _: Move, seen: Move) {
        if let Some((prior, last)) = self.memory.observe(seen) {
            self.transitions.increment(prior, last, seen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roshambot-{}-{}.csv", tag, std::process::id()))
    }

    #[test]
    fn cold_start_is_uniform() {
        const TRIALS: usize = 3000;
        let mut markov = Markov::new("cold".to_string());
        let mut counts = [0usize; crate::N];
        for _ in 0..TRIALS {
            counts[usize::from(markov.act())] += 1;
        }
        let expected = TRIALS as f64 / crate::N as f64;
        let statistic = counts
            .iter()
            .map(|&count| {
                let drift = count as f64 - expected;
                drift * drift / expected
            })
            .sum::<f64>();
        assert!(statistic < 30.0, "chi-square {} over {:?}", statistic, counts);
    }

    #[test]
    fn learns_only_with_a_full_window() {
        let mut markov = Markov::new("ai".to_string());
        markov.learn(Move::Paper, Move::Rock);
        markov.learn(Move::Paper, Move::Paper);
        assert_eq!(markov.transitions.mass(), 0);
        markov.learn(Move::Paper, Move::Scissors);
        assert_eq!(markov.transitions.count(Move::Rock, Move::Paper, Move::Scissors), 1);
        assert_eq!(markov.transitions.mass(), 1);
    }

    #[test]
    fn counters_the_predicted_move() {
        let mut markov = Markov::new("ai".to_string());
        markov.memory.observe(Move::Rock);
        markov.memory.observe(Move::Paper);
        for _ in 0..5 {
            markov.transitions.increment(Move::Rock, Move::Paper, Move::Paper);
        }
        markov.transitions.increment(Move::Rock, Move::Paper, Move::Scissors);
        assert_eq!(markov.act(), Move::Scissors);
    }

    #[test]
    fn recall_is_idempotent() {
        let path = scratch("recall");
        {
            let mut history = History::create(&path).unwrap();
            history.append("a", Move::Rock, "b", Move::Paper, Some("b")).unwrap();
            history.append("a", Move::Paper, "b", Move::Scissors, Some("b")).unwrap();
            history.append("a", Move::Scissors, "b", Move::Rock, Some("b")).unwrap();
        }
        let once = Markov::recall("ai".to_string(), &path);
        let again = Markov::recall("ai".to_string(), &path);
        assert_eq!(once.transitions, again.transitions);
        assert_eq!(once.transitions.count(Move::Rock, Move::Paper, Move::Scissors), 1);
        assert_eq!(once.transitions.mass(), 1);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_history_starts_empty() {
        let markov = Markov::recall("ai".to_string(), Path::new("no-such-history.csv"));
        assert_eq!(markov.transitions.mass(), 0);
    }
}
