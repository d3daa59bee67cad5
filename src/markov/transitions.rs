use super::memory::Memory;
use crate::game::action::Move;
use crate::Count;
use crate::N;

/// Second-order transition frequencies over opponent moves.
///
/// Indexed by (second-last, last, next). Every cell always exists and
/// counts only ever grow, so a row of zeros means the window has never
/// been seen and carries no signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transitions([[[Count; N]; N]; N]);

impl Transitions {
    pub fn increment(&mut self, prior: Move, last: Move, seen: Move) {
        self.0[usize::from(prior)][usize::from(last)][usize::from(seen)] += 1;
    }

    pub fn count(&self, prior: Move, last: Move, seen: Move) -> Count {
        self.0[usize::from(prior)][usize::from(last)][usize::from(seen)]
    }

    /// total observations absorbed
    pub fn mass(&self) -> Count {
        self.0.iter().flatten().flatten().sum()
    }

    /// The most frequent continuation of the given window, or None when
    /// the row carries no observations at all. The first strictly greater
    /// count wins the scan, so equal counts resolve to the earliest move
    /// in rock < paper < scissors order.
    pub fn predict(&self, prior: Move, last: Move) -> Option<Move> {
        let mut prediction = None;
        for seen in Move::all().iter().copied() {
            let count = self.count(prior, last, seen);
            match prediction {
                Some((_, top)) if top >= count => continue,
                _ if count > 0 => prediction = Some((seen, count)),
                _ => continue,
            }
        }
        prediction.map(|(seen, _)| seen)
    }

    /// Rebuild a table from an ordered stream of opponent moves by running
    /// each observation through the same transition as live learning.
    pub fn replay(stream: impl IntoIterator<Item = Move>) -> Self {
        let mut memory = Memory::default();
        let mut transitions = Self::default();
        for seen in stream {
            if let Some((prior, last)) = memory.observe(seen) {
                transitions.increment(prior, last, seen);
            }
        }
        transitions
    }
}
