use crate::game::action::Move;
use std::fmt::Debug;

/// A seat at the table. Agents produce moves and may adapt to what
/// they observe; the default is to observe nothing.
pub trait Player: Debug {
    /// name shown in narration and recorded in the round log
    fn name(&self) -> &str;
    /// produce the next move
    fn act(&mut self) -> Move;
    /// observe a finished round: own move first, then the opponent's
    fn learn(&mut self, held: Move, seen: Move) {
        let _ = (held, seen);
    }
}
