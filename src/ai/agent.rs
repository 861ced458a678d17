use crate::game::{Board, Player};

/// Interface for anything that can pick a column to play.
pub trait Agent {
    /// Select a column for `player` on this board.
    ///
    /// Callers must hand in a live position: no winner yet and at least one
    /// open column. Implementations assert this contract.
    fn select_move(&mut self, board: &Board, player: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
