use super::board::{Board, Cell};
use super::player::Player;
use super::section::sections;

/// Scan every section for four-in-a-row and return the owner of the first
/// fully occupied line, in section emission order. Within one section Red
/// is checked before Yellow. Returns `None` while the game is still open.
pub fn winner(board: &Board) -> Option<Player> {
    for section in sections(board) {
        if section == [Cell::Red; 4] {
            return Some(Player::Red);
        }
        if section == [Cell::Yellow; 4] {
            return Some(Player::Yellow);
        }
    }
    None
}
