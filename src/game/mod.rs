//! Core Connect Four game logic: board representation, player types, line
//! enumeration, and win detection.

mod board;
mod player;
mod section;
mod win;

pub use board::{Board, Cell, LegalMoves, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use section::{section_count, sections, Section, SECTION_LEN};
pub use win::winner;
