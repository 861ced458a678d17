use crate::game::{sections, Board, Player, Section};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic that scores every 4-cell section by threat counts.
pub struct SectionHeuristic;

impl SectionHeuristic {
    /// Score one section for `player`. Open lines count for whoever holds
    /// them, weighted by how close they are to completion; sections holding
    /// both colors are dead and score zero. A fully occupied line also
    /// scores zero here, that is the win detector's business.
    pub fn section_score(section: &Section, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;

        for &cell in section {
            match cell {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }

        if opp == 3 && empty == 1 {
            -100
        } else if opp == 2 && empty == 2 {
            -10
        } else if opp == 1 && empty == 3 {
            -1
        } else if own == 3 && empty == 1 {
            100
        } else if own == 2 && empty == 2 {
            10
        } else if own == 1 && empty == 3 {
            1
        } else {
            0
        }
    }
}

impl Heuristic for SectionHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        sections(board)
            .iter()
            .map(|section| Self::section_score(section, player))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    const E: Cell = Cell::Empty;
    const R: Cell = Cell::Red;
    const Y: Cell = Cell::Yellow;

    #[test]
    fn score_table_for_own_pieces() {
        assert_eq!(SectionHeuristic::section_score(&[R, R, R, E], Player::Red), 100);
        assert_eq!(SectionHeuristic::section_score(&[R, E, R, E], Player::Red), 10);
        assert_eq!(SectionHeuristic::section_score(&[E, E, R, E], Player::Red), 1);
    }

    #[test]
    fn score_table_for_opponent_pieces() {
        assert_eq!(SectionHeuristic::section_score(&[Y, Y, Y, E], Player::Red), -100);
        assert_eq!(SectionHeuristic::section_score(&[Y, E, Y, E], Player::Red), -10);
        assert_eq!(SectionHeuristic::section_score(&[E, Y, E, E], Player::Red), -1);
    }

    #[test]
    fn mixed_and_degenerate_sections_score_zero() {
        assert_eq!(SectionHeuristic::section_score(&[E, E, E, E], Player::Red), 0);
        assert_eq!(SectionHeuristic::section_score(&[R, Y, E, E], Player::Red), 0);
        assert_eq!(SectionHeuristic::section_score(&[R, R, R, Y], Player::Red), 0);
        // Completed lines belong to the win detector, not the heuristic.
        assert_eq!(SectionHeuristic::section_score(&[R, R, R, R], Player::Red), 0);
        assert_eq!(SectionHeuristic::section_score(&[Y, Y, Y, Y], Player::Red), 0);
    }

    #[test]
    fn score_is_antisymmetric_between_players() {
        let samples: [Section; 6] = [
            [R, R, R, E],
            [Y, Y, E, E],
            [E, R, E, E],
            [R, Y, R, E],
            [E, E, E, E],
            [Y, Y, Y, E],
        ];
        for section in &samples {
            assert_eq!(
                SectionHeuristic::section_score(section, Player::Red),
                -SectionHeuristic::section_score(section, Player::Yellow),
            );
        }
    }

    #[test]
    fn empty_board_evaluates_to_zero() {
        let board = Board::default();
        let h = SectionHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 0);
        assert_eq!(h.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn lone_corner_piece_counts_its_open_lines() {
        let mut board = Board::default();
        board.drop_piece(0, Player::Red).unwrap();

        // The corner piece sits in exactly three sections, each otherwise
        // empty and worth one point.
        let h = SectionHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 3);
        assert_eq!(h.evaluate(&board, Player::Yellow), -3);
    }

    #[test]
    fn center_piece_outscores_corner_piece() {
        let mut corner = Board::default();
        corner.drop_piece(0, Player::Red).unwrap();
        let mut center = Board::default();
        center.drop_piece(3, Player::Red).unwrap();

        let h = SectionHeuristic;
        assert_eq!(h.evaluate(&center, Player::Red), 7);
        assert!(h.evaluate(&center, Player::Red) > h.evaluate(&corner, Player::Red));
    }

    #[test]
    fn open_three_scores_at_least_a_hundred() {
        let mut board = Board::default();
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(2, Player::Red).unwrap();

        let h = SectionHeuristic;
        let score = h.evaluate(&board, Player::Red);
        assert!(score >= 100, "open three should dominate, got {score}");
    }
}
