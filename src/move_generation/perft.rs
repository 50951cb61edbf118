//! Leaf-node counting over the legal move tree.
//!
//! Used to validate generation against known start-position counts and as
//! a benchmark workload.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves_for_color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in legal_moves_for_color(board, side_to_move) {
        let next = apply_move(board, from, to);
        if depth == 1 {
            total.nodes += 1;
            if board.piece_at(to).is_some() {
                total.captures += 1;
            }
            let promoted = matches!(
                (board.piece_at(from), next.piece_at(to)),
                (Some(before), Some(after)) if before.kind != after.kind
            );
            if promoted {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(&next, side_to_move.opposite(), depth - 1));
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board::create_board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn start_position_node_counts() {
        let board = create_board();
        assert_eq!(perft(&board, Color::White, 1).nodes, 20);
        assert_eq!(perft(&board, Color::White, 2).nodes, 400);

        let depth_three = perft(&board, Color::White, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.promotions, 0);
    }
}
