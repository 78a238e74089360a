use crate::{board::Board, types::Side};

/// Leaf count of the move tree below `board` with `side` to move.
///
/// A forced pass counts as one move; a finished game is a leaf even when
/// depth remains.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    fn inner(board: &Board, side: Side, depth: u8, layers: &mut [Vec<crate::Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        buf.clear();
        board.legal_moves_into(side, buf);

        if buf.is_empty() {
            if !board.has_legal_move(side.other()) {
                return 1;
            }
            return inner(board, side.other(), depth - 1, rest);
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let mut child = board.clone();
            child.apply_move(mv, side);
            nodes += inner(&child, side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
