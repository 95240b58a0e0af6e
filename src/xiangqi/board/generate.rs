use itertools::iproduct;

use super::consts;
use crate::prelude::*;

impl Board
{
    /// Generates all valid moves for the given color into the given list.
    ///
    /// Deliberately brute force: every piece of the color against every point
    /// on the board, so the movement rules stay in one place. The list is
    /// recomputed fresh on every call.
    pub fn generate_moves(&self, color: Color, moves: &mut Vec<Move>)
    {
        for index in 0..consts::PIECES
        {
            let piece = Piece::from(index as u8);
            if piece.color != color
            {
                continue;
            }

            let Some(from) = self.location(&piece)
            else
            {
                continue;
            };

            for (file, rank) in iproduct!(0..point::consts::FILES, 0..point::consts::RANKS)
            {
                let to = Point::new(file, rank);
                if self.can_move(&piece, to).is_ok()
                {
                    moves.push(Move { from, to });
                }
            }
        }
    }

    /// Gets all of the valid moves for the given color.
    pub fn moves_for(&self, color: Color) -> Vec<Move>
    {
        let mut moves = Vec::new();
        self.generate_moves(color, &mut moves);
        moves
    }
}
