use rand::{seq::SliceRandom, thread_rng};

use crate::prelude::*;

#[derive(Clone, Copy, Debug)]
/// A fixed-depth minimax evaluator with alpha-beta pruning.
///
/// This is the hard tier. Leaves score by material; a captured general scores
/// WIN plus the remaining depth, so genuine wins outrank any material lead
/// and the shallowest win outranks deeper ones. Equal-scoring root moves are
/// broken uniformly at random.
///
/// There is no move ordering beyond enumeration order and no transposition
/// table; at the default depth the brute-force tree is already fast.
pub struct MinimaxEvaluator
{
    depth: i32,
}

impl Evaluator for MinimaxEvaluator
{
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move>
    {
        let moves = board.moves_for(color);

        let mut scratch = board.clone();
        let mut best_score = -INF;
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in moves
        {
            scratch.play_unchecked(&mv);
            let score = Self::minimax(&mut scratch, self.depth - 1, false, color, -INF, INF);

            if let Err(err) = scratch.undo_one()
            {
                panic!("{}", err);
            }

            if score > best_score
            {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            }
            else if score == best_score
            {
                best_moves.push(mv);
            }
        }

        best_moves.choose(&mut thread_rng()).copied()
    }

    fn new(options: UcciOptions) -> Self
    {
        MinimaxEvaluator {
            depth: options.depth as i32,
        }
    }
}

impl MinimaxEvaluator
{
    // Plain tree recursion with the alpha-beta bounds threaded as parameters.
    fn minimax(board: &mut Board, depth: i32, maximizing: bool, color: Color, mut a: i32, mut b: i32) -> i32
    {
        if let Some(winner) = board.winner()
        {
            return if winner == color { WIN + depth } else { -(WIN + depth) };
        }

        if depth <= 0
        {
            return scalars::evaluate(board, color);
        }

        let mover = if maximizing { color } else { color.flip() };
        let moves = board.moves_for(mover);

        // A searched side with no replies scores even; stalemate is not a
        // concept this engine knows about.
        if moves.is_empty()
        {
            return 0;
        }

        if maximizing
        {
            let mut best = -INF;
            for mv in moves
            {
                board.play_unchecked(&mv);
                let score = Self::minimax(board, depth - 1, false, color, a, b);

                if let Err(err) = board.undo_one()
                {
                    panic!("{}", err);
                }

                best = best.max(score);
                a = a.max(score);
                if b <= a
                {
                    break;
                }
            }
            best
        }
        else
        {
            let mut best = INF;
            for mv in moves
            {
                board.play_unchecked(&mv);
                let score = Self::minimax(board, depth - 1, true, color, a, b);

                if let Err(err) = board.undo_one()
                {
                    panic!("{}", err);
                }

                best = best.min(score);
                b = b.min(score);
                if b <= a
                {
                    break;
                }
            }
            best
        }
    }
}
