use rand::{seq::SliceRandom, thread_rng};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// An evaluator with absolutely no policy: a uniform pick over the legal moves.
///
/// This is the easy tier.
pub struct RandomEvaluator;

impl Evaluator for RandomEvaluator
{
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move>
    {
        let moves = board.moves_for(color);
        moves.choose(&mut thread_rng()).copied()
    }

    fn new(_options: UcciOptions) -> Self
    {
        RandomEvaluator
    }
}
