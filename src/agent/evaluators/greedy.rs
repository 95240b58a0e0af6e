use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::prelude::*;

/// How many of the best-scoring moves stay in the hat.
const TOP_MOVES: usize = 3;

/// The capture bonus dominates the jitter, so any capture outranks every quiet move.
const CAPTURE_WEIGHT: f64 = 10.0;
const JITTER: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default)]
/// A capture-greedy evaluator with a human amount of noise.
///
/// This is the medium tier. Every legal move gets a small random score plus a
/// weighted value for whatever it captures; the pick is uniform among the top
/// three, which keeps it beatable and unpredictable.
pub struct GreedyEvaluator;

impl Evaluator for GreedyEvaluator
{
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move>
    {
        let mut rng = thread_rng();

        let mut scored = board
            .moves_for(color)
            .into_iter()
            .map(|mv| {
                let mut score = rng.gen_range(0.0..JITTER);
                if let Some(victim) = board.piece_at(mv.to)
                {
                    score += CAPTURE_WEIGHT * scalars::piece_value(victim.troop) as f64;
                }
                (mv, score)
            })
            .collect::<Vec<_>>();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(TOP_MOVES);

        scored.choose(&mut rng).map(|(mv, _)| *mv)
    }

    fn new(_options: UcciOptions) -> Self
    {
        GreedyEvaluator
    }
}
