use crate::prelude::*;

pub mod difficulty;
pub mod evaluators;
pub mod scalars;

pub use difficulty::*;
pub use evaluators::*;
pub use scalars::consts::*;

/// A trait representing a policy by which the computer player picks its move.
pub trait Evaluator
{
    /// Returns the move this policy plays for the given color, or None when
    /// the color has no legal move at all.
    ///
    /// A None is the caller's signal to treat the opposing color as the
    /// winner; a side with no legal moves forfeits.
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns a new evaluator. Evaluators are instanced so that they can support internal state.
    fn new(options: UcciOptions) -> Self;
}

/// Picks a move for the given color at the given difficulty, under default options.
pub fn select_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move>
{
    select_move_with(UcciOptions::default(), board, color, difficulty)
}

/// Picks a move for the given color at the given difficulty.
pub fn select_move_with(options: UcciOptions, board: &Board, color: Color, difficulty: Difficulty) -> Option<Move>
{
    match difficulty
    {
        | Difficulty::Easy => RandomEvaluator::new(options).best_move(board, color),
        | Difficulty::Medium => GreedyEvaluator::new(options).best_move(board, color),
        | Difficulty::Hard => MinimaxEvaluator::new(options).best_move(board, color),
    }
}
