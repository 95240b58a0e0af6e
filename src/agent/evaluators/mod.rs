mod greedy;
mod minimax;
mod random;

pub use greedy::GreedyEvaluator;
pub use minimax::MinimaxEvaluator;
pub use random::RandomEvaluator;
