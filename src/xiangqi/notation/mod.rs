mod game;
mod moves;
mod turn;

pub mod types
{
    pub use super::{
        game::GameString,
        moves::MoveString,
        turn::{Turn, TurnString},
    };
}
