use crate::prelude::*;

pub mod consts
{
    /// The base score of a terminal position. Wins found at shallower depth
    /// score above WIN by their remaining depth, so the search prefers them.
    pub const WIN: i32 = 10_000;

    /// An unreachable bound for the alpha-beta window.
    pub const INF: i32 = i32::MAX;
}

pub use consts::*;

/// Gives the material value of a troop.
///
/// The general's value dwarfs the rest of the army so that no exchange ever
/// trades into losing him.
pub fn piece_value(troop: Troop) -> i32
{
    match troop
    {
        | Troop::General => 1000,
        | Troop::Chariot => 90,
        | Troop::Cannon => 45,
        | Troop::Horse => 40,
        | Troop::Elephant => 20,
        | Troop::Advisor => 20,
        | Troop::Soldier => 10,
    }
}

/// Returns a purely material score for the board in the given color's perspective.
pub fn evaluate(board: &Board, color: Color) -> i32
{
    let mut score = 0;

    for index in 0..board::consts::PIECES
    {
        let piece = Piece::from(index as u8);
        if board.location(&piece).is_none()
        {
            continue;
        }

        let value = piece_value(piece.troop);
        score += if piece.color == color { value } else { -value };
    }

    score
}
