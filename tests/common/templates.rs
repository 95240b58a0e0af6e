use xiangmind::prelude::*;

/// Replays a game string, and checks for both validity and state/turn mismatch.
pub fn run_game(raw_string: &'static str)
{
    // Ensure the game string is valid.

    let possibly_game_string: Result<GameString> = raw_string.parse::<GameString>();
    assert!(possibly_game_string.is_ok(), "\tdue to {}", possibly_game_string.unwrap_err());

    // Ensure the current state of the board is as expected.

    let board = Board::from(possibly_game_string.unwrap());
    let (state_str, turn_string_str) = game_string_to_parts(raw_string);

    let state: GameState = board.state();
    assert_eq!(state.to_string(), state_str);

    let turn: Turn = board.turn().into();
    let turn_string: TurnString = turn.into();
    assert_eq!(turn_string.as_ref(), turn_string_str);
}

/// Splits a gamestring (assumed syntactically valid) into its leading parts.
fn game_string_to_parts(game_string: &'static str) -> (&'static str, &'static str)
{
    let parts: Vec<&'static str> = game_string.split(";").collect();
    (parts[0], parts[1])
}

/// Builds an arbitrary board from piece-string and point-string pairs.
pub fn board(placements: &[(&str, &str)]) -> Board
{
    let placements = placements
        .iter()
        .map(|(piece, at)| (piece.parse::<Piece>().unwrap(), at.parse::<Point>().unwrap()))
        .collect::<Vec<_>>();

    Board::from_pieces(placements).unwrap()
}

/// Parses a coordinate move.
pub fn mv(s: &str) -> Move
{
    Move::from(&s.parse::<MoveString>().unwrap())
}

/// Parses a point.
pub fn at(s: &str) -> Point
{
    s.parse::<Point>().unwrap()
}
