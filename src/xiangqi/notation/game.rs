use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// Represents a game, including its outcome and possibly its moves.
///
/// A game string is of the form `<state>;<turn>[;<move>...]`; for example,
/// `InProgress;Green[1];b7e7`. Parsing replays the move list from the opening
/// layout and cross-checks the declared state and turn against the result.
pub struct GameString
{
    state: GameState,
    turn:  TurnString,
    moves: Vec<MoveString>,
}

impl std::fmt::Display for GameString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "{};{}{}{}",
            self.state,
            self.turn,
            if self.moves.is_empty() { "" } else { ";" },
            self.moves.iter().map(|mv| mv.as_ref()).collect::<Vec<_>>().join(";")
        )
    }
}

impl FromStr for GameString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        // Parse out all of the components.

        let pattern = r"^(?<state>[A-Za-z]+);(?<turn>(Red|Green)\[[0-9]+\])(?<moves>(;[a-i][0-9][a-i][0-9])*)$";
        let re = Regex::new(pattern).unwrap();

        let Some(caps) = re.captures(s)
        else
        {
            log::trace!("Didn't match regex.");
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let state = caps["state"].parse::<GameState>();
        let turn = caps["turn"].parse::<TurnString>();

        let Ok(state) = state
        else
        {
            let err = state.err().unwrap();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let Ok(turn) = turn
        else
        {
            let err = turn.err().unwrap();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let moves = caps["moves"]
            .to_owned()
            .split_terminator(';')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<MoveString>())
            .collect::<Result<Vec<MoveString>>>()?;

        // Use the above facts to ensure the move list is valid.

        let mut board = Board::new();

        for mv in &moves
        {
            let real_move = Move::from(mv);
            let played = board.ensure_turn(&real_move).and_then(|_| board.play(&real_move));
            if let Err(err) = played
            {
                let err = err.chain_parse::<MoveString>(mv.as_ref().to_owned());
                return Err(err.chain_parse::<Self>(s.into()));
            }
            log::trace!("{}\n{:#?}", GameString::from(&board), &board);
        }

        // Also check that the supplied turn number and gamestate are correct.

        let calculated_state = board.state();
        if state != calculated_state
        {
            let state_mismatch_err = Error::mismatch::<GameState>(state, calculated_state);
            return Err(state_mismatch_err.chain_parse::<Self>(s.into()));
        }

        let calculated_turn: TurnString = Turn::from(board.turn()).into();
        if turn != calculated_turn
        {
            let turn_mismatch_err = Error::mismatch::<TurnString>(turn, calculated_turn);
            return Err(turn_mismatch_err.chain_parse::<Self>(s.into()));
        }

        Ok(GameString { state, turn, moves })
    }
}

impl From<&Board> for GameString
{
    fn from(board: &Board) -> Self
    {
        let state: GameState = board.state();
        let turn: TurnString = Turn::from(board.turn()).into();
        let moves = board
            .history()
            .get_past()
            .iter()
            .map(|entry| entry.mv.into())
            .collect::<Vec<MoveString>>();

        GameString { state, turn, moves }
    }
}

impl From<GameString> for Board
{
    fn from(value: GameString) -> Board
    {
        // A GameString is proof of a valid replay, so failures here are unreachable.

        let mut board = Board::new();

        value.moves.iter().for_each(|mv| {
            let real_move = Move::from(mv);
            let move_result = board.play(&real_move);
            if let Err(err) = move_result
            {
                panic!("{}", err);
            }
        });

        board
    }
}
