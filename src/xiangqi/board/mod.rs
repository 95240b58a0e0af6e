use crate::prelude::*;

mod checks;
mod ensures;
mod generate;
mod history;
mod printers;
mod setup;
mod state;

pub use history::{Entry, History};
use setup::OPENING;
pub use state::GameState;

pub mod consts
{
    pub const SIZE: usize = crate::prelude::point::consts::SIZE;
    pub const PIECES: usize = crate::prelude::piece::consts::COUNT as usize;
}

use consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A movement of one piece from one point to another.
///
/// Moves are never partially applied: playing a move removes whatever occupies
/// the destination and relocates the piece at the origin.
pub struct Move
{
    pub from: Point,
    pub to:   Point,
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[derive(Clone)]
/// A piece-list board over 90 points.
pub struct Board
{
    /// The board is just an array of points that might or might not hold a piece.
    grid: [Option<Piece>; SIZE],

    /// The linear history on this board, which is a forward stack paired with a backward stack.
    history: History,

    /// The locations of each piece for shorthand purposes.
    pieces: [Option<Point>; PIECES],
}

impl PartialEq for Board
{
    fn eq(&self, other: &Self) -> bool
    {
        // Histories are deliberately ignored; two boards are equal when their
        // piece placement is.
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new()
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board")?;
        for (i, at) in self.pieces.iter().enumerate()
        {
            if let Some(at) = at
            {
                write!(f, "\n\t{}: {}", at, Piece::from(i as u8))?;
            }
        }
        Ok(())
    }
}

impl Board
{
    /// Determines whether the given piece may move to the given point.
    ///
    /// The board-wide preconditions apply first (the target is a real point,
    /// differs from the origin, and holds no friendly piece), then the
    /// movement rule for the piece's troop.
    pub fn can_move(&self, piece: &Piece, to: Point) -> Result<()>
    {
        let base = Error::new(Kind::InvalidMove, format!("Cannot move {} to {}.", piece, to));

        (|| {
            self.ensure_placed(piece)?;
            self.ensure_on_board(to)?;
            self.ensure_departs(piece, to)?;
            self.ensure_no_friendly_fire(piece.color, to)
        })()
        .map_err(|err: Error| err.chain(base.clone()))?;

        self.check_motion(piece, to).map_err(|err| err.chain(base))
    }

    /// Ensures a move is valid in the current position, or returns an error explaining why it isn't.
    pub fn check(&self, mv: &Move) -> Result<()>
    {
        let Some(piece) = self.piece_at(mv.from)
        else
        {
            return Err(Error::new(Kind::UnknownPiece, format!("No piece at {}.", mv.from)));
        };

        self.can_move(&piece, mv.to)
    }

    /// Whether the given point is unoccupied.
    pub fn empty(&self, at: Point) -> bool
    {
        self.piece_at(at).is_none()
    }

    /// Creates a board with no pieces on it.
    pub fn empty_board() -> Board
    {
        Board {
            grid:    [None; SIZE],
            history: History::default(),
            pieces:  [None; PIECES],
        }
    }

    /// Builds an arbitrary position from piece placements.
    ///
    /// Positions reached through play are all buildable this way, but so are
    /// positions that are not, which is what the tests and the win-condition
    /// contract want.
    pub fn from_pieces(placements: impl IntoIterator<Item = (Piece, Point)>) -> Result<Board>
    {
        let mut board = Board::empty_board();

        for (piece, at) in placements
        {
            if !at.on_board()
            {
                let err = Error::new(Kind::OffBoard, format!("Point {} is not on the board.", at));
                return Err(err);
            }

            if board.placed(&piece)
            {
                let err = Error::new(Kind::InvalidState, format!("Piece {} is already on the board.", piece));
                return Err(err);
            }

            if let Some(occupant) = board.piece_at(at)
            {
                let err = Error::new(Kind::InvalidState, format!("Point {} is already occupied by {}.", at, occupant));
                return Err(err);
            }

            board.insert_unchecked(&piece, at);
        }

        Ok(board)
    }

    /// Finds the general for the given color.
    pub fn general(&self, color: Color) -> Option<Point>
    {
        self.location(&Piece {
            color,
            troop: Troop::General,
            num: 1,
        })
    }

    /// Gets the history of this game.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// Determines whether the given color's general is under attack.
    ///
    /// A missing general means the game is already over, which the state
    /// check owns; this defensively reports no check.
    pub fn in_check(&self, color: Color) -> bool
    {
        let Some(target) = self.general(color)
        else
        {
            return false;
        };

        (0..PIECES)
            .map(|i| Piece::from(i as u8))
            .filter(|piece| piece.color != color && self.placed(piece))
            .any(|piece| self.can_move(&piece, target).is_ok())
    }

    /// Determines whether moving whatever stands at `from` to `to` would be legal.
    ///
    /// This is the speculative surface for arbitrary input: any off-board
    /// point, empty origin, or rule failure is simply `false`.
    pub fn is_legal(&self, from: Point, to: Point) -> bool
    {
        match self.piece_at(from)
        {
            | Some(piece) => self.can_move(&piece, to).is_ok(),
            | None => false,
        }
    }

    /// Returns the point that this piece is on, if any.
    pub fn location(&self, piece: &Piece) -> Option<Point>
    {
        self.pieces[piece.index() as usize]
    }

    /// Creates a new board with the fixed opening layout.
    pub fn new() -> Board
    {
        let mut board = Board::empty_board();
        for (piece, at) in OPENING.iter()
        {
            board.insert_unchecked(piece, *at);
        }
        board
    }

    /// Whether a piece stands at this point.
    pub fn occupied(&self, at: Point) -> bool
    {
        self.piece_at(at).is_some()
    }

    /// Gets the piece at the given point, if any.
    pub fn piece_at(&self, at: Point) -> Option<Piece>
    {
        if !at.on_board()
        {
            return None;
        }
        self.grid[at.index()]
    }

    /// Determines whether or not the given piece is on the board.
    pub fn placed(&self, piece: &Piece) -> bool
    {
        self.pieces[piece.index() as usize].is_some()
    }

    /// Plays the given move on the board, if possible.
    ///
    /// Returns the state of the new position.
    pub fn play(&mut self, mv: &Move) -> Result<GameState>
    {
        self.check(mv)?;
        Ok(self.play_unchecked(mv))
    }

    /// Plays the move onto the board. Assumes Board::check().
    pub fn play_unchecked(&mut self, mv: &Move) -> GameState
    {
        let piece = self.grid[mv.from.index()].unwrap();
        let captured = self.grid[mv.to.index()];

        if let Some(victim) = captured
        {
            self.remove_unchecked(&victim);
        }

        self.remove_unchecked(&piece);
        self.insert_unchecked(&piece, mv.to);

        self.history.play(Entry { mv: *mv, piece, captured });

        self.state()
    }

    /// If there is a future move in this line, replays it.
    pub fn redo(&mut self) -> Result<GameState>
    {
        let Some(entry) = self.history.redo()
        else
        {
            return Err(Error::new(Kind::InvalidMove, "No move to redo.".into()));
        };

        if let Some(victim) = entry.captured
        {
            self.remove_unchecked(&victim);
        }

        self.remove_unchecked(&entry.piece);
        self.insert_unchecked(&entry.piece, entry.mv.to);

        Ok(self.state())
    }

    // Returns the color that should play the next move. Red opens the game.
    pub fn to_move(&self) -> Color
    {
        Color::new(self.turn() & 0x1)
    }

    /// Gets the turn number, which is the number of moves already played.
    pub fn turn(&self) -> u8
    {
        self.history.turn()
    }

    /// Undoes a number of moves, if possible.
    pub fn undo(&mut self, n: u8) -> Result<()>
    {
        let l = self.history.len();
        if n as usize > l
        {
            let err_msg = format!(
                "Asked for {} undo{}, but only {} turn{} {} been played on this board.",
                n,
                if n == 1 { "" } else { "s" },
                l,
                if l == 1 { "" } else { "s" },
                if l == 1 { "has" } else { "have" }
            );
            return Err(Error::new(Kind::TooManyUndos, err_msg));
        }

        for _ in 0..n
        {
            self.undo_one()?;
        }

        Ok(())
    }

    /// Undoes the last move, if possible.
    pub fn undo_one(&mut self) -> Result<()>
    {
        let Some(entry) = self.history.prev()
        else
        {
            return Err(Error::new(Kind::InternalError, "No move to undo.".into()));
        };

        // This undoes a move that previously passed Board::check(), so the
        // unchecked mutators are safe here.

        self.remove_unchecked(&entry.piece);
        self.insert_unchecked(&entry.piece, entry.mv.from);

        if let Some(victim) = entry.captured
        {
            self.insert_unchecked(&victim, entry.mv.to);
        }

        self.history.undo();

        Ok(())
    }
}

/// Private implementation for this board.
impl Board
{
    /// Returns an error for when a movement check fails while moving as a particular troop.
    fn failed_as(&self, troop: Troop) -> Error
    {
        Error::new(Kind::LogicError, format!("This is not a valid {} move.", troop.long()))
    }

    /// Places a piece on the board unchecked. Assumes the point is free.
    fn insert_unchecked(&mut self, piece: &Piece, at: Point)
    {
        self.grid[at.index()] = Some(*piece);
        self.pieces[piece.index() as usize] = Some(at);
    }

    /// Removes a piece from the board unchecked. Assumes the piece is placed.
    fn remove_unchecked(&mut self, piece: &Piece)
    {
        let at = self.pieces[piece.index() as usize].unwrap();
        self.grid[at.index()] = None;
        self.pieces[piece.index() as usize] = None;
    }
}
