use crate::prelude::*;

impl Board
{
    #[inline]
    /// Ensures the target point differs from the piece's current point.
    pub(super) fn ensure_departs(&self, piece: &Piece, to: Point) -> Result<()>
    {
        let at = self.pieces[piece.index() as usize].unwrap();
        if at == to
        {
            let err = Error::new(Kind::InvalidMove, format!("Piece {} is already at {}.", piece, to));
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    /// Ensures the target point holds no piece of the mover's own color.
    pub(super) fn ensure_no_friendly_fire(&self, color: Color, to: Point) -> Result<()>
    {
        if let Some(occupant) = self.piece_at(to)
        {
            if occupant.color == color
            {
                let err = Error::new(Kind::FriendlyFire, format!("Point {} holds the friendly piece {}.", to, occupant));
                return Err(err);
            }
        }
        Ok(())
    }

    #[inline]
    /// Ensures the target point lies on the board.
    ///
    /// Every movement rule runs after this one, so rule code never sees an
    /// out-of-bounds point.
    pub(super) fn ensure_on_board(&self, to: Point) -> Result<()>
    {
        if !to.on_board()
        {
            let err = Error::new(Kind::OffBoard, format!("Point {} is not on the board.", to));
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    /// Ensures the piece is on the board.
    pub(super) fn ensure_placed(&self, piece: &Piece) -> Result<()>
    {
        if !self.placed(piece)
        {
            Err(Error::new(Kind::InvalidState, format!("Piece {} is not on the board.", piece)))
        }
        else
        {
            Ok(())
        }
    }

    #[inline]
    /// Ensures a move belongs to the color whose turn it is.
    ///
    /// The movement rules never consult the turn; surfaces that own a game
    /// (the command server, game-string replay) opt into this check before
    /// applying a move.
    pub fn ensure_turn(&self, mv: &Move) -> Result<()>
    {
        let Some(piece) = self.piece_at(mv.from)
        else
        {
            return Err(Error::new(Kind::UnknownPiece, format!("No piece at {}.", mv.from)));
        };

        let to_move = self.to_move();
        if piece.color != to_move
        {
            let err = Error::new(Kind::WrongTurn, format!("Cannot move a {} piece on {}'s turn.", piece.color, to_move));
            return Err(err);
        }
        Ok(())
    }
}
