use crate::prelude::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board {{ {:?}, {:?} }}", self.history(), self.to_move())
    }

    /// Pretty print: the grid as seen from Red's side, Green's back rank on top.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        for rank in 0..point::consts::RANKS
        {
            write!(f, "{} ", rank)?;
            for file in 0..point::consts::FILES
            {
                match self.piece_at(Point::new(file, rank))
                {
                    | Some(piece) => write!(f, " {}{}", piece.color.short(), piece.troop)?,
                    | None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for file in 0..point::consts::FILES
        {
            write!(f, "  {}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)?;

        write!(f, "{} to move", self.to_move())
    }
}
