use crate::prelude::*;

/// Movement implementation per troop type for this board.
impl Board
{
    /// Checks whether the piece can move to the target as its own troop.
    pub(super) fn check_motion(&self, piece: &Piece, to: Point) -> Result<()>
    {
        let from = self.pieces[piece.index() as usize].unwrap();
        self.check_motion_as(piece.troop, piece.color, from, to)
    }

    /// Dispatches the movement rules over the closed set of troops.
    pub(super) fn check_motion_as(&self, troop: Troop, color: Color, from: Point, to: Point) -> Result<()>
    {
        let base = self.failed_as(troop);
        match troop
        {
            | Troop::General => self.check_general(color, from, to),
            | Troop::Advisor => self.check_advisor(color, from, to),
            | Troop::Elephant => self.check_elephant(color, from, to),
            | Troop::Horse => self.check_horse(from, to),
            | Troop::Chariot => self.check_chariot(from, to),
            | Troop::Cannon => self.check_cannon(from, to),
            | Troop::Soldier => self.check_soldier(color, from, to),
        }
        .map_err(|err| err.chain(base))
    }

    /// Counts the pieces strictly between two points sharing a rank or file.
    pub(super) fn obstacles(&self, from: Point, to: Point) -> Option<usize>
    {
        let line = from.between(to)?;
        Some(line.into_iter().filter(|at| self.occupied(*at)).count())
    }
}

impl Board
{
    #[inline]
    /// Whether or not this movement is valid as an Advisor move.
    ///
    /// One diagonal step, never leaving the palace.
    fn check_advisor(&self, color: Color, from: Point, to: Point) -> Result<()>
    {
        let (df, dr) = (to.file - from.file, to.rank - from.rank);

        if df.abs() != 1 || dr.abs() != 1
        {
            let err = Error::new(Kind::WrongShape, "The advisor steps exactly one point diagonally.".into());
            return Err(err);
        }

        if !to.in_palace(color)
        {
            let err = Error::new(Kind::OutsidePalace, format!("Point {} lies outside {}'s palace.", to, color));
            return Err(err);
        }

        Ok(())
    }

    #[inline]
    /// Whether or not this movement is valid as a Cannon move.
    ///
    /// A cannon slides like a chariot, but a capture must jump exactly one
    /// screen piece.
    fn check_cannon(&self, from: Point, to: Point) -> Result<()>
    {
        let Some(screens) = self.obstacles(from, to)
        else
        {
            let err = Error::new(Kind::WrongShape, "The cannon moves along a single rank or file.".into());
            return Err(err);
        };

        if self.occupied(to)
        {
            if screens != 1
            {
                let err = Error::new(
                    Kind::ScreenCount,
                    format!("A capture must jump exactly one screen, but found {}.", screens),
                );
                return Err(err);
            }
        }
        else if screens != 0
        {
            let err = Error::new(Kind::BlockedPath, format!("The path to {} is obstructed.", to));
            return Err(err);
        }

        Ok(())
    }

    #[inline]
    /// Whether or not this movement is valid as a Chariot move.
    fn check_chariot(&self, from: Point, to: Point) -> Result<()>
    {
        let Some(obstacles) = self.obstacles(from, to)
        else
        {
            let err = Error::new(Kind::WrongShape, "The chariot moves along a single rank or file.".into());
            return Err(err);
        };

        if obstacles != 0
        {
            let err = Error::new(Kind::BlockedPath, format!("The path to {} is obstructed.", to));
            return Err(err);
        }

        Ok(())
    }

    #[inline]
    /// Whether or not this movement is valid as an Elephant move.
    ///
    /// Two diagonal steps on its own side of the river, with an open eye at
    /// the midpoint.
    fn check_elephant(&self, color: Color, from: Point, to: Point) -> Result<()>
    {
        let (df, dr) = (to.file - from.file, to.rank - from.rank);

        if df.abs() != 2 || dr.abs() != 2
        {
            let err = Error::new(Kind::WrongShape, "The elephant steps exactly two points diagonally.".into());
            return Err(err);
        }

        if to.across_river(color)
        {
            let err = Error::new(Kind::AcrossRiver, format!("Point {} lies across the river.", to));
            return Err(err);
        }

        let eye = Point::new(from.file + df / 2, from.rank + dr / 2);
        if self.occupied(eye)
        {
            let err = Error::new(Kind::BlockedEye, format!("The elephant's eye at {} is occupied.", eye));
            return Err(err);
        }

        Ok(())
    }

    #[inline]
    /// Whether or not this movement is valid as a General move.
    ///
    /// One orthogonal step inside the palace, with one exception: the flying
    /// general capture of the opposing general along a clear shared file.
    fn check_general(&self, color: Color, from: Point, to: Point) -> Result<()>
    {
        if let Some(target) = self.piece_at(to)
        {
            if target.troop == Troop::General && target.color != color && from.file == to.file && self.obstacles(from, to) == Some(0)
            {
                return Ok(());
            }
        }

        let (df, dr) = (to.file - from.file, to.rank - from.rank);

        if df.abs() + dr.abs() != 1
        {
            let err = Error::new(Kind::WrongShape, "The general steps exactly one point orthogonally.".into());
            return Err(err);
        }

        if !to.in_palace(color)
        {
            let err = Error::new(Kind::OutsidePalace, format!("Point {} lies outside {}'s palace.", to, color));
            return Err(err);
        }

        Ok(())
    }

    #[inline]
    /// Whether or not this movement is valid as a Horse move.
    ///
    /// An L-shaped step whose leg, the adjacent point along the longer axis,
    /// must be open.
    fn check_horse(&self, from: Point, to: Point) -> Result<()>
    {
        let (df, dr) = (to.file - from.file, to.rank - from.rank);

        if !((df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1))
        {
            let err = Error::new(Kind::WrongShape, "The horse moves one point orthogonally and one point further diagonally.".into());
            return Err(err);
        }

        let leg = if df.abs() == 2
        {
            Point::new(from.file + df / 2, from.rank)
        }
        else
        {
            Point::new(from.file, from.rank + dr / 2)
        };

        if self.occupied(leg)
        {
            let err = Error::new(Kind::BlockedLeg, format!("The horse's leg at {} is occupied.", leg));
            return Err(err);
        }

        Ok(())
    }

    #[inline]
    /// Whether or not this movement is valid as a Soldier move.
    ///
    /// One point straight forward, never backward; one point sideways only
    /// once the soldier has crossed the river.
    fn check_soldier(&self, color: Color, from: Point, to: Point) -> Result<()>
    {
        let (df, dr) = (to.file - from.file, to.rank - from.rank);
        let forward = color.forward();

        if dr != 0 && dr.signum() != forward
        {
            let err = Error::new(Kind::WrongShape, "The soldier never retreats.".into());
            return Err(err);
        }

        if df == 0 && dr == forward
        {
            return Ok(());
        }

        if df.abs() == 1 && dr == 0
        {
            if !from.across_river(color)
            {
                let err = Error::new(Kind::AcrossRiver, "The soldier may not sidestep before crossing the river.".into());
                return Err(err);
            }
            return Ok(());
        }

        let err = Error::new(Kind::WrongShape, "The soldier steps exactly one point, forward or sideways.".into());
        Err(err)
    }
}
