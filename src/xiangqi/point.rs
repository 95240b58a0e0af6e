use regex::Regex;

use crate::prelude::*;

pub mod consts
{
    /// The board is 9 files wide and 10 ranks tall.
    pub const FILES: i8 = 9;
    pub const RANKS: i8 = 10;
    pub const SIZE: usize = (FILES as usize) * (RANKS as usize);
}

use consts::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// A point on the board.
///
/// Files run 0 to 8 (printed `a` to `i`), ranks 0 to 9. Green's back rank is
/// rank 0 and Red's back rank is rank 9; the river lies between ranks 4 and 5.
pub struct Point
{
    pub file: i8,
    pub rank: i8,
}

impl Point
{
    /// Whether this point lies on the far side of the river for the given color.
    pub fn across_river(&self, color: Color) -> bool
    {
        match color
        {
            | Color::Red => self.rank <= 4,
            | Color::Green => self.rank >= 5,
        }
    }

    /// Returns the points strictly between this point and the other, provided
    /// the two share a rank or a file.
    pub fn between(&self, other: Point) -> Option<Vec<Point>>
    {
        if self.file != other.file && self.rank != other.rank
        {
            return None;
        }

        let df = (other.file - self.file).signum();
        let dr = (other.rank - self.rank).signum();

        let mut points = Vec::new();
        let mut cursor = Point::new(self.file + df, self.rank + dr);
        while cursor != other
        {
            points.push(cursor);
            cursor = Point::new(cursor.file + df, cursor.rank + dr);
        }

        Some(points)
    }

    /// Gets the index of this point, in rank-major order.
    ///
    /// Only meaningful for points on the board.
    pub fn index(&self) -> usize
    {
        (self.rank as usize) * (FILES as usize) + (self.file as usize)
    }

    /// Whether this point lies within the given color's palace.
    pub fn in_palace(&self, color: Color) -> bool
    {
        if self.file < 3 || self.file > 5
        {
            return false;
        }

        match color
        {
            | Color::Red => (7..=9).contains(&self.rank),
            | Color::Green => (0..=2).contains(&self.rank),
        }
    }

    /// Creates a new point, which might not be on the board.
    pub const fn new(file: i8, rank: i8) -> Point
    {
        Point { file, rank }
    }

    /// Whether this point lies on the board.
    pub fn on_board(&self) -> bool
    {
        (0..FILES).contains(&self.file) && (0..RANKS).contains(&self.rank)
    }
}

impl std::fmt::Display for Point
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        // Points off the board have no coordinate name, but they do flow
        // through error messages, so print them somehow.
        if self.on_board()
        {
            write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank)
        }
        else
        {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

impl FromStr for Point
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^(?<file>[a-i])(?<rank>[0-9])$").unwrap();
        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let file = (caps["file"].as_bytes()[0] - b'a') as i8;
        let rank = (caps["rank"].as_bytes()[0] - b'0') as i8;

        Ok(Point { file, rank })
    }
}
