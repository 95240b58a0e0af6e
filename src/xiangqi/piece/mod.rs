use crate::prelude::*;

mod color;
mod troop;

pub use color::Color;
pub use troop::Troop;

pub mod consts
{
    pub const PER_SIDE: u8 = 16;
    pub const COUNT: u8 = 2 * PER_SIDE;
}
use consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece in the game of Xiangqi.
///
/// Pieces have a color, a troop type, and a numeric discriminator.
///
/// For example, the second red chariot is rR2.
pub struct Piece
{
    pub color: Color,
    pub troop: Troop,
    pub num:   u8,
}

impl Piece
{
    /// Gets the index of this piece, in color-troop-num order.
    ///
    /// The index is stable for the whole game, so it doubles as the piece's identity.
    pub fn index(&self) -> u16
    {
        (PER_SIDE * (self.color as u8) + self.troop.offset() + (self.num - 1)) as u16
    }
}

impl FromStr for Piece
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        if s.len() < 2 || s.len() > 3
        {
            let err = Error::new(Kind::ParseError, format!("Invalid length (expected 2 or 3, found {}).", s.len()));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let color = s[0..=0].parse::<Color>();
        let troop = s[1..=1].parse::<Troop>();

        let Ok(color) = color
        else
        {
            let err = color.unwrap_err();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let Ok(troop) = troop
        else
        {
            let err = troop.unwrap_err();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let num = if troop.unique()
        {
            if s.len() > 2
            {
                let err = Error::new(Kind::ParseError, "Unique troops should have no number.".into());
                return Err(err.chain_parse::<Self>(s.into()));
            }
            1
        }
        else
        {
            if s.len() < 3
            {
                let err = Error::new(Kind::ParseError, "Non-unique troops must have a number.".into());
                return Err(err.chain_parse::<Self>(s.into()));
            }

            let num_parse = s[2..=2].parse::<u8>();

            let Ok(found_num) = num_parse
            else
            {
                let err = Error::for_parse::<u8>(s[2..=2].into());
                return Err(err.chain_parse::<Self>(s.into()));
            };

            if !(1..=troop.extent()).contains(&found_num)
            {
                let err_msg = format!(
                    "Invalid number for {} (expected {} to {}, found {}).",
                    troop.long(),
                    1,
                    troop.extent(),
                    found_num
                );

                let err = Error::new(Kind::MismatchError, err_msg);
                return Err(err.chain_parse::<Self>(s.into()));
            }
            found_num
        };

        Ok(Piece { color, troop, num })
    }
}

impl From<u8> for Piece
{
    fn from(value: u8) -> Self
    {
        // Find the color, and regularize the index to the troop-num range.

        let mut v = value.clamp(0, COUNT - 1);
        let color = if v < PER_SIDE
        {
            Color::Red
        }
        else
        {
            v -= PER_SIDE;
            Color::Green
        };
        let v = v;

        // Find the troop from the given value.

        let troop: Troop = v.into();
        let num = v - troop.offset() + 1;

        Piece { color, troop, num }
    }
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.troop.unique()
        {
            | true => write!(f, "{}{}", self.color.short(), self.troop),
            | false => write!(f, "{}{}{}", self.color.short(), self.troop, self.num),
        }
    }
}
