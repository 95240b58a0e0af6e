use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of Xiangqi. Red moves first.
pub enum Color
{
    Red   = 0,
    Green = 1,
}

impl Color
{
    /// Gets the next color.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::Red => Self::Green,
            | Self::Green => Self::Red,
        }
    }

    /// The rank direction this color's soldiers advance in.
    ///
    /// Red sits on the high ranks and pushes toward rank 0; Green pushes toward rank 9.
    pub fn forward(&self) -> i8
    {
        match self
        {
            | Self::Red => -1,
            | Self::Green => 1,
        }
    }

    /// Gets the color from its index.
    pub fn new(i: u8) -> Self
    {
        match i & 0x1
        {
            | 0 => Self::Red,
            | _ => Self::Green,
        }
    }

    // Returns the short name for this color, for use in piece notation.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::Red => "r",
            | Self::Green => "g",
        }
    }
}

impl std::fmt::Display for Color
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Red => "Red",
            | Self::Green => "Green",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Red" | "r" => Ok(Self::Red),
            | "Green" | "g" => Ok(Self::Green),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
