use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The types of pieces in Xiangqi.
pub enum Troop
{
    General  = 0,
    Advisor  = 1,
    Elephant = 2,
    Horse    = 3,
    Chariot  = 4,
    Cannon   = 5,
    Soldier  = 6,
}

impl std::fmt::Display for Troop
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::General => "G",
            | Self::Advisor => "A",
            | Self::Elephant => "E",
            | Self::Horse => "H",
            | Self::Chariot => "R",
            | Self::Cannon => "C",
            | Self::Soldier => "S",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Troop
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "G" => Ok(Self::General),
            | "A" => Ok(Self::Advisor),
            | "E" => Ok(Self::Elephant),
            | "H" => Ok(Self::Horse),
            | "R" => Ok(Self::Chariot),
            | "C" => Ok(Self::Cannon),
            | "S" => Ok(Self::Soldier),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

impl From<u8> for Troop
{
    fn from(value: u8) -> Self
    {
        let v = value.clamp(0, piece::consts::PER_SIDE - 1);
        Troop::all().into_iter().rev().find(|troop| troop.offset() <= v).unwrap()
    }
}

impl Troop
{
    /// Returns the troops in offset order.
    pub fn all() -> [Troop; 7]
    {
        [
            Self::General,
            Self::Advisor,
            Self::Elephant,
            Self::Horse,
            Self::Chariot,
            Self::Cannon,
            Self::Soldier,
        ]
    }

    /// Gets the extent of this troop, i.e. how many of it each side fields.
    pub fn extent(&self) -> u8
    {
        match self
        {
            | Self::General => 1,
            | Self::Advisor => 2,
            | Self::Elephant => 2,
            | Self::Horse => 2,
            | Self::Chariot => 2,
            | Self::Cannon => 2,
            | Self::Soldier => 5,
        }
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::General => "General",
            | Self::Advisor => "Advisor",
            | Self::Elephant => "Elephant",
            | Self::Horse => "Horse",
            | Self::Chariot => "Chariot",
            | Self::Cannon => "Cannon",
            | Self::Soldier => "Soldier",
        }
    }

    /// Gets the index for this troop.
    pub fn offset(&self) -> u8
    {
        match self
        {
            | Self::General => 0,
            | Self::Advisor => 1,
            | Self::Elephant => 3,
            | Self::Horse => 5,
            | Self::Chariot => 7,
            | Self::Cannon => 9,
            | Self::Soldier => 11,
        }
    }

    /// Whether or not this troop is unique on its side.
    pub fn unique(&self) -> bool
    {
        matches!(self, Self::General)
    }
}
