use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The strength tiers of the computer player.
pub enum Difficulty
{
    Easy,
    Medium,
    Hard,
}

impl Difficulty
{
    /// Returns the difficulties in ascending order of strength.
    pub fn all() -> [Difficulty; 3]
    {
        [Self::Easy, Self::Medium, Self::Hard]
    }
}

impl std::fmt::Display for Difficulty
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::Easy => "easy",
            | Self::Medium => "medium",
            | Self::Hard => "hard",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Difficulty
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "easy" => Ok(Self::Easy),
            | "medium" => Ok(Self::Medium),
            | "hard" => Ok(Self::Hard),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
