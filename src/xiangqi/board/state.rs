use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    InProgress,
    RedWins,
    GreenWins,
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::InProgress => "InProgress",
            | Self::RedWins => "RedWins",
            | Self::GreenWins => "GreenWins",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "InProgress" => Ok(Self::InProgress),
            | "RedWins" => Ok(Self::RedWins),
            | "GreenWins" => Ok(Self::GreenWins),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

impl Board
{
    /// Gets the state of the board.
    pub fn state(&self) -> GameState
    {
        match self.winner()
        {
            | Some(Color::Red) => GameState::RedWins,
            | Some(Color::Green) => GameState::GreenWins,
            | None => GameState::InProgress,
        }
    }

    /// Returns the winning color, if either general has been captured.
    ///
    /// Capture of the general is the sole terminal condition; a side with no
    /// legal moves but a living general is not detected here.
    pub fn winner(&self) -> Option<Color>
    {
        if self.general(Color::Red).is_none()
        {
            return Some(Color::Green);
        }
        if self.general(Color::Green).is_none()
        {
            return Some(Color::Red);
        }
        None
    }
}
