use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a valid (checked) turn string.
///
/// A turn string is of the form `Color[Turn]`; for example, `Red[1]`.
pub struct TurnString(String);

impl std::fmt::Display for TurnString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TurnString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let turn = s.parse::<Turn>()?;
        Ok(turn.into())
    }
}

impl AsRef<str> for TurnString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents a plied turn in Xiangqi.
///
/// The turn number only increments once both colors have made a move on the
/// previous number. Red opens the game.
pub struct Turn
{
    pub color: Color,
    pub turn:  u8,
}

impl From<u8> for Turn
{
    fn from(value: u8) -> Self
    {
        let color = Color::new(value & 0x1);
        let turn = (value >> 1) + 1;
        Turn { color, turn }
    }
}

impl From<Turn> for u8
{
    fn from(value: Turn) -> u8
    {
        ((value.turn - 1) << 1) + (value.color as u8)
    }
}

impl From<Turn> for TurnString
{
    fn from(value: Turn) -> TurnString
    {
        TurnString(format!("{}[{}]", value.color, value.turn))
    }
}

impl FromStr for Turn
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^(?<color>Red|Green)\[(?<turn>[0-9]+)\]$").unwrap();

        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let color = caps["color"].parse::<Color>();
        let turn = caps["turn"].parse::<u8>();

        let Ok(color) = color
        else
        {
            let err = color.err().unwrap();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let Ok(turn) = turn
        else
        {
            let err = Error::for_parse::<u8>(caps["turn"].into());
            return Err(err.chain_parse::<Self>(s.into()));
        };

        if turn == 0
        {
            let turn_error = Error::new(Kind::LogicError, "Turn number cannot be 0.".into());
            return Err(turn_error.chain_parse::<Self>(s.into()));
        }

        Ok(Turn { color, turn })
    }
}
