use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid move string.
///
/// A move string is the origin point followed by the target point, for
/// example `b7e7`. Whether the move is playable depends on a board.
pub struct MoveString(pub(in crate::xiangqi::notation) String);

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^(?<from>[a-i][0-9])(?<to>[a-i][0-9])$").unwrap();
        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        if caps["from"] == caps["to"]
        {
            let err_msg = format!("Origin and target points must not match ({}).", &caps["from"]);
            let err = Error::new(Kind::LogicError, err_msg);
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(MoveString(s.to_owned()))
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MoveString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl From<Move> for MoveString
{
    fn from(value: Move) -> Self
    {
        MoveString(format!("{}", value))
    }
}

impl From<&MoveString> for Move
{
    fn from(value: &MoveString) -> Self
    {
        // A MoveString is proof that both points parse.
        let from = value.0[0..2].parse::<Point>().unwrap();
        let to = value.0[2..4].parse::<Point>().unwrap();
        Move { from, to }
    }
}
