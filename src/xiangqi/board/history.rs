use crate::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
/// A played move together with everything needed to take it back.
pub struct Entry
{
    pub mv:       Move,
    pub piece:    Piece,
    pub captured: Option<Piece>,
}

impl std::fmt::Debug for Entry
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let captured = self.captured.map(|p| format!("{}", p)).unwrap_or("none".into());
        write!(f, "(move: {: <4}, piece: {}, captured: {})", format!("{}", self.mv), self.piece, captured)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A linear move history.
///
/// The history can undo moves from the present back to the start.
///
/// It can also redo moves until a new move is made at any point in the history.
pub struct History
{
    past:   Vec<Entry>,
    future: Vec<Entry>,
}

impl History
{
    /// Gets the in-order past of this history.
    pub fn get_past(&self) -> Vec<Entry>
    {
        self.past.clone()
    }

    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// The number of moves played so far.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Records a new move, which discards any undone future.
    pub fn play(&mut self, entry: Entry)
    {
        self.past.push(entry);
        self.future.clear();
    }

    /// Peeks the most recently played move.
    pub fn prev(&self) -> Option<Entry>
    {
        self.past.last().copied()
    }

    /// Moves one step forward in this line, if a redo is available.
    pub fn redo(&mut self) -> Option<Entry>
    {
        let entry = self.future.pop()?;
        self.past.push(entry);
        Some(entry)
    }

    /// Gets the turn number, which is the number of moves already played.
    pub fn turn(&self) -> u8
    {
        self.len() as u8
    }

    /// Moves one step backward in this line.
    pub fn undo(&mut self)
    {
        if let Some(entry) = self.past.pop()
        {
            self.future.push(entry);
        }
    }
}
