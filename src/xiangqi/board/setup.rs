use lazy_static::lazy_static;

use crate::prelude::*;

lazy_static! {
    /// The fixed opening layout, both sides mirrored about the river.
    pub(super) static ref OPENING: Vec<(Piece, Point)> = opening();
}

fn opening() -> Vec<(Piece, Point)>
{
    let mut placements = Vec::new();

    for color in [Color::Red, Color::Green]
    {
        let back = if color == Color::Red { 9 } else { 0 };
        let cannons = if color == Color::Red { 7 } else { 2 };
        let soldiers = if color == Color::Red { 6 } else { 3 };

        let mut place = |troop: Troop, num: u8, file: i8, rank: i8| {
            placements.push((Piece { color, troop, num }, Point::new(file, rank)));
        };

        place(Troop::General, 1, 4, back);
        place(Troop::Advisor, 1, 3, back);
        place(Troop::Advisor, 2, 5, back);
        place(Troop::Elephant, 1, 2, back);
        place(Troop::Elephant, 2, 6, back);
        place(Troop::Horse, 1, 1, back);
        place(Troop::Horse, 2, 7, back);
        place(Troop::Chariot, 1, 0, back);
        place(Troop::Chariot, 2, 8, back);
        place(Troop::Cannon, 1, 1, cannons);
        place(Troop::Cannon, 2, 7, cannons);

        for num in 1..=Troop::Soldier.extent()
        {
            place(Troop::Soldier, num, ((num - 1) * 2) as i8, soldiers);
        }
    }

    placements
}
