mod common;
use common::*;

#[cfg(test)]
mod agent
{
    use xiangmind::prelude::*;

    use super::*;

    #[test]
    fn easy_returns_the_only_move_every_time()
    {
        let _setup = setup::setup();

        // A lone soldier on the back rank can only sidestep one way.
        let board = templates::board(&[("rS1", "a0")]);
        let only = templates::mv("a0b0");

        assert_eq!(board.moves_for(Color::Red), vec![only]);

        for _ in 0..1000
        {
            assert_eq!(select_move(&board, Color::Red, Difficulty::Easy), Some(only));
        }
    }

    #[test]
    fn easy_picks_a_legal_move()
    {
        let _setup = setup::setup();
        let board = Board::new();

        for _ in 0..100
        {
            let mv = select_move(&board, Color::Red, Difficulty::Easy).unwrap();
            assert!(board.is_legal(mv.from, mv.to));
        }
    }

    #[test]
    fn no_legal_moves_means_no_move_at_any_tier()
    {
        let _setup = setup::setup();

        // A stranded advisor can never re-enter its palace, so it can never move.
        let board = templates::board(&[("rA1", "a0")]);
        assert!(board.moves_for(Color::Red).is_empty());

        for difficulty in Difficulty::all()
        {
            assert_eq!(select_move(&board, Color::Red, difficulty), None);
        }
    }

    #[test]
    fn medium_returns_the_only_move_every_time()
    {
        let _setup = setup::setup();
        let board = templates::board(&[("rS1", "a0")]);
        let only = templates::mv("a0b0");

        for _ in 0..100
        {
            assert_eq!(select_move(&board, Color::Red, Difficulty::Medium), Some(only));
        }
    }

    #[test]
    fn medium_always_lands_in_the_capture_heavy_top()
    {
        let _setup = setup::setup();

        // Three captures outscore every quiet slide, so the top three are
        // exactly the captures.
        let board = templates::board(&[("rR1", "e5"), ("gR1", "e7"), ("gR2", "e3"), ("gC1", "b5")]);
        let captures = [templates::at("e7"), templates::at("e3"), templates::at("b5")];

        for _ in 0..100
        {
            let mv = select_move(&board, Color::Red, Difficulty::Medium).unwrap();
            assert!(captures.contains(&mv.to), "expected a capture, got {}", mv);
        }
    }

    #[test]
    fn hard_takes_the_general_when_it_can()
    {
        let _setup = setup::setup();

        let board = templates::board(&[("rG", "e9"), ("gG", "d0"), ("rR1", "a0")]);
        let winning = templates::mv("a0d0");

        for _ in 0..20
        {
            assert_eq!(select_move(&board, Color::Red, Difficulty::Hard), Some(winning));
        }
    }

    #[test]
    fn hard_prefers_the_win_over_any_material()
    {
        let _setup = setup::setup();

        // The chariot can win a whole chariot to the left, or the game to the right.
        let board = templates::board(&[("rG", "d9"), ("gG", "f0"), ("rR1", "a0"), ("gR1", "a5")]);
        let winning = templates::mv("a0f0");

        for _ in 0..20
        {
            assert_eq!(select_move(&board, Color::Red, Difficulty::Hard), Some(winning));
        }
    }

    #[test]
    fn hard_picks_a_legal_move_in_the_opening()
    {
        let _setup = setup::setup();
        let board = Board::new();

        let mv = select_move(&board, Color::Red, Difficulty::Hard).unwrap();
        assert!(board.is_legal(mv.from, mv.to));
    }

    #[test]
    fn search_leaves_the_board_untouched()
    {
        let _setup = setup::setup();
        let board = Board::new();

        let snapshot = board.clone();
        let _ = select_move(&board, Color::Red, Difficulty::Hard);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn material_evaluation_is_antisymmetric()
    {
        let _setup = setup::setup();

        let board = templates::board(&[("rG", "e9"), ("gG", "e0"), ("rR1", "a0"), ("gS1", "g4")]);

        // Red holds a chariot against a soldier.
        assert_eq!(scalars::evaluate(&board, Color::Red), 90 - 10);
        assert_eq!(scalars::evaluate(&board, Color::Green), 10 - 90);

        let level = Board::new();
        assert_eq!(scalars::evaluate(&level, Color::Red), 0);
        assert_eq!(scalars::evaluate(&level, Color::Green), 0);
    }

    #[test]
    fn difficulties_parse_from_the_cli_surface()
    {
        let _setup = setup::setup();

        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
