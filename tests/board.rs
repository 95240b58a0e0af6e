mod common;
use common::*;

#[cfg(test)]
mod board
{
    use xiangmind::prelude::*;

    use super::*;

    #[test]
    fn opening_layout()
    {
        let _setup = setup::setup();
        let board = Board::new();

        let placed = (0..9)
            .flat_map(|file| (0..10).map(move |rank| Point::new(file, rank)))
            .filter(|at| board.occupied(*at))
            .count();
        assert_eq!(placed, 32);

        assert_eq!(board.general(Color::Red), Some(templates::at("e9")));
        assert_eq!(board.general(Color::Green), Some(templates::at("e0")));

        assert_eq!(board.piece_at(templates::at("a9")), Some("rR1".parse::<Piece>().unwrap()));
        assert_eq!(board.piece_at(templates::at("b7")), Some("rC1".parse::<Piece>().unwrap()));
        assert_eq!(board.piece_at(templates::at("e6")), Some("rS3".parse::<Piece>().unwrap()));
        assert_eq!(board.piece_at(templates::at("i0")), Some("gR2".parse::<Piece>().unwrap()));
        assert!(board.empty(templates::at("e5")));
    }

    #[test]
    fn red_opens_and_turns_alternate()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        assert_eq!(board.to_move(), Color::Red);
        board.play(&templates::mv("b7e7")).unwrap();
        assert_eq!(board.to_move(), Color::Green);
        board.play(&templates::mv("b2e2")).unwrap();
        assert_eq!(board.to_move(), Color::Red);
        assert_eq!(board.turn(), 2);
    }

    #[test]
    fn play_relocates_and_undo_restores()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        board.play(&templates::mv("b7e7")).unwrap();
        assert!(board.empty(templates::at("b7")));
        assert_eq!(board.piece_at(templates::at("e7")), Some("rC1".parse::<Piece>().unwrap()));

        board.undo(1).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn captures_are_atomic_and_undo_exactly()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        board.play(&templates::mv("b7e7")).unwrap();
        board.play(&templates::mv("a3a4")).unwrap();

        // The cannon takes the green general over the e3 screen.
        let state = board.play(&templates::mv("e7e0")).unwrap();
        assert_eq!(state, GameState::RedWins);
        assert_eq!(board.winner(), Some(Color::Red));
        assert_eq!(board.piece_at(templates::at("e0")), Some("rC1".parse::<Piece>().unwrap()));

        board.undo(1).unwrap();
        assert_eq!(board.winner(), None);
        assert_eq!(board.piece_at(templates::at("e0")), Some("gG".parse::<Piece>().unwrap()));
        assert_eq!(board.piece_at(templates::at("e7")), Some("rC1".parse::<Piece>().unwrap()));
    }

    #[test]
    fn redo_replays_the_undone_future()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        board.play(&templates::mv("b7e7")).unwrap();
        board.play(&templates::mv("a3a4")).unwrap();
        board.play(&templates::mv("e7e0")).unwrap();

        board.undo(2).unwrap();
        board.redo().unwrap();
        let state = board.redo().unwrap();

        assert_eq!(state, GameState::RedWins);
        assert_eq!(board.piece_at(templates::at("e0")), Some("rC1".parse::<Piece>().unwrap()));
    }

    #[test]
    fn a_new_move_discards_the_future()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        board.play(&templates::mv("b7e7")).unwrap();
        board.undo(1).unwrap();
        board.play(&templates::mv("h7e7")).unwrap();

        let redo = board.redo();
        assert!(redo.is_err());
    }

    #[test]
    fn undo_beyond_the_start_is_refused()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        let err = board.undo(1).unwrap_err();
        assert_eq!(err.kind, Kind::TooManyUndos);
    }

    #[test]
    fn winner_appears_the_instant_a_general_is_missing()
    {
        let _setup = setup::setup();

        let red_win = templates::board(&[("rG", "e9"), ("rR1", "a0"), ("gR1", "h5")]);
        assert_eq!(red_win.winner(), Some(Color::Red));
        assert_eq!(red_win.state(), GameState::RedWins);

        let green_win = templates::board(&[("gG", "e0"), ("gS1", "c4")]);
        assert_eq!(green_win.winner(), Some(Color::Green));
        assert_eq!(green_win.state(), GameState::GreenWins);

        let in_progress = templates::board(&[("rG", "e9"), ("gG", "d0")]);
        assert_eq!(in_progress.winner(), None);
        assert_eq!(in_progress.state(), GameState::InProgress);
    }

    #[test]
    fn check_by_a_chariot_down_the_file()
    {
        let _setup = setup::setup();

        let open = templates::board(&[("rG", "e9"), ("gG", "d0"), ("gR1", "e5")]);
        assert!(open.in_check(Color::Red));
        assert!(!open.in_check(Color::Green));

        let shielded = templates::board(&[("rG", "e9"), ("gG", "d0"), ("gR1", "e5"), ("rS1", "e7")]);
        assert!(!shielded.in_check(Color::Red));
    }

    #[test]
    fn facing_generals_check_each_other()
    {
        let _setup = setup::setup();
        let board = templates::board(&[("rG", "e9"), ("gG", "e0")]);

        assert!(board.in_check(Color::Red));
        assert!(board.in_check(Color::Green));
    }

    #[test]
    fn check_without_a_general_reports_false()
    {
        let _setup = setup::setup();
        let board = templates::board(&[("gR1", "e5")]);

        assert!(!board.in_check(Color::Red));
    }

    #[test]
    fn opening_board_is_quiet()
    {
        let _setup = setup::setup();
        let board = Board::new();

        assert!(!board.in_check(Color::Red));
        assert!(!board.in_check(Color::Green));
        assert_eq!(board.state(), GameState::InProgress);
    }

    #[test]
    fn enumeration_is_fresh_and_restartable()
    {
        let _setup = setup::setup();
        let board = Board::new();

        let first = board.moves_for(Color::Red);
        let second = board.moves_for(Color::Red);
        assert_eq!(first, second);
        assert!(!first.is_empty());

        // Every enumerated move passes the legality checker it came from.
        for mv in &first
        {
            assert!(board.is_legal(mv.from, mv.to));
        }
    }

    #[test]
    fn duplicate_placements_are_refused()
    {
        let _setup = setup::setup();

        let twice = Board::from_pieces(vec![
            ("rG".parse::<Piece>().unwrap(), "e9".parse::<Point>().unwrap()),
            ("rG".parse::<Piece>().unwrap(), "e8".parse::<Point>().unwrap()),
        ]);
        assert!(twice.is_err());

        let stacked = Board::from_pieces(vec![
            ("rG".parse::<Piece>().unwrap(), "e9".parse::<Point>().unwrap()),
            ("gG".parse::<Piece>().unwrap(), "e9".parse::<Point>().unwrap()),
        ]);
        assert!(stacked.is_err());
    }
}
