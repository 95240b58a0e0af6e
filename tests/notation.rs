mod common;
use common::*;

#[cfg(test)]
mod notation
{
    use xiangmind::prelude::*;

    use super::*;

    #[test]
    fn empty_game()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Red[1]";
        templates::run_game(raw_string);
    }

    #[test]
    fn first_move_ok()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Green[1];b7e7";
        templates::run_game(raw_string);
    }

    #[test]
    fn full_turn_ok()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Red[2];b7e7;b2e2";
        templates::run_game(raw_string);
    }

    #[test]
    fn capture_of_the_general_ends_the_game()
    {
        let _setup = setup::setup();
        let raw_string = r"RedWins;Green[2];b7e7;a3a4;e7e0";
        templates::run_game(raw_string);
    }

    #[test]
    #[should_panic]
    fn green_may_not_open()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Green[1];a3a4";
        templates::run_game(raw_string);
    }

    #[test]
    #[should_panic]
    fn blocked_chariot_move_rejected()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Green[1];a9a5";
        templates::run_game(raw_string);
    }

    #[test]
    #[should_panic]
    fn grounded_flying_general_rejected()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Green[1];e9e0";
        templates::run_game(raw_string);
    }

    #[test]
    #[should_panic]
    fn wrong_turn_count_rejected()
    {
        let _setup = setup::setup();
        let raw_string = r"InProgress;Red[1];b7e7";
        templates::run_game(raw_string);
    }

    #[test]
    #[should_panic]
    fn wrong_state_rejected()
    {
        let _setup = setup::setup();
        let raw_string = r"RedWins;Green[1];b7e7";
        templates::run_game(raw_string);
    }

    #[test]
    #[should_panic]
    fn nonsense_rejected()
    {
        let _setup = setup::setup();
        let raw_string = r"once more unto the river";
        templates::run_game(raw_string);
    }

    #[test]
    fn game_strings_round_trip()
    {
        let _setup = setup::setup();
        let mut board = Board::new();

        board.play(&templates::mv("b7e7")).unwrap();
        board.play(&templates::mv("b2e2")).unwrap();

        let game_string = GameString::from(&board);
        assert_eq!(game_string.to_string(), "InProgress;Red[2];b7e7;b2e2");

        let replayed = Board::from(game_string.to_string().parse::<GameString>().unwrap());
        assert_eq!(replayed, board);
    }

    #[test]
    fn move_strings_carry_their_points()
    {
        let _setup = setup::setup();

        let parsed = "b7e7".parse::<MoveString>().unwrap();
        let mv = Move::from(&parsed);
        assert_eq!(mv.from, Point::new(1, 7));
        assert_eq!(mv.to, Point::new(4, 7));
        assert_eq!(MoveString::from(mv), parsed);
    }

    #[test]
    fn degenerate_move_strings_rejected()
    {
        let _setup = setup::setup();

        assert!("b7b7".parse::<MoveString>().is_err());
        assert!("b7".parse::<MoveString>().is_err());
        assert!("j7a7".parse::<MoveString>().is_err());
        assert!("b7e7x".parse::<MoveString>().is_err());
    }

    #[test]
    fn turns_pack_and_unpack()
    {
        let _setup = setup::setup();

        let opening: Turn = 0.into();
        assert_eq!(opening.color, Color::Red);
        assert_eq!(opening.turn, 1);
        assert_eq!(TurnString::from(opening).as_ref(), "Red[1]");

        let fourth: Turn = 3.into();
        assert_eq!(fourth.color, Color::Green);
        assert_eq!(fourth.turn, 2);

        let packed: u8 = fourth.into();
        assert_eq!(packed, 3);
    }

    #[test]
    fn turn_strings_validate()
    {
        let _setup = setup::setup();

        assert!("Red[1]".parse::<TurnString>().is_ok());
        assert!("Green[12]".parse::<TurnString>().is_ok());
        assert!("Red[0]".parse::<TurnString>().is_err());
        assert!("Blue[1]".parse::<TurnString>().is_err());
    }

    #[test]
    fn points_and_pieces_parse()
    {
        let _setup = setup::setup();

        assert_eq!(templates::at("a0"), Point::new(0, 0));
        assert_eq!(templates::at("i9"), Point::new(8, 9));
        assert!("j5".parse::<Point>().is_err());

        assert!("rG".parse::<Piece>().is_ok());
        assert!("rG1".parse::<Piece>().is_err());
        assert!("gC2".parse::<Piece>().is_ok());
        assert!("rS6".parse::<Piece>().is_err());
        assert!("xG".parse::<Piece>().is_err());
    }
}
