use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct UcciOptions
{
    #[arg(short, long, default_value = "hard")]
    /// difficulty used when bestmove gets no argument
    pub difficulty: String,

    #[arg(long, default_value_t = 2)]
    /// fixed search depth for the hard tier
    pub depth: u8,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

impl Default for UcciOptions
{
    fn default() -> Self
    {
        UcciOptions {
            difficulty: "hard".into(),
            depth:      2,
            log_level:  "info".into(),
        }
    }
}

/// The game-state owner: a line-oriented command server over one board.
///
/// The server serializes turn alternation and terminal handling; the engine
/// underneath never checks whose turn it is.
pub struct Server
{
    options: UcciOptions,
    board:   Option<Board>,
}

impl Server
{
    /// Creates a new server with the given capabilities.
    pub fn new(options: UcciOptions) -> Self
    {
        Server { options, board: None }
    }

    /// Starts the server, which runs until its input closes.
    pub fn run(&mut self) -> Result<()>
    {
        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0
            {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
    }
}

impl Server
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        let result = match cmd
        {
            | "" => Ok(()),
            | "bestmove" => self.best_move(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "redo" => self.redo(),
            | "state" => self.state(),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = self.err(&err);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    self.err(&err)
                }
            },
        }
    }

    /// Picks a move for the color to move, at the given or default difficulty.
    ///
    /// A side with no legal moves forfeits; the engine signals it by
    /// returning no move, and the server declares the opponent the winner.
    fn best_move(&mut self, args: &[&str]) -> Result<()>
    {
        let difficulty = match args.first()
        {
            | Some(s) => s.parse::<Difficulty>()?,
            | None => self.options.difficulty.parse::<Difficulty>()?,
        };

        let options = self.options.clone();
        let board = self.ensure_started()?;
        let color = board.to_move();

        match select_move_with(options, board, color, difficulty)
        {
            | Some(mv) =>
            {
                println!("{}", Into::<MoveString>::into(mv));
            }
            | None =>
            {
                log::info!("{} has no legal moves and forfeits; {} wins.", color, color.flip());
                println!("resign");
            }
        };
        Ok(())
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Board>
    {
        match self.board.as_mut()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Prints an error to the command stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        println!("{}", Difficulty::all().map(|d| d.to_string()).join(";"));
        Ok(())
    }

    /// Creates a new game, from a game string if one is given.
    fn new_game(&mut self, args: &[&str]) -> Result<()>
    {
        if !args.is_empty()
        {
            let gamestr: GameString = args.join(" ").parse::<GameString>()?;
            self.board = Some(gamestr.into());
        }
        else
        {
            self.board = Some(Board::new())
        }

        let board = self.ensure_started()?;
        println!("{}", GameString::from(board));
        Ok(())
    }

    /// Prints the ok footer to the command stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }

    /// Plays the given move on the current board, if one exists.
    fn play_move(&mut self, args: &[&str]) -> Result<()>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a MoveString.".into()));
        }

        let board = self.ensure_started_mut()?;

        if board.state() != GameState::InProgress
        {
            let err = Error::new(Kind::GameOver, format!("The game ended {}.", board.state()));
            return Err(err);
        }

        let mv = Move::from(&args.join(" ").parse::<MoveString>()?);
        board.ensure_turn(&mv)?;
        let state = board.play(&mv)?;

        match state
        {
            | GameState::InProgress =>
            {
                let defender = board.to_move();
                if board.in_check(defender)
                {
                    log::info!("{} is in check.", defender);
                }
            }
            | _ => log::info!("{}.", state),
        };

        println!("{}", GameString::from(&*board));
        Ok(())
    }

    /// Replays the most recently undone move on the current board.
    fn redo(&mut self) -> Result<()>
    {
        let board = self.ensure_started_mut()?;
        board.redo()?;

        println!("{}", GameString::from(&*board));
        Ok(())
    }

    /// Prints the current board as a game string.
    fn state(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        println!("{}", GameString::from(board));
        Ok(())
    }

    /// Undoes the given number of moves on the current board.
    fn undo(&mut self, args: &[&str]) -> Result<()>
    {
        let mut n: u8 = 1;
        match args.len()
        {
            | 0 =>
            {}
            | _ =>
            {
                let try_n = args[0].parse::<u8>();
                if let Ok(num) = try_n
                {
                    n = num;
                }
                else
                {
                    return Err(Error::for_parse::<u8>(args[0].into()));
                }
            }
        };

        let board = self.ensure_started_mut()?;
        board.undo(n)?;

        println!("{}", GameString::from(&*board));
        Ok(())
    }

    /// Gets all of the valid moves for the color to move.
    fn valid_moves(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        let moves = board.moves_for(board.to_move());

        let movelist = moves
            .iter()
            .map(|mv| format!("{}", Into::<MoveString>::into(*mv)))
            .collect::<Vec<_>>()
            .join(";");
        let movelist = if movelist.is_empty() { "resign".into() } else { movelist };

        println!("{}", movelist);
        Ok(())
    }
}
