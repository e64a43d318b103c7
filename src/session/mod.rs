//! Line-oriented text session.
//!
//! Stands in for a graphical board: every command is one line on stdin and
//! every answer one or more lines on stdout. Activations are forwarded to
//! the selection state machine in [`crate::game`].
//!
//! ```text
//! activate e2
//! selected e2 pawn destinations e4 e3
//! activate e4
//! moved e2 e4 pawn
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{Board, Coord};
use crate::game::Game;

mod command;
mod error;
pub mod logger;
mod options;
mod report;

pub use command::{parse_session_command, SessionCommand};
pub use error::SessionError;
pub use options::{Notation, SessionOptions};
pub use report::{format_activation, format_destinations};

/// Result of processing a session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed successfully, with optional output
    Ok(Option<String>),
    /// Session should end
    Quit,
    /// Command not recognized
    Unknown(String),
}

/// Game state plus session settings.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: Game,
    options: SessionOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session {
            game: Game::new(),
            options: SessionOptions::new(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Process one input line. Errors are turned into an `error: ...` line.
    pub fn process_line(&mut self, line: &str) -> CommandResult {
        let Some(cmd) = parse_session_command(line) else {
            return CommandResult::Ok(None);
        };
        self.execute(cmd)
            .unwrap_or_else(|e| CommandResult::Ok(Some(format!("error: {e}"))))
    }

    pub fn execute(&mut self, cmd: SessionCommand) -> Result<CommandResult, SessionError> {
        let output = match cmd {
            SessionCommand::New => {
                self.game.reset();
                None
            }
            SessionCommand::Activate(square) => {
                let index = parse_square(square, "activate")?;
                let outcome = self.game.activate(index);
                debug!("{outcome}");
                let mut out = format_activation(&outcome, &self.options);
                if self.options.echo_board {
                    out.push('\n');
                    out.push_str(self.render().trim_end());
                }
                Some(out)
            }
            SessionCommand::Show => Some(self.render().trim_end().to_string()),
            SessionCommand::Moves(square) => {
                let index = parse_square(square, "moves")?;
                let destinations = self.game.board().legal_destinations(index);
                Some(format_destinations(destinations, &self.options))
            }
            SessionCommand::Layout(layout) => {
                let layout = layout.ok_or(SessionError::MissingArgument { command: "layout" })?;
                let board = Board::try_from_layout(&layout)?;
                self.game.load(board);
                None
            }
            SessionCommand::Options => Some(self.options.describe().join("\n")),
            SessionCommand::SetOption { name, value } => {
                self.options.apply_setoption(&name, value.as_deref())?;
                None
            }
            SessionCommand::Quit => return Ok(CommandResult::Quit),
            SessionCommand::Unknown(line) => return Ok(CommandResult::Unknown(line)),
        };
        Ok(CommandResult::Ok(output))
    }

    fn render(&self) -> String {
        self.game.board().render(self.options.coordinates)
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.process_line(&line) {
                CommandResult::Ok(Some(resp)) => {
                    for line in resp.lines() {
                        writeln!(output, "{line}")?;
                    }
                }
                CommandResult::Ok(None) => {}
                CommandResult::Quit => break,
                CommandResult::Unknown(cmd) => {
                    writeln!(output, "error: unknown command '{cmd}'")?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }
}

fn parse_square(square: Option<String>, command: &'static str) -> Result<usize, SessionError> {
    let square = square.ok_or(SessionError::MissingArgument { command })?;
    Ok(Coord::parse(&square)?.index())
}

/// Run a session on stdin/stdout.
pub fn run_session_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn out(result: CommandResult) -> String {
        match result {
            CommandResult::Ok(Some(s)) => s,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn test_select_then_move() {
        let mut session = Session::new();
        assert_eq!(
            out(session.process_line("activate e2")),
            "selected e2 pawn destinations e4 e3"
        );
        assert_eq!(out(session.process_line("click 36")), "moved e2 e4 pawn");
        assert_eq!(session.game().board().kind_at(36), PieceKind::Pawn);
    }

    #[test]
    fn test_errors_become_lines() {
        let mut session = Session::new();
        assert!(out(session.process_line("activate z9")).starts_with("error: "));
        assert!(out(session.process_line("activate 64")).contains("64"));
        assert!(out(session.process_line("activate")).contains("needs an argument"));
        assert!(out(session.process_line("layout 8/8")).starts_with("error: "));
    }

    #[test]
    fn test_moves_does_not_change_state() {
        let mut session = Session::new();
        assert_eq!(out(session.process_line("moves g1")), "destinations f3 h3");
        assert_eq!(session.game().board(), &Board::new());
        assert_eq!(out(session.process_line("moves e4")), "destinations none");
    }

    #[test]
    fn test_layout_and_show() {
        let mut session = Session::new();
        session.process_line("setoption name Coordinates value false");
        assert_eq!(
            session.process_line("layout R7/8/8/8/8/8/8/8"),
            CommandResult::Ok(None)
        );
        let grid = out(session.process_line("show"));
        assert_eq!(grid.lines().nth(1), Some("| R | . | . | . | . | . | . | . |"));
        assert_eq!(out(session.process_line("moves a8")).split(' ').count(), 15);
    }

    #[test]
    fn test_echo_board() {
        let mut session = Session::new();
        session.process_line("setoption name Echo Board value on");
        let text = out(session.process_line("activate g1"));
        assert!(text.starts_with("selected g1 knight"));
        assert!(text.contains("| * |"));
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut session = Session::new();
        assert_eq!(session.process_line("quit"), CommandResult::Quit);
        assert_eq!(
            session.process_line("castle"),
            CommandResult::Unknown("castle".to_string())
        );
        assert_eq!(session.process_line(""), CommandResult::Ok(None));
    }

    #[test]
    fn test_run_stops_at_quit() {
        let input = b"activate b1\nactivate c3\nquit\nactivate e2\n";
        let mut output = Vec::new();
        Session::new().run(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["selected b1 knight destinations a3 c3", "moved b1 c3 knight"]
        );
    }
}
