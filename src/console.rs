//! Interactive console for moving pieces on a chess set.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use chess_set_core::{Color, GameSet, Player};

use crate::config::Config;

#[derive(Debug, Eq, PartialEq)]
enum InputKind {
    Exit,
    NewGame,
    Help,
    Board,
    Error,
    Move(Color, String, String),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            ["exit"] | ["quit"] => Self::Exit,
            ["new"] | ["ng"] => Self::NewGame,
            ["help"] => Self::Help,
            ["board"] => Self::Board,
            [color, from, to] => match color.parse::<Color>() {
                Ok(color) => Self::Move(color, from.to_string(), to.to_string()),
                Err(_) => Self::Error,
            },
            _ => Self::Error,
        }
    }
}

const HELP: &str = "\
Commands:
<color> <from> <to> => Move the piece on <from> to <to>, e.g. `w e2 e4` or `black e7 e5`.
board => Print the board.
new | ng => Put every piece back on its starting square.
help => Print this help text.
exit | quit => End the console.
";

/// Reads commands from `input` until `exit` or end of input, writing the board
/// and the outcome of each command to `out`.
pub fn run<R: BufRead, W: Write>(cfg: &Config, mut input: R, mut out: W) -> io::Result<()> {
    let white = Player::new(cfg.white_name.as_str(), Color::White);
    let black = Player::new(cfg.black_name.as_str(), Color::Black);
    let mut game_set = GameSet::new();
    let mut line = String::new();

    writeln!(out, "{game_set}")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match InputKind::from(line.as_str()) {
            InputKind::Exit => break,
            InputKind::NewGame => {
                game_set = GameSet::new();
                info!("starting from the initial position");
                writeln!(out, "{game_set}")?;
            }
            InputKind::Help => write!(out, "{HELP}")?,
            InputKind::Board => writeln!(out, "{game_set}")?,
            InputKind::Error => {
                writeln!(out, "Invalid command: {}", line.trim())?;
            }
            InputKind::Move(color, from, to) => {
                let player = match color {
                    Color::White => &white,
                    Color::Black => &black,
                };
                match player.try_make_move(&mut game_set, &from, &to) {
                    Ok(()) => {
                        writeln!(out, "{player} moved {from} -> {to}.")?;
                        writeln!(out, "{game_set}")?;
                    }
                    Err(err) => {
                        warn!("{player} move {from} -> {to} failed: {err}");
                        writeln!(out, "Move {from} -> {to} failed: {err}. No action taken.")?;
                    }
                }
            }
        }
    }
    Ok(())
}
