//! Console driver for the chess set core.

mod cli;
mod config;
mod console;

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{info, warn};

use chess_set_core::{Color, GameSet, Player};

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default().filter_or("CHESS_SET_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("CHESS_SET_CONFIG_PATH").map(PathBuf::from));
    let cfg = Config::load(cfg_path.as_ref())?;

    match cli.command {
        Some(Commands::Demo) => demo(&cfg, io::stdout().lock())?,
        Some(Commands::Play) => console::run(&cfg, io::stdin().lock(), io::stdout().lock())?,
        None => Cli::command().print_help()?,
    }
    Ok(())
}

/// Draws the start position, then plays each configured move and draws the result.
fn demo<W: Write>(cfg: &Config, mut out: W) -> Result<(), Box<dyn Error>> {
    let mut game_set = GameSet::new();
    let white = Player::new(cfg.white_name.as_str(), Color::White);
    let black = Player::new(cfg.black_name.as_str(), Color::Black);

    game_set.board().draw(game_set.pieces(), &mut out)?;
    writeln!(out, "\nMaking some moves:")?;

    for scripted in &cfg.demo_moves {
        let player = match scripted.color()? {
            Color::White => &white,
            Color::Black => &black,
        };
        info!("{player} plays {} -> {}", scripted.from, scripted.to);
        if let Err(err) = player.try_make_move(&mut game_set, &scripted.from, &scripted.to) {
            warn!("{player} could not play {} -> {}: {err}", scripted.from, scripted.to);
        }
        game_set.board().draw(game_set.pieces(), &mut out)?;
    }
    Ok(())
}
