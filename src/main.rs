//! Command-line front end for the chess legality engine.
//!
//! Reads a game snapshot in the server's JSON shape (or starts from the
//! standard position) and answers rules queries against it.

use anyhow::{bail, Context, Result};
use chess_legality::core::settings_persistence::{load_settings, save_to, settings_path};
use chess_legality::game::components::{GameSnapshot, PieceColor, Square, BOARD_SIZE};
use chess_legality::game::resources::check_banner;
use chess_legality::game::rules::{checkers, in_check, legal_moves, legal_moves_for, simulate, PieceSet};
use chess_legality::game::session::BoardSession;
use chess_legality::game::types::Move;
use chess_legality::networking::{spawn_ai_flag_poller, spawn_snapshot_poller, LocalAuthority};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use web_time::Instant;

/// Chess move legality and check detection.
#[derive(Parser)]
#[command(name = "chess-legality")]
#[command(about = "Query legal moves and check status for a chess game snapshot")]
struct Cli {
    /// Game snapshot JSON file. Defaults to the standard starting position.
    #[arg(short, long, global = true)]
    game: Option<PathBuf>,

    /// Session settings file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board.
    Display,

    /// List legal destinations for the piece on a square.
    Moves { row: u8, col: u8 },

    /// Report whether a side is in check.
    Check {
        /// Side to test. Defaults to the player to move.
        #[arg(short, long)]
        color: Option<ColorArg>,
    },

    /// Apply a move hypothetically and print the result.
    Simulate {
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    },

    /// Print the check or game-over banner for the snapshot.
    Banner,

    /// List every legal move for a side.
    AllMoves {
        /// Side to list. Defaults to the player to move.
        #[arg(short, long)]
        color: Option<ColorArg>,
    },

    /// Play clicks ("row,col") against an in-process server.
    Play {
        clicks: Vec<String>,
    },

    /// Print the effective session settings.
    Settings {
        /// Write the effective settings back to the settings file.
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    White,
    Black,
}

impl From<ColorArg> for PieceColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::White => PieceColor::White,
            ColorArg::Black => PieceColor::Black,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let game = load_game(cli.game.as_ref())?;

    match cli.command {
        Commands::Display => print_board(&game.pieces),
        Commands::Moves { row, col } => {
            let from = Square::new(row, col);
            match game.pieces.piece_at(from) {
                Some(piece) => println!("{:?} {:?} at {}", piece.color, piece.piece_type, from),
                None => println!("No piece at {}", from),
            }
            for to in legal_moves(&game.pieces, from) {
                println!("  {}", to);
            }
        }
        Commands::Check { color } => {
            let color = color.map(PieceColor::from).unwrap_or(game.current_player);
            if in_check(&game.pieces, color) {
                let attackers: Vec<String> = checkers(&game.pieces, color)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("{} is in check from {}", color, attackers.join(", "));
            } else {
                println!("{} is not in check", color);
            }
        }
        Commands::Simulate {
            from_row,
            from_col,
            to_row,
            to_col,
        } => {
            let mv = Move::new(Square::new(from_row, from_col), Square::new(to_row, to_col));
            let after = simulate(&game.pieces, mv).with_context(|| format!("Cannot simulate {}", mv))?;
            print_board(&after);
            for color in [PieceColor::White, PieceColor::Black] {
                if in_check(&after, color) {
                    println!("{} would be in check", color);
                }
            }
        }
        Commands::Banner => match check_banner(&game) {
            Some(banner) => println!("{}", banner),
            None => println!("(no banner)"),
        },
        Commands::AllMoves { color } => {
            let color = color.map(PieceColor::from).unwrap_or(game.current_player);
            let moves = legal_moves_for(&game.pieces, color);
            println!("{} has {} legal moves", color, moves.len());
            for mv in moves {
                println!("  {}", mv);
            }
        }
        Commands::Play { clicks } => play(game, &clicks, cli.settings).await?,
        Commands::Settings { save } => {
            let settings = load_settings(cli.settings.as_deref());
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if save {
                let path = cli.settings.unwrap_or_else(settings_path);
                save_to(&settings, &path)?;
            }
        }
    }

    Ok(())
}

fn load_game(path: Option<&PathBuf>) -> Result<GameSnapshot> {
    let Some(path) = path else {
        return Ok(GameSnapshot::new("local"));
    };

    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read game file {:?}", path))?;
    let game: GameSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse game file {:?}", path))?;
    info!("Loaded game {} with {} pieces", game.id, game.pieces.len());
    Ok(game)
}

fn parse_click(click: &str) -> Result<Square> {
    let Some((row, col)) = click.split_once(',') else {
        bail!("Expected \"row,col\", got {:?}", click);
    };
    let square = Square::new(row.trim().parse()?, col.trim().parse()?);
    if !square.is_on_board() {
        bail!("Square {} is off the board", square);
    }
    Ok(square)
}

async fn play(game: GameSnapshot, clicks: &[String], settings: Option<PathBuf>) -> Result<()> {
    let settings = load_settings(settings.as_deref());
    let authority = Arc::new(LocalAuthority::new());
    let game_id = game.id.clone();
    let ai_game = game.is_ai_game();
    authority.insert_game(game).await;

    let (mut snapshots, _snapshot_task) =
        spawn_snapshot_poller(authority.clone(), game_id.clone(), settings.game_poll_interval());
    let (mut ai_flag, _ai_task) = spawn_ai_flag_poller(
        authority.clone(),
        game_id.clone(),
        settings.ai_flag_poll_interval(),
        ai_game,
    );

    let mut session = BoardSession::open(authority, &game_id, settings.ai_thinking_grace()).await?;

    for click in clicks {
        session.sync(&mut snapshots, &mut ai_flag, Instant::now());
        let square = parse_click(click)?;
        match session.click(square).await {
            Ok(outcome) => println!("{} -> {:?}", square, outcome),
            Err(e) => warn!("Click on {} failed: {}", square, e),
        }
        if let Some(notice) = session.notice() {
            println!("  {}", notice);
        }
        if let Some(banner) = session.check_banner() {
            println!("  {}", banner);
        }
    }

    print_board(&session.game().pieces);
    println!("{}", session.status_line(Instant::now()));
    Ok(())
}

fn print_board(pieces: &PieceSet) {
    print!("  ");
    for col in 0..BOARD_SIZE {
        print!(" {}", col);
    }
    println!();

    for row in 0..BOARD_SIZE {
        print!("{} ", row);
        for col in 0..BOARD_SIZE {
            let symbol = pieces
                .piece_at(Square::new(row, col))
                .map(|piece| piece.symbol())
                .unwrap_or('.');
            print!(" {}", symbol);
        }
        println!();
    }
}
