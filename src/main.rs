//! Zobang GUI and headless demo
//!
//! ## Usage
//!
//! - `zobang` - Play against the engine in a window
//! - `zobang --human black --engine-first` - Choose sides
//! - `zobang demo` - Watch two engines play in the terminal

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use zobang::ui::ZobangApp;
use zobang::{SearchEngine, Stone};

/// Zobang: five in a row against a two-ply engine
#[derive(Parser)]
#[command(name = "zobang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Color played by the human
    #[arg(long, value_enum, default_value_t = Side::White)]
    human: Side,

    /// Let the engine make the first move
    #[arg(long)]
    engine_first: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the game window (default)
    Gui,
    /// Two engines play each other and the final board is printed
    Demo {
        /// Stop after this many moves
        #[arg(long, default_value_t = 60)]
        max_moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::Demo { max_moves }) => run_demo(max_moves),
        Some(Commands::Gui) | None => run_gui(cli.human.into(), cli.engine_first),
    }
}

fn run_gui(human_color: Stone, engine_first: bool) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Zobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Zobang",
        options,
        Box::new(move |cc| Ok(Box::new(ZobangApp::new(cc, human_color, engine_first)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

fn run_demo(max_moves: usize) -> Result<()> {
    println!("Zobang: engine vs engine\n");

    let mut black = SearchEngine::new(Stone::Black);
    let mut white = SearchEngine::new(Stone::White);

    let mut last = black.open()?;
    let mut moves = 1;
    // The engine that answers next
    let (mut mover, mut waiting) = (&mut white, &mut black);

    while !last.engine_wins && moves < max_moves && !waiting.is_full() {
        last = mover.react_to_move(last.chosen_move)?;
        moves += 1;
        info!(
            color = ?mover.engine_color(),
            pos = %last.chosen_move,
            score = %last.score,
            "demo move {moves}"
        );
        std::mem::swap(&mut mover, &mut waiting);
    }

    // `waiting` played the latest move, so its board is complete
    println!("{}", waiting.board());
    if last.engine_wins {
        println!("{:?} wins after {moves} moves", waiting.engine_color());
    } else if waiting.is_full() {
        println!("Draw after {moves} moves");
    } else {
        println!("Stopped after {moves} moves");
    }
    Ok(())
}
