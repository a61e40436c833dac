use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use console_othello::config::{AppConfig, GameMode};
use console_othello::players::SharedStdin;
use console_othello::ui::{self, App};

/// Play Othello in the terminal.
#[derive(Parser)]
#[command(name = "othello", about = "Play Othello in the terminal, against a friend or the bot")]
struct Cli {
    /// Game mode: 1 = player vs player, 2 = player vs bot (menu shown if omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    mode: Option<u8>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Override the bot's RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Do not clear the screen between frames
    #[arg(long)]
    no_clear: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.bot.seed = Some(seed);
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }

    let mode = match cli.mode {
        Some(1) => GameMode::HumanVsHuman,
        Some(2) => GameMode::HumanVsBot,
        Some(_) => unreachable!("clap restricts --mode to 1 or 2"),
        None => match config.mode {
            Some(mode) => mode,
            None => ui::prompt_mode(SharedStdin::new(), io::stdout())
                .context("selecting game mode")?,
        },
    };

    let (black, white) = ui::sources_for_mode(mode, &config.bot);
    let mut app = App::new(config.display, black, white);
    app.run(&mut io::stdout())?;

    Ok(())
}
