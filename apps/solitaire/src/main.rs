use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use solitaire::cli::{repl, GameSession};
use solitaire::{telemetry, AppError, Config};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "solitaire")]
#[command(about = "Klondike solitaire in the terminal")]
struct Args {
    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Default file for save and load
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Start from a saved game
    #[arg(long)]
    load: Option<PathBuf>,

    /// Screen width in characters
    #[arg(long)]
    width: Option<usize>,

    /// Screen height in characters
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between auto-complete frames
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layer command line flags over the environment configuration.
    fn apply(&self, mut config: Config) -> Result<Config, AppError> {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(path) = &self.save_path {
            config.save_path = path.clone();
        }
        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(ms) = self.frame_ms {
            config.autoplay_frame = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = args.apply(Config::from_env()?)?;
    let mut session = GameSession::new(config);
    if let Some(path) = &args.load {
        session.load_from(path)?;
        info!(path = %path.display(), "starting from saved game");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout)
}

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "solitaire stopped");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
