//! Headless Pong runner
//!
//! Plays matches without a renderer, optionally paced in real time, and can
//! stream per-tick snapshots as JSON lines on stdout.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use pong_core::{Config, Controller, Match, ServeStrategy, Side};

mod driver;
mod logger;

use driver::Driver;
use logger::StderrLogger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ControllerArg {
    Human,
    Ai,
}

impl From<ControllerArg> for Controller {
    fn from(arg: ControllerArg) -> Self {
        match arg {
            ControllerArg::Human => Controller::Human,
            ControllerArg::Ai => Controller::Ai,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ServeArg {
    Quadrant,
    ScoreBiased,
}

impl From<ServeArg> for ServeStrategy {
    fn from(arg: ServeArg) -> Self {
        match arg {
            ServeArg::Quadrant => ServeStrategy::Quadrant,
            ServeArg::ScoreBiased => ServeStrategy::ScoreBiased,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pong_headless")]
#[command(about = "Run Pong matches without a renderer", long_about = None)]
struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for serves
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of matches to play
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Pace ticks at the configured tick period instead of running flat out
    #[arg(long, default_value = "false")]
    realtime: bool,

    /// Give up on a match after this many ticks
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,

    /// Write one JSON snapshot per tick to stdout
    #[arg(long, default_value = "false")]
    snapshots: bool,

    /// Override the left paddle's controller
    #[arg(long, value_enum)]
    left: Option<ControllerArg>,

    /// Override the right paddle's controller
    #[arg(long, value_enum)]
    right: Option<ControllerArg>,

    /// Override the serve strategy
    #[arg(long, value_enum)]
    serve: Option<ServeArg>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::new(),
        };
        if let Some(left) = self.left {
            config.left = left.into();
        }
        if let Some(right) = self.right {
            config.right = right.into();
        }
        if let Some(serve) = self.serve {
            config.serve = serve.into();
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(text).context("Malformed config JSON")?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::install(cli.log_level).context("Failed to install logger")?;

    let config = cli.build_config()?;
    let period = config.tick_period();
    let mut game = Match::new(config, cli.seed).context("Failed to create match")?;
    let mut driver = Driver::new(period, cli.realtime, cli.max_ticks);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut wins = [0u32; 2];

    for n in 1..=cli.matches {
        let mut write_error = None;
        let summary = driver.run_match(&mut game, |_event, snapshot| {
            if !cli.snapshots || write_error.is_some() {
                return;
            }
            let written = serde_json::to_writer(&mut out, snapshot)
                .map_err(anyhow::Error::from)
                .and_then(|()| writeln!(out).map_err(anyhow::Error::from));
            if let Err(err) = written {
                write_error = Some(err);
            }
        });
        if let Some(err) = write_error {
            return Err(err.context("Failed to write snapshot"));
        }

        match summary.winner {
            Some(side) => {
                wins[side_index(side)] += 1;
                info!(
                    "Match {}: {:?} won {}-{} in {} ticks",
                    n, side, summary.final_score.left, summary.final_score.right, summary.ticks
                );
            }
            None => bail!(
                "Match {} undecided after {} ticks at {}-{}",
                n,
                summary.ticks,
                summary.final_score.left,
                summary.final_score.right
            ),
        }
    }

    out.flush().context("Failed to flush stdout")?;
    info!("Left {} - Right {}", wins[0], wins[1]);
    Ok(())
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}
