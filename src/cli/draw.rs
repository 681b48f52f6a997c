use std::{num::NonZeroU32, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;
use secret_friend::{AssignError, Config, Rejection, Session};
use serde_json::json;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Draw secret friends for a list of names")]
pub struct Draw {
    /// Participant names, in giving order
    names: Vec<String>,

    /// Read additional names from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Seed the shuffle for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffles allowed before giving up (overrides the config file)
    #[arg(long, value_name = "N")]
    attempts: Option<NonZeroU32>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Draw {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        if let Some(attempts) = self.attempts {
            config.set_max_attempts(attempts);
        }

        let mut session = Session::with_seed(config, self.seed);

        for candidate in self.candidates()? {
            if let Err(rejection) = session.add(&candidate) {
                tracing::warn!(%candidate, error = %rejection, "skipping name");
                eprintln!("{} {rejection}", "skipped:".warning());
            }
        }

        match session.draw() {
            Ok(draw) => match self.output {
                OutputFormat::Text => super::print_pairing(&draw.pairing),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&to_json(&draw))?);
                }
            },
            Err(rejection) => {
                super::report(&rejection);
                process::exit(exit_code(&rejection));
            }
        }

        Ok(())
    }

    /// Names from the file first, then those from the command line.
    fn candidates(&self) -> anyhow::Result<Vec<String>> {
        let mut candidates = Vec::new();

        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read names from {}", path.display()))?;
            candidates.extend(parse_names(&content));
        }

        candidates.extend(self.names.iter().cloned());
        Ok(candidates)
    }
}

/// Splits a names file into candidates, skipping blank lines and `#`
/// comments.
fn parse_names(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
}

fn to_json(draw: &secret_friend::Draw) -> serde_json::Value {
    json!({
        "attempts": draw.attempts.get(),
        "pairs": draw.pairing,
    })
}

/// 2 when the roster is too small, 3 when drawing again may succeed.
const fn exit_code(rejection: &Rejection) -> i32 {
    match rejection {
        Rejection::Draw(AssignError::TooFewParticipants { .. }) => 2,
        Rejection::Draw(AssignError::SelfAssignment { .. }) => 3,
        Rejection::Roster(_) => 1,
    }
}
