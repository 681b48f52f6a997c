use std::path::{Path, PathBuf};

mod config;
mod draw;
mod play;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use config::ShowConfig;
use draw::Draw;
use play::Play;
use secret_friend::{AssignError, Config, Pairing, Rejection, Roster};
use terminal::Colorize;

/// Config file picked up from the working directory when `--config` is not
/// given.
const DEFAULT_CONFIG_FILE: &str = "secret-friend.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_else(|| Command::Play(Play::default()))
            .run(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// An explicit path must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("could not load config from {}", path.display())),
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("could not load {DEFAULT_CONFIG_FILE}")),
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Build the list of friends interactively and draw (default)
    Play(Play),

    /// Draw once for the given names and exit
    ///
    /// Names may be given as arguments, read from a file (one per line), or
    /// both.
    Draw(Draw),

    /// Show the effective configuration
    Config(ShowConfig),
}

impl Command {
    fn run(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Play(command) => command.run(config)?,
            Self::Draw(command) => command.run(config)?,
            Self::Config(command) => command.run(&config)?,
        }
        Ok(())
    }
}

/// Prints the participants as a numbered list.
fn print_roster(roster: &Roster) {
    if roster.is_empty() {
        println!("{}", "No friends added yet.".dim());
        return;
    }

    println!("Friends ({})", roster.len());
    println!("{}", terminal::rule().dim());
    for (i, name) in roster.iter().enumerate() {
        println!("{:>3}. {name}", i + 1);
    }
}

fn print_pairing(pairing: &Pairing) {
    println!("{}", "Secret friends".success());
    println!("{}", terminal::rule().dim());
    for pair in pairing {
        println!("{}", pair.render_with(Colorize::strong));
    }
}

/// Writes a refusal to stderr, with a hint when trying again can help.
fn report(rejection: &Rejection) {
    eprintln!("{}", rejection.to_string().failure());
    if matches!(
        rejection,
        Rejection::Draw(AssignError::SelfAssignment { .. })
    ) {
        eprintln!("{}", "Draw again to get a valid result.".dim());
    }
}
