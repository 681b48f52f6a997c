use clap::Parser;
use dialoguer::Input;
use secret_friend::{Config, Session};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Add friends one at a time, then draw")]
pub struct Play {
    /// Seed the shuffle for reproducible draws
    #[arg(long)]
    seed: Option<u64>,
}

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action<'a> {
    Add(&'a str),
    Draw,
    Reset,
    List,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Action<'a> {
    /// Lines starting with `:` are commands; anything else is a name.
    /// A doubled `::` adds the rest of the line, first colon kept, as a name.
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Add(line);
        };

        if command.starts_with(':') {
            return Self::Add(command);
        }

        match command.trim().to_lowercase().as_str() {
            "d" | "draw" => Self::Draw,
            "r" | "reset" => Self::Reset,
            "l" | "list" => Self::List,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(command),
        }
    }
}

impl Play {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let mut session = Session::with_seed(config, self.seed);

        print_help();

        loop {
            // Each prompt starts empty, so a rejected name is cleared for retry.
            let line = Input::<String>::new()
                .with_prompt("Friend's name")
                .allow_empty(true)
                .interact_text()?;

            match Action::parse(&line) {
                Action::Add(candidate) => match session.add(candidate) {
                    Ok(name) => {
                        println!("{} {name}", "added".success());
                        if session.config().echo_roster {
                            super::print_roster(session.roster());
                        }
                    }
                    Err(rejection) => super::report(&rejection),
                },
                Action::Draw => match session.draw() {
                    Ok(draw) => {
                        super::print_pairing(&draw.pairing);
                        if draw.attempts.get() > 1 {
                            println!(
                                "{}",
                                format!("(took {} shuffles)", draw.attempts).dim()
                            );
                        }
                    }
                    Err(rejection) => super::report(&rejection),
                },
                Action::Reset => {
                    session.reset();
                    println!("{}", "Started over.".warning());
                    if session.config().echo_roster {
                        super::print_roster(session.roster());
                    }
                }
                Action::List => super::print_roster(session.roster()),
                Action::Help => print_help(),
                Action::Quit => break,
                Action::Unknown(command) => {
                    eprintln!("{}", format!("unknown command ':{command}'").failure());
                    print_help();
                }
            }
        }

        Ok(())
    }
}

fn print_help() {
    println!("Type a name and press Enter to add it. Commands:");
    println!("  {}   draw secret friends", ":draw".strong());
    println!("  {}  clear every name and result", ":reset".strong());
    println!("  {}   show the current list", ":list".strong());
    println!("  {}   leave", ":quit".strong());
    println!(
        "A name that itself starts with ':' needs a second one, e.g. {} adds ':)'.",
        "::)".strong()
    );
}
