use clap::Parser;
use secret_friend::Config;

#[derive(Debug, Parser, Default)]
#[command(about = "Print the effective configuration as TOML")]
pub struct ShowConfig {}

impl ShowConfig {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        print!("{}", config.to_toml()?);
        Ok(())
    }
}
