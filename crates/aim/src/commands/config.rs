//! `aim config show|set`.

use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load_or_default();
            let yaml = serde_yaml::to_string(&config)?;
            println!("{}", format!("# {}", Config::path()?.display()).dimmed());
            print!("{yaml}");
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!("{} {key} = {value}", "Saved".green().bold());
            println!("  {}", path.display().to_string().dimmed());
            Ok(())
        }
    }
}
