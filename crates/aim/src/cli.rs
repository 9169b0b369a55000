use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "aim")]
#[command(author, version, about)]
#[command(long_about = "Abington Interactive Map — campus wayfinding.\n\n\
    Launch the app, optionally at a deep link, or work with floor QR codes\n\
    from the command line.\n\n\
    Examples:\n  \
    aim                                        Launch at the home page\n  \
    aim --route \"/streetview?building=Rydal\"   Launch the image browser\n  \
    aim qr woodland-1st                        Export that floor's QR code\n  \
    aim link woodland-1st                      Print the deep-link payloads")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Open the app at a route or scanned URL, e.g. "/map?floor=woodland-1st"
    #[arg(long)]
    pub route: Option<String>,

    /// Launch in a window instead of maximized
    #[arg(long)]
    pub windowed: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export a floor's QR code as a PNG image
    Qr {
        /// Floor id, e.g. woodland-1st (see `aim floors`)
        floor: String,

        /// Output directory for the PNG file
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,
    },

    /// Print the deep-link payloads for a floor
    Link {
        /// Floor id, e.g. woodland-1st
        floor: String,
    },

    /// List the floors in the directory
    Floors,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. origin, theme, assets.dir, map.dataset, map.position)
        key: String,

        /// Value to set
        value: String,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        match self.command {
            Some(Commands::Qr { floor, output_dir }) => {
                crate::commands::qr::run(&config, &floor, &output_dir)
            }
            Some(Commands::Link { floor }) => crate::commands::link::run(&config, &floor),
            Some(Commands::Floors) => {
                crate::commands::floors::run();
                Ok(())
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Version) => {
                print_version();
                Ok(())
            }
            None => crate::app::run(config, self.route, self.windowed),
        }
    }
}

fn print_version() {
    println!(
        "{} {}",
        "Abington Interactive Map".bold(),
        env!("CARGO_PKG_VERSION").green()
    );
    println!("{}", env!("CARGO_PKG_REPOSITORY").dimmed());
}
