mod app;
mod browser;
mod catalog;
mod cli;
mod commands;
mod config;
mod dataset;
mod directory;
mod geo;
mod link;
mod logging;
mod pages;
mod qr;
mod render;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    cli.run()
}
