//! `aim link <floor>`: print the deep-link payloads for a floor.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::directory;
use crate::link;

pub fn run(config: &Config, floor: &str) -> Result<()> {
    let entry = directory::entry(floor).ok_or_else(|| {
        anyhow::anyhow!("Unknown floor: {floor}. Run `aim floors` for the list.")
    })?;

    println!("{}", entry.label.bold());
    println!("  map:        {}", link::map_link(config.origin(), entry.id));
    println!(
        "  streetview: {}",
        link::streetview_link(config.origin(), entry.id)
    );
    Ok(())
}
