//! `aim qr <floor>`: export one floor's QR code as a PNG, ready to print.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::directory;
use crate::link;
use crate::qr::QrMatrix;

pub fn run(config: &Config, floor: &str, output_dir: &Path) -> Result<()> {
    let entry = directory::entry(floor).ok_or_else(|| {
        anyhow::anyhow!("Unknown floor: {floor}. Run `aim floors` for the list.")
    })?;

    let payload = link::map_link(config.origin(), entry.id);
    let matrix = QrMatrix::encode(&payload)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let path = output_dir.join(format!("{}.png", entry.id));
    matrix
        .rgb_image()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "{} {} → {}",
        "Exported".green().bold(),
        entry.label,
        path.display()
    );
    println!("  payload: {}", payload.dimmed());
    Ok(())
}
