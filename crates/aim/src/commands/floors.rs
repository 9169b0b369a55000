//! `aim floors`: list the floor directory.

use colored::Colorize;

use crate::directory::FLOOR_DIRECTORY;

pub fn run() {
    for entry in &FLOOR_DIRECTORY {
        println!(
            "{:<16} {} ({}, floor {})",
            entry.id.bold(),
            entry.label,
            entry.building,
            entry.floor
        );
    }
}
