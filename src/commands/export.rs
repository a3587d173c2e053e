//! Export command: write the project files

use colored::*;
use eyre::Result;
use std::path::PathBuf;

use crate::agent::roster::Roster;
use crate::config::Config;
use crate::export;

pub fn run(output: Option<PathBuf>, roster: &Roster, config: &Config) -> Result<()> {
    let dir = Config::expand_path(&output.unwrap_or_else(|| config.export.output_dir.clone()));

    let written = export::write_files(roster.list(), &dir)?;

    println!("{}", "Exported:".bold());
    for path in written {
        println!("  {} {}", "✓".green(), path.display());
    }

    Ok(())
}
