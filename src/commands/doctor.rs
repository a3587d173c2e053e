//! Diagnose beofficial setup issues

use colored::*;
use eyre::Result;

use crate::config::Config;
use crate::mail::REQUIRED_VARS;

pub fn run(config: &Config) -> Result<()> {
    println!("{}", "BeOfficial Doctor".bold());
    println!("{}", "═".repeat(50));
    println!();

    let mut issues = 0;

    // Check config file
    let config_file = Config::beofficial_dir().join("beofficial.yaml");
    if config_file.exists() {
        println!("{} Config file: {}", "✓".green(), config_file.display());
    } else {
        println!("{} Config file missing: {} (using defaults)", "⚠".yellow(), config_file.display());
    }

    // Check export directory
    let export_dir = Config::expand_path(&config.export.output_dir);
    if export_dir.is_dir() {
        println!("{} Export directory: {}", "✓".green(), export_dir.display());
    } else {
        println!(
            "{} Export directory missing: {} (created on export)",
            "⚠".yellow(),
            export_dir.display()
        );
    }

    println!();

    // Check SMTP environment. Values are never printed, only presence.
    println!("{}", "SMTP environment:".bold());
    for name in REQUIRED_VARS {
        let set = std::env::var(name).map(|v| !v.trim().is_empty()).unwrap_or(false);
        if set {
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {} not set", "✗".red(), name);
            issues += 1;
        }
    }
    if issues > 0 {
        println!(
            "  {}",
            "Set all five to enable 'beofficial digest send'.".dimmed()
        );
    }

    println!();

    // Summary
    println!("{}", "═".repeat(50));
    if issues == 0 {
        println!("{} All checks passed!", "✓".green().bold());
    } else {
        println!("{} {} issue(s) found", "⚠".yellow().bold(), issues);
    }

    Ok(())
}
