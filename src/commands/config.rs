use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "BeOfficial Configuration".bold());
            println!();

            println!("  project: {}", config.project);
            println!("  log_level: {}", config.log_level.as_filter());
            println!();

            println!("{}:", "export".cyan());
            println!("  output_dir: {}", config.export.output_dir.display());
            println!();

            println!("{}:", "digest".cyan());
            println!("  to: {}", config.digest.to);
            println!("  subject: {}", config.digest.subject);
            println!("  footer: {}", config.digest.footer);
            println!("  bullets: {} configured", config.digest.bullets.len());
        }
    }

    Ok(())
}

fn get(key: &str, config: &Config) -> Result<()> {
    let value = match key {
        "project" => Some(config.project.clone()),
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "export.output_dir" => Some(config.export.output_dir.display().to_string()),
        "digest.to" => Some(config.digest.to.clone()),
        "digest.subject" => Some(config.digest.subject.clone()),
        "digest.intro" => Some(config.digest.intro.clone()),
        "digest.footer" => Some(config.digest.footer.clone()),
        _ => None,
    };

    match value {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}
