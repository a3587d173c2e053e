//! Status dashboard command
//!
//! The at-a-glance view: one row per agent with its board state, progress,
//! and next action.

use colored::*;
use eyre::Result;
use serde::Serialize;
use terminal_size::{Width, terminal_size};

use crate::agent::roster::Roster;
use crate::agent::seed;
use crate::cli::OutputFormat;

#[derive(Serialize)]
struct Dashboard {
    version: String,
    project: String,
    agents: Vec<AgentRow>,
}

#[derive(Serialize)]
struct AgentRow {
    codename: String,
    name: String,
    state: String,
    progress: f32,
    next_action: String,
    mission: String,
}

pub fn run(format: OutputFormat, roster: &Roster) -> Result<()> {
    let board = seed::default_status_board();

    let agents: Vec<AgentRow> = roster
        .list()
        .iter()
        .map(|a| {
            let status = board.get(&a.codename);
            AgentRow {
                codename: a.codename.clone(),
                name: a.name.clone(),
                state: status.map(|s| s.state.clone()).unwrap_or_else(|| "—".to_string()),
                progress: status.map(|s| s.progress).unwrap_or(0.0),
                next_action: status
                    .map(|s| s.next_action.clone())
                    .unwrap_or_else(|| "—".to_string()),
                mission: a.mission.clone(),
            }
        })
        .collect();

    let dashboard = Dashboard {
        version: env!("CARGO_PKG_VERSION").to_string(),
        project: crate::export::PROJECT_NAME.to_string(),
        agents,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dashboard)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&dashboard)?),
        OutputFormat::Text => print_dashboard(&dashboard),
    }

    Ok(())
}

fn term_width() -> usize {
    terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(80)
}

fn print_dashboard(dashboard: &Dashboard) {
    let width = term_width();

    println!("{}", "BeOfficial Command Center".bold());
    println!("{}", "═".repeat(50));
    println!();

    for row in &dashboard.agents {
        println!("{} {}", row.codename.cyan().bold(), row.name.bold());
        println!(
            "  {} {} {}",
            progress_bar(row.progress, 20),
            format!("{:>3.0}%", row.progress * 100.0).dimmed(),
            row.state
        );
        println!("  {} {}", "Next:".dimmed(), row.next_action);
        println!("  {}", truncate(&row.mission, width.saturating_sub(2)).dimmed());
        println!();
    }
}

fn progress_bar(fraction: f32, width: usize) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * width as f32).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
