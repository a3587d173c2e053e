//! Agent roster commands

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::agent::roster::Roster;
use crate::agent::{AgentProfile, FieldKind, FieldValue};
use crate::cli::{AgentAction, OutputFormat};

pub fn run(action: AgentAction, roster: &mut Roster) -> Result<()> {
    match action {
        AgentAction::List { format } => list_agents(OutputFormat::resolve(format), roster),
        AgentAction::Show { codename, format } => {
            show_agent(&codename, OutputFormat::resolve(format), roster)
        }
        AgentAction::Set {
            codename,
            field,
            values,
        } => set_field(&codename, &field, values, roster),
    }
}

fn list_agents(format: OutputFormat, roster: &Roster) -> Result<()> {
    #[derive(Serialize)]
    struct AgentSummary {
        codename: String,
        name: String,
        mission: String,
        kpis: Vec<String>,
    }

    let summaries: Vec<AgentSummary> = roster
        .list()
        .iter()
        .map(|a| AgentSummary {
            codename: a.codename.clone(),
            name: a.name.clone(),
            mission: a.mission.clone(),
            kpis: a.kpis.clone(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summaries)?),
        OutputFormat::Text => {
            println!("{}", "Agent Roster:".bold());
            println!();

            for agent in roster.list() {
                println!("  {} {} {}", "●".green(), agent.codename.cyan().bold(), agent.name.bold());
                println!("    {}", agent.mission.dimmed());
                if !agent.kpis.is_empty() {
                    println!("    KPIs: {}", agent.kpis.join(", "));
                }
                println!();
            }
        }
    }

    Ok(())
}

fn show_agent(codename: &str, format: OutputFormat, roster: &Roster) -> Result<()> {
    let agent = roster.get(codename)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(agent)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(agent)?),
        OutputFormat::Text => print_profile(agent),
    }

    Ok(())
}

fn print_profile(agent: &AgentProfile) {
    println!("{} {}", "Agent:".bold(), agent.name.green().bold());
    println!("{} {}", "Codename:".bold(), agent.codename.cyan());
    println!();
    println!("{}", "Mission:".bold());
    println!("  {}", agent.mission);
    println!();
    println!("{} {}", "Target audience:".bold(), agent.target_audience);
    println!("{} {}", "Value proposition:".bold(), agent.value_proposition);

    print_list("Core tasks", &agent.core_tasks);
    print_list("Inputs", &agent.inputs);
    print_list("Outputs", &agent.outputs);
    print_list("Data sources", &agent.data_sources);
    print_list("KPIs", &agent.kpis);
    print_list("Guardrails", &agent.guardrails);

    if let Some(ref notes) = agent.notes {
        println!();
        println!("{}", "Notes:".bold());
        for line in notes.lines() {
            println!("  {}", line.italic());
        }
    }

    if !agent.example_prompts.is_empty() {
        println!();
        println!("{}", "Example prompts:".bold());
        for prompt in &agent.example_prompts {
            println!("  {} {}", "»".dimmed(), prompt);
        }
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", format!("{label}:").bold());
    for item in items {
        println!("  {} {}", "•".cyan(), item);
    }
}

fn set_field(codename: &str, field: &str, values: Vec<String>, roster: &mut Roster) -> Result<()> {
    // List fields take one item per argument; text fields take the arguments
    // re-joined, so unquoted multi-word values still work.
    let value = match AgentProfile::field_kind(field) {
        Some(FieldKind::List) => FieldValue::List(values),
        _ => FieldValue::Text(values.join(" ")),
    };

    roster.update(codename, field, value)?;

    println!("{} Updated {}.{}", "✓".green(), codename.cyan(), field);
    println!(
        "  {}",
        "Changes are saved in-session. Use 'beofficial export' to write JSON.".dimmed()
    );

    Ok(())
}
