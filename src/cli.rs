use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "beofficial",
    about = "BeOfficial Command Center - manage the marketing agent roster, compose the daily brief, export",
    version,
    after_help = "Logs are written to: ~/.local/share/beofficial/logs/beofficial.log\n\nSMTP delivery reads SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS, SMTP_FROM from the environment."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to beofficial.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and edit agent profiles
    Agent {
        #[command(subcommand)]
        action: AgentAction,
    },

    /// Compose and send the EARLYBIRD brief
    Digest {
        #[command(subcommand)]
        action: DigestAction,
    },

    /// Write the agents JSON and README export files
    Export {
        /// Directory to write into (defaults to export.output_dir from config)
        #[arg(long, short = 'O')]
        output: Option<PathBuf>,
    },

    /// Show the agent status dashboard
    Status {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Diagnose setup issues
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum AgentAction {
    /// List agent profiles
    List {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show one agent profile in full
    Show {
        /// Agent codename (e.g. SCRIBE)
        codename: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Set one field of one agent profile
    Set {
        /// Agent codename (e.g. SCRIBE)
        codename: String,

        /// Field to set, camelCase (e.g. mission, targetAudience, kpis)
        field: String,

        /// New value; list fields take one value per argument
        #[arg(trailing_var_arg = true, required = true)]
        values: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum DigestAction {
    /// Compose the brief and print it
    Preview {
        /// Subject line
        #[arg(long)]
        subject: Option<String>,

        /// Intro paragraph
        #[arg(long)]
        intro: Option<String>,

        /// Bullet item (repeatable); blank items are dropped
        #[arg(long = "bullet")]
        bullets: Vec<String>,

        /// Footer line
        #[arg(long)]
        footer: Option<String>,
    },

    /// Compose the brief and send it over SMTP
    Send {
        /// Recipient address (defaults to digest.to from config)
        #[arg(long)]
        to: Option<String>,

        /// Subject line
        #[arg(long)]
        subject: Option<String>,

        /// Intro paragraph
        #[arg(long)]
        intro: Option<String>,

        /// Bullet item (repeatable); blank items are dropped
        #[arg(long = "bullet")]
        bullets: Vec<String>,

        /// Footer line
        #[arg(long)]
        footer: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}
