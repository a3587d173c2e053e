//! Digest commands: preview and one-shot SMTP send

use colored::*;
use eyre::{Context, Result};

use crate::cli::DigestAction;
use crate::config::Config;
use crate::digest::EmailDraft;
use crate::mail::{self, SmtpRelay};

pub fn run(action: DigestAction, config: &Config) -> Result<()> {
    match action {
        DigestAction::Preview {
            subject,
            intro,
            bullets,
            footer,
        } => preview(draft(subject, intro, bullets, footer, config)),
        DigestAction::Send {
            to,
            subject,
            intro,
            bullets,
            footer,
        } => send(
            to.unwrap_or_else(|| config.digest.to.clone()),
            draft(subject, intro, bullets, footer, config),
        ),
    }
}

// CLI overrides win; anything not given falls back to the configured brief.
fn draft(
    subject: Option<String>,
    intro: Option<String>,
    bullets: Vec<String>,
    footer: Option<String>,
    config: &Config,
) -> EmailDraft {
    EmailDraft {
        subject: subject.unwrap_or_else(|| config.digest.subject.clone()),
        intro: intro.unwrap_or_else(|| config.digest.intro.clone()),
        bullets: if bullets.is_empty() {
            config.digest.bullets.clone()
        } else {
            bullets
        },
        footer: footer.unwrap_or_else(|| config.digest.footer.clone()),
    }
}

fn preview(draft: EmailDraft) -> Result<()> {
    println!("{}", draft.compose());
    Ok(())
}

fn send(to: String, draft: EmailDraft) -> Result<()> {
    let body = draft.compose();

    mail::send(&to, &draft.subject, &body, &SmtpRelay)
        .with_context(|| format!("failed to send digest to {to}"))?;

    println!("{} Email sent to {}", "✓".green(), to.cyan());
    Ok(())
}
