//! Plain-text digest composition
//!
//! Turns a subject/intro/bullets/footer tuple into the one email body the
//! EARLYBIRD brief uses. Strictly plain text, no escaping, no HTML.

/// A digest waiting to be composed. Built on demand, composed, then
/// discarded; never stored.
#[derive(Debug, Clone)]
pub struct EmailDraft {
    pub subject: String,
    pub intro: String,
    pub bullets: Vec<String>,
    pub footer: String,
}

impl EmailDraft {
    pub fn compose(&self) -> String {
        compose(&self.subject, &self.intro, &self.bullets, &self.footer)
    }
}

/// Compose the plain-text body.
///
/// Line sequence: `Subject: <subject>`, blank, intro, blank, one `• ` line per
/// non-blank bullet, blank, footer, joined with `\n`. Bullets that are empty
/// or whitespace-only after trimming are always dropped.
pub fn compose(subject: &str, intro: &str, bullets: &[String], footer: &str) -> String {
    let mut lines: Vec<String> = vec![
        format!("Subject: {subject}"),
        String::new(),
        intro.to_string(),
        String::new(),
    ];
    lines.extend(
        bullets
            .iter()
            .filter(|b| !b.trim().is_empty())
            .map(|b| format!("• {b}")),
    );
    lines.push(String::new());
    lines.push(footer.to_string());
    lines.join("\n")
}
