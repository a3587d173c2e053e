//! Roster export
//!
//! Wraps the roster in a timestamped document and writes the two project
//! files the export produces: the agents JSON and a short README note.

use chrono::{DateTime, Local};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::agent::AgentProfile;

pub const PROJECT_NAME: &str = "BeOfficial";
pub const AGENTS_FILE: &str = "beofficial_agents.json";
pub const README_FILE: &str = "README_beofficial.txt";

const README_NOTES: &str = "BeOfficial Agents configuration export.\n\n\
Files: beofficial_agents.json (agents).\n\
Next: connect automations for news fetching, email delivery, social scheduling, \
lead capture, and day-of dashboards.\n";

/// The exported document. Key order is declaration order; agents keep their
/// roster order and their camelCase field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub exported_at: String,
    pub project: String,
    pub agents: Vec<AgentProfile>,
}

/// Build the export document for a given instant. Pure: the timestamp is the
/// caller's, so tests can pin it.
pub fn document(agents: &[AgentProfile], exported_at: DateTime<Local>) -> ExportDocument {
    ExportDocument {
        exported_at: exported_at.to_rfc3339(),
        project: PROJECT_NAME.to_string(),
        agents: agents.to_vec(),
    }
}

/// UTF-8 JSON bytes, 2-space indented, stable key order.
pub fn json_bytes(agents: &[AgentProfile], exported_at: DateTime<Local>) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&document(agents, exported_at))
        .context("failed to serialize export document")
}

/// Write `beofficial_agents.json` and `README_beofficial.txt` into `dir`,
/// stamping the current wall-clock time. Returns the written paths.
pub fn write_files(agents: &[AgentProfile], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let agents_path = dir.join(AGENTS_FILE);
    write_atomic(&agents_path, &json_bytes(agents, Local::now())?)?;

    let readme_path = dir.join(README_FILE);
    write_atomic(&readme_path, README_NOTES.as_bytes())?;

    log::info!("exported {} agents to {}", agents.len(), dir.display());
    Ok(vec![agents_path, readme_path])
}

// Temp file in the target directory, then rename: readers never observe a
// half-written export.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to persist {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::seed::default_agents;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 15, 5, 30, 0).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_agents() {
        let agents = default_agents();
        let bytes = json_bytes(&agents, fixed_instant()).unwrap();

        let decoded: ExportDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.project, PROJECT_NAME);
        assert_eq!(decoded.agents, agents);
    }

    #[test]
    fn test_serialization_is_stable() {
        let agents = default_agents();
        let first = json_bytes(&agents, fixed_instant()).unwrap();
        let second = json_bytes(&agents, fixed_instant()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_key_order() {
        let agents = default_agents();
        let text = String::from_utf8(json_bytes(&agents, fixed_instant()).unwrap()).unwrap();

        let exported_at = text.find("\"exportedAt\"").unwrap();
        let project = text.find("\"project\"").unwrap();
        let agents_key = text.find("\"agents\"").unwrap();
        assert!(exported_at < project && project < agents_key);

        // field order inside the first agent object
        let name = text.find("\"name\"").unwrap();
        let codename = text.find("\"codename\"").unwrap();
        let mission = text.find("\"mission\"").unwrap();
        let notes = text.find("\"notes\"").unwrap();
        let prompts = text.find("\"examplePrompts\"").unwrap();
        assert!(name < codename && codename < mission && mission < notes && notes < prompts);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let doc = document(&default_agents(), fixed_instant());
        let parsed = DateTime::parse_from_rfc3339(&doc.exported_at).unwrap();
        assert_eq!(parsed.with_timezone(&Local), fixed_instant());
    }

    #[test]
    fn test_write_files_creates_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_files(&default_agents(), dir.path()).unwrap();

        assert_eq!(written.len(), 2);
        assert!(dir.path().join(AGENTS_FILE).exists());
        assert!(dir.path().join(README_FILE).exists());

        let bytes = fs::read(dir.path().join(AGENTS_FILE)).unwrap();
        let decoded: ExportDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.agents.len(), 5);

        let readme = fs::read_to_string(dir.path().join(README_FILE)).unwrap();
        assert!(readme.contains(AGENTS_FILE));
    }
}
