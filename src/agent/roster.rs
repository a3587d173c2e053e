//! In-session record store for agent profiles
//!
//! The roster owns the ordered collection for the lifetime of one process.
//! Membership is fixed after seeding; only field contents change. Nothing is
//! persisted here; the export encoder is the only way out.

use thiserror::Error;

use super::{AgentProfile, FieldValue, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Lookup of a nonexistent record by codename. Local, recoverable.
    #[error("no agent with codename '{0}'")]
    NotFound(String),

    #[error("codename '{0}' is already taken")]
    DuplicateCodename(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Ordered, in-memory collection of agent profiles.
///
/// Single session, single actor: no locking. A multi-client port would need
/// per-record locking or optimistic versioning before sharing this.
pub struct Roster {
    agents: Vec<AgentProfile>,
}

impl Roster {
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    /// The roster every session starts from: the five default profiles.
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        for profile in super::seed::default_agents() {
            roster
                .insert(profile)
                .expect("seed profiles are valid and unique");
        }
        roster
    }

    /// Accept a record into the store. Rejects invalid records and duplicate
    /// codenames; on rejection the roster is unchanged.
    pub fn insert(&mut self, profile: AgentProfile) -> Result<(), RosterError> {
        profile.validate()?;
        if self.agents.iter().any(|a| a.codename == profile.codename) {
            return Err(RosterError::DuplicateCodename(profile.codename));
        }
        self.agents.push(profile);
        Ok(())
    }

    /// All profiles, in seed order.
    pub fn list(&self) -> &[AgentProfile] {
        &self.agents
    }

    pub fn get(&self, codename: &str) -> Result<&AgentProfile, RosterError> {
        self.agents
            .iter()
            .find(|a| a.codename == codename)
            .ok_or_else(|| RosterError::NotFound(codename.to_string()))
    }

    /// Write one field of one record, all-or-nothing.
    ///
    /// `field` is the wire (camelCase) name. Renaming a codename keeps the
    /// uniqueness invariant: the new codename must not belong to another
    /// record.
    pub fn update(
        &mut self,
        codename: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<(), RosterError> {
        let index = self
            .agents
            .iter()
            .position(|a| a.codename == codename)
            .ok_or_else(|| RosterError::NotFound(codename.to_string()))?;

        if field == "codename" {
            if let FieldValue::Text(ref next) = value {
                let taken = self
                    .agents
                    .iter()
                    .enumerate()
                    .any(|(i, a)| i != index && a.codename == *next);
                if taken {
                    return Err(RosterError::DuplicateCodename(next.clone()));
                }
            }
        }

        self.agents[index].apply(field, value)?;
        log::debug!("updated {codename}.{field}");
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}
