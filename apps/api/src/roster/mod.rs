//! Roster: the immutable consultant snapshot and the store that hands it out.
//!
//! Readers take an `Arc<Roster>` snapshot and rank against it. Reload builds and
//! validates a complete new `Roster` before swapping the pointer, so a ranking
//! call never sees a half-updated roster.

pub mod handlers;
pub mod loader;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use crate::models::consultant::ConsultantRecord;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Consultant at position {0} has a blank id")]
    BlankId(usize),

    #[error("Duplicate consultant id '{0}'")]
    DuplicateId(String),
}

/// An ordered, validated set of consultants. Order is significant: it is the
/// tie-break for shortlist assembly.
#[derive(Debug, Default)]
pub struct Roster {
    consultants: Vec<ConsultantRecord>,
}

impl Roster {
    /// Validates ids, which must be non-blank and unique. Other fields are
    /// taken as-is.
    pub fn new(consultants: Vec<ConsultantRecord>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(consultants.len());

        for (position, consultant) in consultants.iter().enumerate() {
            if consultant.id.trim().is_empty() {
                return Err(RosterError::BlankId(position));
            }
            if !seen.insert(consultant.id.as_str()) {
                return Err(RosterError::DuplicateId(consultant.id.clone()));
            }
        }

        Ok(Self { consultants })
    }

    pub fn consultants(&self) -> &[ConsultantRecord] {
        &self.consultants
    }

    pub fn len(&self) -> usize {
        self.consultants.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.consultants.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ConsultantRecord> {
        self.consultants.iter().find(|c| c.id == id)
    }

    /// Distinct locations in first-seen roster order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.consultants
            .iter()
            .map(|c| c.location.as_str())
            .filter(|loc| seen.insert(*loc))
            .collect()
    }
}

/// Where the current roster came from. Only file-backed rosters can be reloaded.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterSource {
    Embedded,
    File(PathBuf),
}

/// Shared read-mostly handle to the current roster snapshot.
#[derive(Clone)]
pub struct RosterStore {
    current: Arc<RwLock<Arc<Roster>>>,
    source: RosterSource,
}

impl RosterStore {
    pub fn new(roster: Roster, source: RosterSource) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(roster))),
            source,
        }
    }

    /// Returns the current snapshot. Holding it keeps that roster alive even if
    /// a reload swaps in a new one.
    pub fn snapshot(&self) -> Arc<Roster> {
        Arc::clone(&self.current.read())
    }

    pub fn source(&self) -> &RosterSource {
        &self.source
    }

    /// Swaps in a new roster. The write lock is held only for the pointer swap.
    pub fn replace(&self, roster: Roster) {
        let next = Arc::new(roster);
        *self.current.write() = next;
    }

    /// Re-reads a file-backed roster and swaps it in.
    ///
    /// Returns `Ok(None)` for the embedded roster. On error the previous
    /// snapshot stays in place.
    pub fn reload(&self) -> Result<Option<usize>, RosterError> {
        let RosterSource::File(path) = &self.source else {
            return Ok(None);
        };

        let roster = loader::load_from_path(path)?;
        let count = roster.len();
        self.replace(roster);

        info!("Roster reloaded from {}: {count} consultants", path.display());
        Ok(Some(count))
    }
}
