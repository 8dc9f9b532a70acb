use std::path::Path;

use tracing::info;

use crate::models::consultant::ConsultantRecord;
use crate::roster::{Roster, RosterError, RosterSource, RosterStore};

/// Default roster compiled into the binary, used when no roster file is configured.
const EMBEDDED_ROSTER: &str = include_str!("../../data/consultants.json");

/// Parses a JSON array of consultant records and validates it.
pub fn parse_roster(json: &str) -> Result<Roster, RosterError> {
    let consultants: Vec<ConsultantRecord> = serde_json::from_str(json)?;
    Roster::new(consultants)
}

pub fn load_embedded() -> Result<Roster, RosterError> {
    parse_roster(EMBEDDED_ROSTER)
}

pub fn load_from_path(path: &Path) -> Result<Roster, RosterError> {
    let json = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&json)
}

/// Builds the roster store from the configured file, or the embedded roster
/// when no path is given.
pub fn open_store(path: Option<&Path>) -> Result<RosterStore, RosterError> {
    let store = match path {
        Some(path) => {
            let roster = load_from_path(path)?;
            info!("Roster loaded from {}: {} consultants", path.display(), roster.len());
            RosterStore::new(roster, RosterSource::File(path.to_path_buf()))
        }
        None => {
            let roster = load_embedded()?;
            info!("Embedded roster loaded: {} consultants", roster.len());
            RosterStore::new(roster, RosterSource::Embedded)
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::shortlist::build_shortlist;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_CONSULTANTS: &str = r#"[
        {"id": "a", "name": "A", "role": "Backend Engineer", "location": "London",
         "yearsOfExp": 5, "skills": ["Rust"], "bio": "Systems work."},
        {"id": "b", "name": "B", "role": "Designer", "location": "Paris",
         "yearsOfExp": 2, "skills": [], "bio": ""}
    ]"#;

    fn write_roster(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_embedded_roster_is_valid() {
        let roster = load_embedded().unwrap();
        assert_eq!(roster.len(), 15);
    }

    #[test]
    fn test_parse_roster_preserves_order() {
        let roster = parse_roster(TWO_CONSULTANTS).unwrap();
        let ids: Vec<&str> = roster.consultants().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_roster_accepts_blank_skill() {
        let roster = parse_roster(
            r#"[{"id": "a", "name": "A", "role": "Analyst", "location": "Oslo",
                "yearsOfExp": 1, "skills": [""], "bio": ""}]"#,
        )
        .unwrap();
        let shortlist = build_shortlist("pastry chef", roster.consultants(), 10);
        assert_eq!(shortlist.matched, 1);
    }

    #[test]
    fn test_parse_roster_rejects_non_array() {
        assert!(matches!(parse_roster(r#"{"id": "a"}"#), Err(RosterError::Parse(_))));
    }

    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let err = load_from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn test_open_store_without_path_uses_embedded() {
        let store = open_store(None).unwrap();
        assert_eq!(store.source(), &RosterSource::Embedded);
        assert_eq!(store.snapshot().len(), 15);
    }

    #[test]
    fn test_reload_picks_up_file_changes() {
        let file = write_roster(TWO_CONSULTANTS);
        let store = open_store(Some(file.path())).unwrap();
        assert_eq!(store.snapshot().len(), 2);

        std::fs::write(
            file.path(),
            r#"[{"id": "z", "name": "Z", "role": "Analyst", "location": "Oslo",
                "yearsOfExp": 1, "skills": [], "bio": ""}]"#,
        )
        .unwrap();

        assert_eq!(store.reload().unwrap(), Some(1));
        assert_eq!(store.snapshot().consultants()[0].id, "z");
    }

    #[test]
    fn test_failed_reload_keeps_previous_snapshot() {
        let file = write_roster(TWO_CONSULTANTS);
        let store = open_store(Some(file.path())).unwrap();

        std::fs::write(file.path(), "not json").unwrap();

        assert!(store.reload().is_err());
        assert_eq!(store.snapshot().len(), 2);
    }
}
