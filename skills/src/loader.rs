//! Roster loading from JSON files.

use std::path::{Path, PathBuf};

use async_fs as afs;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{MemberRecord, RosterError};

/// Parses a roster from JSON text.
///
/// Accepts either a bare list of member records or the backend response envelope
/// `{"data": [...]}`. An envelope without `data` is an empty roster. Entries that are
/// not JSON objects are skipped.
///
/// # Errors
///
/// Returns [`RosterError::Parse`] if the text is not JSON and
/// [`RosterError::UnexpectedShape`] if it is neither a list nor an envelope.
pub fn parse_roster(content: &str) -> Result<Vec<MemberRecord>, RosterError> {
    let value: Value = serde_json::from_str(content)?;
    roster_from_value(value)
}

/// Same as [`parse_roster`], for an already decoded JSON value.
///
/// # Errors
///
/// Returns [`RosterError::UnexpectedShape`] if the value is neither a list nor an envelope.
pub fn roster_from_value(value: Value) -> Result<Vec<MemberRecord>, RosterError> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(RosterError::UnexpectedShape),
        },
        _ => return Err(RosterError::UnexpectedShape),
    };

    let total = entries.len();
    let members: Vec<MemberRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if !entry.is_object() {
                warn!(index, "skipping roster entry that is not an object");
                return None;
            }
            // Every field is lenient, so an object always decodes.
            serde_json::from_value(entry)
                .inspect_err(|err| warn!(index, %err, "skipping undecodable roster entry"))
                .ok()
        })
        .collect();

    debug!(total, kept = members.len(), "parsed roster");
    Ok(members)
}

/// Loads member rosters from JSON files.
///
/// # Example
///
/// ```rust,ignore
/// let loader = RosterLoader::new()
///     .add_path("./batch_001.json")
///     .add_path("./batch_002.json");
///
/// let members = loader.load_all().await?;
/// ```
#[derive(Debug, Default)]
pub struct RosterLoader {
    paths: Vec<PathBuf>,
}

impl RosterLoader {
    /// Create a new roster loader with no paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a roster file.
    #[must_use]
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Configured roster files, in load order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Load and concatenate every configured roster that exists.
    ///
    /// Missing files are skipped; members keep file order, then entry order.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub async fn load_all(&self) -> Result<Vec<MemberRecord>, RosterError> {
        let mut members = Vec::new();

        for path in &self.paths {
            if !path_exists_async(path).await? {
                debug!(path = %path.display(), "roster file not found, skipping");
                continue;
            }
            members.extend(Self::load(path).await?);
        }

        Ok(members)
    }

    /// Load a single roster file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ReadFile`] if the file cannot be read, or a parse error.
    pub async fn load(path: &Path) -> Result<Vec<MemberRecord>, RosterError> {
        let content = afs::read_to_string(path)
            .await
            .map_err(|source| RosterError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        parse_roster(&content)
    }
}

async fn path_exists_async(path: &Path) -> Result<bool, RosterError> {
    match afs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(RosterError::ReadFile {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::future::block_on;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const ROSTER: &str = r#"[
        {"name": "Asha", "USN": "U1", "points": 10, "Tech-skills": {"Python": 1}},
        {"name": "Bilal", "USN": "U2", "points": 20, "Tech-skills": ["python"]}
    ]"#;

    fn write_roster(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write roster");
        path
    }

    #[test]
    fn test_parse_bare_list() {
        let members = parse_roster(ROSTER).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].name, "Bilal");
    }

    #[test]
    fn test_parse_envelope() {
        let members = parse_roster(r#"{"data": [{"name": "Asha"}], "status": "ok"}"#).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "No USN");
    }

    #[test]
    fn test_envelope_without_data_is_empty() {
        assert!(parse_roster(r#"{"status": "ok"}"#).unwrap().is_empty());
        assert!(parse_roster(r#"{"data": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_skips_non_object_entries() {
        let members = parse_roster(r#"[{"name": "Asha"}, 3, "Bilal", null]"#).unwrap();
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn test_rejects_unexpected_shapes() {
        assert!(matches!(
            parse_roster("42"),
            Err(RosterError::UnexpectedShape)
        ));
        assert!(matches!(
            parse_roster(r#"{"data": "nope"}"#),
            Err(RosterError::UnexpectedShape)
        ));
        assert!(matches!(parse_roster("not json"), Err(RosterError::Parse(_))));
    }

    #[test]
    fn test_load_all_concatenates_and_skips_missing() {
        let dir = tempdir().expect("create temp dir");
        let first = write_roster(&dir, "a.json", ROSTER);
        let second = write_roster(&dir, "b.json", r#"{"data": [{"name": "Chen"}]}"#);

        let loader = RosterLoader::new()
            .add_path(first)
            .add_path(dir.path().join("missing.json"))
            .add_path(second);

        let members = block_on(loader.load_all()).expect("load rosters");
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Bilal", "Chen"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().expect("create temp dir");
        let result = block_on(RosterLoader::load(&dir.path().join("missing.json")));
        assert!(matches!(result, Err(RosterError::ReadFile { .. })));
    }
}
