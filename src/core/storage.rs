//! Key-value persistence for the academic record and the display theme
//!
//! Two fixed keys are used: one holding the record as a JSON array and one
//! holding the theme identifier. Values are plain strings so any key-value
//! backend can sit behind [`KeyValueStore`].

use crate::core::error::{Error, Result};
use crate::core::models::AcademicRecord;
use logger::{debug, info, warn};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Key under which the record is stored
pub const RECORD_KEY: &str = "grade_tracker_data";

/// Key under which the theme identifier is stored
pub const THEME_KEY: &str = "grade_tracker_theme";

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value; absent keys are not an error
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Store keeping one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the store files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Temp file then rename; the target is only ever replaced whole
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Decode a record from JSON text, coercing loosely typed numbers.
///
/// # Errors
/// Returns `Error::Corrupt` naming `source` when the text is not a record.
pub fn parse_record(json: &str, source: &str) -> Result<AcademicRecord> {
    if json.trim().is_empty() {
        return Ok(AcademicRecord::new());
    }
    serde_json::from_str(json).map_err(|e| Error::Corrupt {
        key: source.to_string(),
        message: e.to_string(),
    })
}

/// Load the record; an absent key yields an empty record.
///
/// # Errors
/// Returns an error if the store fails or the stored value is corrupt.
/// Corrupt data is reported, never replaced.
pub fn load_record(store: &impl KeyValueStore) -> Result<AcademicRecord> {
    let Some(json) = store.get(RECORD_KEY)? else {
        info!("No stored record found; starting empty");
        return Ok(AcademicRecord::new());
    };
    let record = parse_record(&json, RECORD_KEY)?;
    debug!("Loaded record with {} years", record.years.len());
    Ok(record)
}

/// Save the record as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or the store fails.
pub fn save_record(store: &mut impl KeyValueStore, record: &AcademicRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    store.set(RECORD_KEY, &json)?;
    info!("Saved record with {} years", record.years.len());
    Ok(())
}

/// Read a record from a JSON file, e.g. a browser backup.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a record.
pub fn import_record(path: &Path) -> Result<AcademicRecord> {
    let json = fs::read_to_string(path)?;
    parse_record(&json, &path.display().to_string())
}

/// Display theme identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl Theme {
    /// Stored identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Tolerate a JSON-quoted value as written by browser storage
        match s.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: '{other}' (expected light or dark)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load the theme; absent or unrecognised values fall back to light.
///
/// # Errors
/// Returns an error only if the store fails.
pub fn load_theme(store: &impl KeyValueStore) -> Result<Theme> {
    let Some(raw) = store.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };
    Ok(raw.parse().unwrap_or_else(|e| {
        warn!("{e}; using light theme");
        Theme::default()
    }))
}

/// Persist the theme identifier.
///
/// # Errors
/// Returns an error if the store fails.
pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Assessment;

    #[test]
    fn test_missing_record_is_empty() {
        let store = MemoryStore::new();
        assert!(load_record(&store).expect("load").is_empty());
    }

    #[test]
    fn test_record_round_trip() {
        let mut store = MemoryStore::new();
        let mut record = AcademicRecord::new();
        record.add_year("Year 1".to_string(), 30.0).expect("year added");
        record
            .add_module("Year 1", "Maths".to_string(), 7.5)
            .expect("year");
        record
            .add_assessment(
                "Year 1",
                "Maths",
                Assessment::new(0, "Test".to_string(), 20.0)
                    .with_grade(61.0)
                    .with_due_date("2025-03-01"),
            )
            .expect("module");

        save_record(&mut store, &record).expect("save");
        assert_eq!(load_record(&store).expect("load"), record);
    }

    #[test]
    fn test_corrupt_record_is_reported() {
        let mut store = MemoryStore::new();
        store.set(RECORD_KEY, "{not json").expect("set");
        assert!(matches!(load_record(&store), Err(Error::Corrupt { .. })));
    }

    #[test]
    fn test_browser_shaped_record_is_coerced() {
        let json = r#"[{
            "id": 1700000000001, "name": "Year 1", "weighting": "25", "collapsed": true,
            "modules": [{
                "id": "1700000000002", "name": "Logic", "ects": "5", "moderatedScore": "",
                "assessments": [
                    {"id": 1700000000003, "title": "Quiz", "dueDate": "", "weight": "50", "grade": "72"},
                    {"id": 1700000000004, "title": "Exam", "weight": 50, "grade": null}
                ]
            }]
        }]"#;
        let record = parse_record(json, "test").expect("decode");
        let module = &record.years[0].modules[0];
        assert!(record.years[0].collapsed);
        assert_eq!(module.moderated_score, None);
        assert_eq!(module.assessments[0].grade, Some(72.0));
        assert_eq!(module.assessments[0].due_date, None);
        assert_eq!(module.assessments[1].grade, None);
        assert_eq!(record.next_id().expect("id available"), 1_700_000_000_005);
    }

    #[test]
    fn test_theme_defaults_and_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store).expect("load"), Theme::Light);

        save_theme(&mut store, Theme::Dark).expect("save");
        assert_eq!(load_theme(&store).expect("load"), Theme::Dark);

        store.set(THEME_KEY, "\"dark\"").expect("set");
        assert_eq!(load_theme(&store).expect("load"), Theme::Dark);

        store.set(THEME_KEY, "solarized").expect("set");
        assert_eq!(load_theme(&store).expect("load"), Theme::Light);
    }
}
