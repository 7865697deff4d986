//! JSON file source.
//!
//! Accepts either a single JSON array of records or NDJSON (one record per
//! line, blank lines skipped). Records use the internally tagged form:
//!
//! ```text
//! {"type":"user","name":"Wilson","age":23,"occupation":"Ball"}
//! ```

use crate::PersonSource;
use persona_core::{Person, PersonaError, PersonaResult};
use std::path::{Path, PathBuf};

/// Loads person records from a JSON or NDJSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersonSource for JsonFileSource {
    fn load(&self) -> PersonaResult<Vec<Person>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            PersonaError::Dataset(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        let persons = parse(&raw).map_err(|e| match e {
            PersonaError::Dataset(msg) => {
                PersonaError::Dataset(format!("{}: {msg}", self.path.display()))
            }
            other => other,
        })?;

        tracing::info!(path = %self.path.display(), records = persons.len(), "loaded dataset");
        Ok(persons)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses a JSON array or NDJSON document into records.
pub fn parse(raw: &str) -> PersonaResult<Vec<Person>> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(raw).map_err(|e| PersonaError::Dataset(e.to_string()));
    }

    let mut persons = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let person = serde_json::from_str(line)
            .map_err(|e| PersonaError::Dataset(format!("line {}: {e}", idx + 1)))?;
        persons.push(person);
    }
    Ok(persons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_json_array() {
        let raw = r#"[
            {"type":"user","name":"Wilson","age":23,"occupation":"Ball"},
            {"type":"admin","name":"Jane Doe","age":32,"role":"Administrator"}
        ]"#;
        let persons = parse(raw).unwrap();
        assert_eq!(
            persons,
            vec![
                Person::user("Wilson", 23, "Ball"),
                Person::admin("Jane Doe", 32, "Administrator"),
            ]
        );
    }

    #[test]
    fn parses_ndjson_skipping_blank_lines() {
        let raw = "{\"type\":\"admin\",\"name\":\"Agent Smith\",\"age\":23,\"role\":\"Anti-virus engineer\"}\n\n\
                   {\"type\":\"user\",\"name\":\"Kate Müller\",\"age\":23,\"occupation\":\"Astronaut\"}\n";
        let persons = parse(raw).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[1].name(), "Kate Müller");
    }

    #[test]
    fn ndjson_error_names_line() {
        let raw = "{\"type\":\"user\",\"name\":\"a\",\"age\":1,\"occupation\":\"b\"}\n{\"type\":\"guest\"}\n";
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, PersonaError::Dataset(ref m) if m.starts_with("line 2:")), "{err}");
    }

    #[test]
    fn record_with_mixed_fields_is_rejected() {
        let missing = r#"[{"type":"user","name":"x","age":1,"role":"Administrator"}]"#;
        assert!(parse(missing).is_err());

        let extra = r#"[{"type":"user","name":"x","age":1,"occupation":"y","role":"z"}]"#;
        assert!(parse(extra).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"type":"admin","name":"Bruce Willis","age":64,"role":"World saver"}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let persons = source.load().unwrap();
        assert_eq!(persons, vec![Person::admin("Bruce Willis", 64, "World saver")]);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_dataset_error() {
        let err = JsonFileSource::new("/nonexistent/persons.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, PersonaError::Dataset(_)));
    }
}
