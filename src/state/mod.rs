//! Reading and writing the caller-owned scoring input
//!
//! Files ending in `.json` are JSON; anything else is YAML.

use crate::checklist::ScoringInput;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to read state file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write state file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML state: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization used for a state file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    Yaml,
    Json,
}

impl StateFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StateFormat::Json,
            _ => StateFormat::Yaml,
        }
    }
}

/// Parse a scoring input from a string
pub fn parse_input(content: &str, format: StateFormat) -> Result<ScoringInput, StateError> {
    // An empty YAML document is the empty input
    if content.trim().is_empty() {
        return Ok(ScoringInput::default());
    }
    let input = match format {
        StateFormat::Yaml => serde_yaml::from_str(content)?,
        StateFormat::Json => serde_json::from_str(content)?,
    };
    Ok(input)
}

/// Serialize a scoring input
pub fn format_input(input: &ScoringInput, format: StateFormat) -> Result<String, StateError> {
    let content = match format {
        StateFormat::Yaml => serde_yaml::to_string(input)?,
        StateFormat::Json => serde_json::to_string_pretty(input)?,
    };
    Ok(content)
}

/// Load a scoring input from a state file
pub fn load_input(path: &Path) -> Result<ScoringInput, StateError> {
    let content = std::fs::read_to_string(path).map_err(|source| StateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let input = parse_input(&content, StateFormat::for_path(path))?;
    debug!(
        "Loaded {} ({} ticked, {} chars of text)",
        path.display(),
        input.checklist.ticked_count(),
        input.text.chars().count()
    );
    Ok(input)
}

/// Write a scoring input to a state file, creating parent directories
pub fn save_input(path: &Path, input: &ScoringInput) -> Result<(), StateError> {
    let content = format_input(input, StateFormat::for_path(path))?;
    let write_err = |source| StateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)?;
    debug!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{ChecklistItem, ChecklistState};

    #[test]
    fn test_format_for_path() {
        assert_eq!(StateFormat::for_path(Path::new("a.json")), StateFormat::Json);
        assert_eq!(StateFormat::for_path(Path::new("a.JSON")), StateFormat::Json);
        assert_eq!(StateFormat::for_path(Path::new("a.yaml")), StateFormat::Yaml);
        assert_eq!(StateFormat::for_path(Path::new("state")), StateFormat::Yaml);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
checklist:
  dose-present: true
  freqPresent: true
  not-a-thing: true
text: "Take twice daily"
"#;
        let input = parse_input(yaml, StateFormat::Yaml).unwrap();
        assert!(input.checklist.is_ticked(ChecklistItem::DosePresent));
        assert!(input.checklist.is_ticked(ChecklistItem::FrequencyPresent));
        assert_eq!(input.checklist.ticked_count(), 2);
        assert_eq!(input.text, "Take twice daily");
    }

    #[test]
    fn test_parse_missing_sections() {
        let input = parse_input("text: hello\n", StateFormat::Yaml).unwrap();
        assert_eq!(input.checklist, ChecklistState::new());

        let input = parse_input("", StateFormat::Yaml).unwrap();
        assert_eq!(input, ScoringInput::default());
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        let err = parse_input("{not json", StateFormat::Json).unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }

    #[test]
    fn test_format_yaml_lists_every_item() {
        let yaml = format_input(&ScoringInput::default(), StateFormat::Yaml).unwrap();
        for item in ChecklistItem::ALL {
            assert!(yaml.contains(&format!("{}: false", item.id())), "{}", item);
        }
    }
}
