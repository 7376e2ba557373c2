//! Output configuration — defaults, optional JSON file, command-line overrides.

use acc_compactor::adapter::DEFAULT_SEPARATOR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub separator: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.into(),
            format: OutputFormat::Text,
        }
    }
}

impl OutputConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, separator: Option<String>, json: bool) -> Self {
        if let Some(sep) = separator {
            self.separator = sep;
        }
        if json {
            self.format = OutputFormat::Json;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = OutputConfig::default();
        assert_eq!(c.separator, ", ");
        assert_eq!(c.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_json() {
        let c = OutputConfig::from_json(r#"{"format":"json"}"#).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
        assert_eq!(c.separator, ", ");
    }

    #[test]
    fn test_bad_json() {
        assert!(OutputConfig::from_json(r#"{"format":"yaml"}"#).is_err());
    }

    #[test]
    fn test_overrides() {
        let c = OutputConfig::default().with_overrides(Some(" ".into()), true);
        assert_eq!(c.separator, " ");
        assert_eq!(c.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let c = OutputConfig::from_json(r#"{"separator":";"}"#).unwrap().with_overrides(None, false);
        assert_eq!(c.separator, ";");
        assert_eq!(c.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_file() {
        let err = OutputConfig::load(Path::new("/nonexistent/acc-compact.json")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
