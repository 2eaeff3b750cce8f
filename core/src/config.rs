use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "Auto Sales data.csv";

/// Day-first layouts tried in order. ISO dates are unambiguous and last.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            delimiter: default_delimiter(),
            date_formats: default_date_formats(),
        }
    }
}

impl ReportConfig {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn validate(&self) -> ReportResult<()> {
        self.delimiter_byte()?;
        if self.date_formats.is_empty() {
            return Err(ReportError::Config("date_formats must not be empty".into()));
        }
        Ok(())
    }

    /// The csv reader takes a single byte delimiter.
    pub fn delimiter_byte(&self) -> ReportResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ReportError::Config(format!(
                "delimiter '{}' is not a single ASCII character",
                self.delimiter
            )))
        }
    }
}
