use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{column}' is missing from the input header")]
    MissingColumn { column: String },

    #[error("Unparseable order date '{value}' on line {line}")]
    InvalidDate { line: u64, value: String },

    #[error("Negative {column} value {value} on line {line}")]
    NegativeValue {
        line: u64,
        column: &'static str,
        value: f64,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// Input file missing or unreadable.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io { .. } => true,
            Self::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }

    /// Input file readable but malformed: missing column, bad date, bad number.
    pub fn is_parse(&self) -> bool {
        match self {
            Self::MissingColumn { .. }
            | Self::InvalidDate { .. }
            | Self::NegativeValue { .. } => true,
            Self::Csv(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
