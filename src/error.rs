use thiserror::Error;

pub type ReconResult<T> = Result<T, ReconError>;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Cannot resolve cell color: {0}")]
    UnresolvedColor(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Report error: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<calamine::Error> for ReconError {
    fn from(e: calamine::Error) -> Self {
        ReconError::Workbook(e.to_string())
    }
}
