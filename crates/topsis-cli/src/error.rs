use thiserror::Error;

use topsis_chart::ChartError;
use topsis_core::TopsisError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{labels} labels given for {rows} alternatives")]
    LabelMismatch { labels: usize, rows: usize },

    #[error("ranking error: {0}")]
    Topsis(#[from] TopsisError),

    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
