use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart has no bars")]
    Empty,

    #[error("label count {labels} does not match score count {scores}")]
    LengthMismatch { labels: usize, scores: usize },

    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}
