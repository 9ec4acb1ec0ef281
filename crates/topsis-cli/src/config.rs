use std::path::PathBuf;

use topsis_core::DegeneratePolicy;

use crate::error::CliError;

pub const ENV_OUTPUT: &str = "TOPSIS_OUTPUT";
pub const ENV_DEGENERATE: &str = "TOPSIS_DEGENERATE";
pub const ENV_CHART: &str = "TOPSIS_CHART";
pub const ENV_CHART_PATH: &str = "TOPSIS_CHART_PATH";
pub const ENV_LOG: &str = "TOPSIS_LOG";

const DEFAULT_CHART_PATH: &str = "topsis-scores.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTarget {
    #[default]
    None,
    Text,
    Svg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub output: OutputFormat,
    pub degenerate: DegeneratePolicy,
    pub chart: ChartTarget,
    pub chart_path: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            degenerate: DegeneratePolicy::Midpoint,
            chart: ChartTarget::None,
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset or blank variables
    /// fall back to defaults; unknown values are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_ascii_lowercase())
                .filter(|v| !v.is_empty())
        };

        let output = match read(ENV_OUTPUT).as_deref() {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => return Err(invalid(ENV_OUTPUT, other, "text or json")),
        };
        let degenerate = match read(ENV_DEGENERATE).as_deref() {
            None | Some("midpoint") => DegeneratePolicy::Midpoint,
            Some("nan" | "propagate") => DegeneratePolicy::Propagate,
            Some("reject" | "error") => DegeneratePolicy::Reject,
            Some(other) => return Err(invalid(ENV_DEGENERATE, other, "midpoint, nan or reject")),
        };
        let chart = match read(ENV_CHART).as_deref() {
            None | Some("none" | "off") => ChartTarget::None,
            Some("text") => ChartTarget::Text,
            Some("svg") => ChartTarget::Svg,
            Some(other) => return Err(invalid(ENV_CHART, other, "none, text or svg")),
        };
        let chart_path = lookup(ENV_CHART_PATH)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CHART_PATH), PathBuf::from);

        Ok(Self {
            output,
            degenerate,
            chart,
            chart_path,
        })
    }
}

fn invalid(name: &str, value: &str, expected: &str) -> CliError {
    CliError::Config(format!("{name} must be {expected}, got {value:?}"))
}
