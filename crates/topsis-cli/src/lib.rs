pub mod config;
pub mod demo;
pub mod error;
pub mod report;

use std::fs;
use std::io::Write;

use topsis_chart::{
    build_chart_renderer, BarSeries, ChartRendererConfig, ChartStyle, SvgChartConfig,
    TextChartConfig,
};
use topsis_core::{RankOptions, TopsisRanker};
use tracing::info;

pub use config::{ChartTarget, CliConfig, OutputFormat};
pub use demo::Problem;
pub use error::CliError;
pub use report::{RankedAlternative, Report};

/// Ranks `problem`, writes the report (and a text chart, if asked) to `out`,
/// and writes an SVG chart to `config.chart_path` when configured.
pub fn run<W: Write>(
    config: &CliConfig,
    problem: &Problem,
    out: &mut W,
) -> Result<Report, CliError> {
    if problem.labels.len() != problem.data.rows() {
        return Err(CliError::LabelMismatch {
            labels: problem.labels.len(),
            rows: problem.data.rows(),
        });
    }

    let ranker = TopsisRanker::new(RankOptions {
        degenerate: config.degenerate,
    });
    let evaluation = ranker.evaluate(&problem.data, &problem.weights, &problem.impacts)?;
    let report = Report::new(&problem.labels, &evaluation);
    info!(
        alternatives = problem.data.rows(),
        criteria = problem.data.cols(),
        best = ?evaluation.ranking.best(),
        "ranked alternatives"
    );

    match config.output {
        OutputFormat::Text => out.write_all(report.to_text().as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    let chart_config = match config.chart {
        ChartTarget::None => None,
        ChartTarget::Text => Some(ChartRendererConfig::Text(TextChartConfig::new(
            ChartStyle::default(),
        ))),
        ChartTarget::Svg => Some(ChartRendererConfig::Svg(SvgChartConfig::new(
            ChartStyle::default(),
        ))),
    };
    if let Some(chart_config) = chart_config {
        let renderer = build_chart_renderer(chart_config);
        let series = BarSeries::from_parts(&problem.labels, &evaluation.closeness)?;
        let rendered = renderer.render(&series)?;
        if config.chart == ChartTarget::Svg {
            fs::write(&config.chart_path, rendered)?;
            info!(path = %config.chart_path.display(), "wrote svg chart");
        } else {
            out.write_all(rendered.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(report)
}
