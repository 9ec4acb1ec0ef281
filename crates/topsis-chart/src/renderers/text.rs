use std::fmt::Write;

use crate::config::TextChartConfig;
use crate::error::ChartError;
use crate::traits::ChartRenderer;
use crate::types::BarSeries;

const FILLED: char = '#';
const EMPTY: char = '.';

#[derive(Debug, Clone)]
pub struct TextBarChart {
    config: TextChartConfig,
}

impl TextBarChart {
    pub const fn new(config: TextChartConfig) -> Self {
        Self { config }
    }

    fn cells(&self, height: f64) -> usize {
        let width = self.config.bar_width;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = (height * width as f64).round() as usize;
        filled.min(width)
    }
}

impl ChartRenderer for TextBarChart {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, series: &BarSeries) -> Result<String, ChartError> {
        if series.is_empty() {
            return Err(ChartError::Empty);
        }

        let style = &self.config.style;
        let label_width = series
            .bars()
            .iter()
            .map(|bar| bar.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(style.x_label.chars().count());

        let mut out = String::new();
        writeln!(out, "{}", style.title)?;
        writeln!(
            out,
            "{:<label_width$} | {} (0 .. 1)",
            style.x_label, style.y_label
        )?;
        for bar in series.bars() {
            let filled = self.cells(bar.height());
            let rest = self.config.bar_width - filled;
            writeln!(
                out,
                "{:<label_width$} | {}{} {}",
                bar.label,
                FILLED.to_string().repeat(filled),
                EMPTY.to_string().repeat(rest),
                bar.annotation(),
            )?;
        }
        Ok(out)
    }
}
