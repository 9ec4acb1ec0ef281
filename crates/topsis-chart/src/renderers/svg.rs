use std::fmt::Write;

use tracing::debug;

use crate::config::SvgChartConfig;
use crate::error::ChartError;
use crate::traits::ChartRenderer;
use crate::types::BarSeries;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
/// Fraction of each slot a bar occupies.
const BAR_FILL: f64 = 0.8;
/// Gap between a bar top and its annotation, in axis units.
const ANNOTATION_OFFSET: f64 = 0.02;
const Y_TICKS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

#[derive(Debug, Clone)]
pub struct SvgBarChart {
    config: SvgChartConfig,
}

impl SvgBarChart {
    pub const fn new(config: SvgChartConfig) -> Self {
        Self { config }
    }
}

struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn y(&self, value: f64) -> f64 {
        self.top + self.height * (1.0 - value)
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

impl ChartRenderer for SvgBarChart {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, series: &BarSeries) -> Result<String, ChartError> {
        if series.is_empty() {
            return Err(ChartError::Empty);
        }

        let style = &self.config.style;
        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        let plot = Plot {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.config.width,
            h = self.config.height,
        )?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-size="14" text-anchor="middle">{}</text>"#,
            width / 2.0,
            MARGIN_TOP / 2.0,
            escape(&style.title)
        )?;

        for tick in Y_TICKS {
            let y = plot.y(tick);
            if style.gridlines {
                writeln!(
                    out,
                    r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#b0b0b0" stroke-dasharray="4 4" stroke-opacity="0.7"/>"##,
                    plot.left,
                    plot.left + plot.width,
                )?;
            }
            writeln!(
                out,
                r#"<text x="{:.1}" y="{:.1}" font-size="10" text-anchor="end">{tick:.1}</text>"#,
                plot.left - 8.0,
                y + 3.5,
            )?;
        }

        #[allow(clippy::cast_precision_loss)]
        let slot = plot.width / series.len() as f64;
        let bar_width = slot * BAR_FILL;
        for (index, bar) in series.bars().iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let centre = plot.left + slot * (index as f64 + 0.5);
            let top = plot.y(bar.height());
            writeln!(
                out,
                r#"<rect x="{:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}" fill="{}"/>"#,
                centre - bar_width / 2.0,
                plot.bottom() - top,
                escape(style.colour(index)),
            )?;
            writeln!(
                out,
                r#"<text x="{centre:.1}" y="{:.1}" font-size="10" text-anchor="middle">{}</text>"#,
                plot.y((bar.height() + ANNOTATION_OFFSET).min(1.0 + ANNOTATION_OFFSET)),
                bar.annotation(),
            )?;
            writeln!(
                out,
                r#"<text x="{centre:.1}" y="{:.1}" font-size="10" text-anchor="middle">{}</text>"#,
                plot.bottom() + 18.0,
                escape(&bar.label),
            )?;
        }

        writeln!(
            out,
            r#"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="black"/>"#,
            l = plot.left,
            r = plot.left + plot.width,
            b = plot.bottom(),
        )?;
        writeln!(
            out,
            r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="black"/>"#,
            l = plot.left,
            t = plot.top,
            b = plot.bottom(),
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{}</text>"#,
            plot.left + plot.width / 2.0,
            height - 20.0,
            escape(&style.x_label)
        )?;
        writeln!(
            out,
            r#"<text x="20" y="{y:.1}" font-size="12" text-anchor="middle" transform="rotate(-90 20 {y:.1})">{}</text>"#,
            escape(&style.y_label),
            y = plot.top + plot.height / 2.0,
        )?;
        writeln!(out, "</svg>")?;

        debug!(bars = series.len(), bytes = out.len(), "rendered svg chart");
        Ok(out)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
