use crate::config::ChartRendererConfig;
use crate::renderers::{SvgBarChart, TextBarChart};
use crate::traits::ChartRenderer;

pub fn build_chart_renderer(cfg: ChartRendererConfig) -> Box<dyn ChartRenderer> {
    match cfg {
        ChartRendererConfig::Svg(c) => Box::new(SvgBarChart::new(c)),
        ChartRendererConfig::Text(c) => Box::new(TextBarChart::new(c)),
    }
}
