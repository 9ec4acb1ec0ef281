use crate::error::ChartError;
use crate::types::BarSeries;

pub trait ChartRenderer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Renders the whole chart into a single document.
    fn render(&self, series: &BarSeries) -> Result<String, ChartError>;
}
