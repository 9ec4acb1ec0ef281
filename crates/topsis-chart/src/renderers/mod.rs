pub mod svg;
pub mod text;

pub use svg::SvgBarChart;
pub use text::TextBarChart;
