#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bar fill colours, cycled when there are more bars than entries.
    pub palette: Vec<String>,
    pub gridlines: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "TOPSIS Scores for Models".to_string(),
            x_label: "Models".to_string(),
            y_label: "TOPSIS Score".to_string(),
            palette: vec![
                "#4CAF50".to_string(),
                "#FFC107".to_string(),
                "#2196F3".to_string(),
            ],
            gridlines: true,
        }
    }
}

impl ChartStyle {
    pub fn colour(&self, index: usize) -> &str {
        match self.palette.len() {
            0 => "#808080",
            n => self.palette.get(index % n).map_or("#808080", String::as_str),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SvgChartConfig {
    pub style: ChartStyle,
    pub width: u32,
    pub height: u32,
}

impl SvgChartConfig {
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            width: 800,
            height: 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextChartConfig {
    pub style: ChartStyle,
    /// Number of cells a score of 1.0 fills.
    pub bar_width: usize,
}

impl TextChartConfig {
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            bar_width: 40,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ChartRendererConfig {
    Svg(SvgChartConfig),
    Text(TextChartConfig),
}
