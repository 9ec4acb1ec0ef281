use serde::Serialize;

use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub score: f64,
}

impl Bar {
    /// Bar height on the fixed `[0, 1]` axis. NaN draws as an empty bar.
    pub fn height(&self) -> f64 {
        if self.score.is_nan() {
            0.0
        } else {
            self.score.clamp(0.0, 1.0)
        }
    }

    /// Annotation text: the score rounded to two decimals.
    pub fn annotation(&self) -> String {
        if self.score.is_nan() {
            "NaN".to_string()
        } else {
            format!("{:.2}", self.score)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn from_parts<S>(labels: &[S], scores: &[f64]) -> Result<Self, ChartError>
    where
        S: AsRef<str>,
    {
        if labels.len() != scores.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                scores: scores.len(),
            });
        }
        if labels.is_empty() {
            return Err(ChartError::Empty);
        }

        let bars = labels
            .iter()
            .zip(scores)
            .map(|(label, score)| Bar {
                label: label.as_ref().to_string(),
                score: *score,
            })
            .collect();
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_labels_with_scores() {
        let series = BarSeries::from_parts(&["a", "b"], &[0.25, 0.755]).expect("series");
        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[1].label, "b");
        assert_eq!(series.bars()[1].annotation(), "0.76");
    }

    #[test]
    fn rejects_mismatched_or_empty_input() {
        assert!(matches!(
            BarSeries::from_parts(&["a"], &[0.1, 0.2]),
            Err(ChartError::LengthMismatch {
                labels: 1,
                scores: 2
            })
        ));
        let no_labels: [&str; 0] = [];
        assert!(matches!(
            BarSeries::from_parts(&no_labels, &[]),
            Err(ChartError::Empty)
        ));
    }

    #[test]
    fn height_is_clamped_to_axis() {
        let bar = |score| Bar {
            label: "x".to_string(),
            score,
        };
        assert_eq!(bar(1.4).height(), 1.0);
        assert_eq!(bar(-0.2).height(), 0.0);
        assert_eq!(bar(f64::NAN).height(), 0.0);
        assert_eq!(bar(f64::NAN).annotation(), "NaN");
        assert_eq!(bar(1.4).annotation(), "1.40");
    }
}
