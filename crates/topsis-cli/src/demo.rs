use topsis_core::{DecisionMatrix, Impact, TopsisError};

/// A labelled decision problem ready to hand to the ranker.
#[derive(Debug, Clone)]
pub struct Problem {
    pub labels: Vec<String>,
    pub data: DecisionMatrix,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
}

/// Three models scored on accuracy (benefit), latency (cost) and
/// perplexity (cost).
pub fn model_selection() -> Result<Problem, TopsisError> {
    let data = DecisionMatrix::from_rows(&[
        [0.85, 70.0, 2.0],
        [0.56, 40.0, 9.0],
        [0.35, 35.0, 5.0],
    ])?;
    Ok(Problem {
        labels: (1..=data.rows()).map(|i| format!("Model {i}")).collect(),
        data,
        weights: vec![0.3, 0.2, 0.4],
        impacts: topsis_core::parse_impacts("+--")?,
    })
}
