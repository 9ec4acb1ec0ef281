use serde::Serialize;
use topsis_core::Evaluation;

#[derive(Debug, Clone, Serialize)]
pub struct RankedAlternative {
    pub label: String,
    pub closeness: f64,
    pub rank: usize,
}

/// What the CLI prints: one entry per input row, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub alternatives: Vec<RankedAlternative>,
    pub order: Vec<usize>,
    pub degenerate_rows: Vec<usize>,
}

impl Report {
    pub fn new(labels: &[String], evaluation: &Evaluation) -> Self {
        let alternatives = labels
            .iter()
            .zip(&evaluation.closeness)
            .zip(evaluation.ranking.ranks())
            .map(|((label, closeness), rank)| RankedAlternative {
                label: label.clone(),
                closeness: *closeness,
                rank: *rank,
            })
            .collect();
        Self {
            alternatives,
            order: evaluation.ranking.order().to_vec(),
            degenerate_rows: evaluation.degenerate_rows.clone(),
        }
    }

    pub fn ranks(&self) -> Vec<usize> {
        self.alternatives.iter().map(|a| a.rank).collect()
    }

    pub fn closeness(&self) -> Vec<f64> {
        self.alternatives.iter().map(|a| a.closeness).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.alternatives.iter().map(|a| a.label.as_str()).collect()
    }

    pub fn to_text(&self) -> String {
        let ranks = self
            .ranks()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let scores = self
            .closeness()
            .iter()
            .map(|c| format!("{c:.8}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Rankings of Models: [{ranks}]\nCloseness Scores: [{scores}]\n")
    }

    /// JSON has no NaN, so undefined scores serialize as `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use topsis_core::{DecisionMatrix, Impact, TopsisRanker};

    use super::*;

    fn report() -> Report {
        let data =
            DecisionMatrix::from_rows(&[[1.0, 5.0], [3.0, 5.0], [2.0, 5.0]]).expect("matrix");
        let eval = TopsisRanker::default()
            .evaluate(&data, &[1.0, 1.0], &[Impact::Benefit, Impact::Cost])
            .expect("evaluate");
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        Report::new(&labels, &eval)
    }

    #[test]
    fn keeps_input_order_with_ranks() {
        let report = report();
        assert_eq!(report.labels(), vec!["a", "b", "c"]);
        assert_eq!(report.ranks(), vec![3, 1, 2]);
        assert_eq!(report.order, vec![1, 2, 0]);
    }

    #[test]
    fn text_lists_ranks_then_scores() {
        assert_eq!(
            report().to_text(),
            "Rankings of Models: [3, 1, 2]\nCloseness Scores: [0.00000000, 1.00000000, 0.50000000]\n"
        );
    }

    #[test]
    fn json_round_trips_fields() {
        let value: serde_json::Value =
            serde_json::from_str(&report().to_json().expect("json")).expect("parse");
        assert_eq!(value["alternatives"][1]["label"], "b");
        assert_eq!(value["alternatives"][1]["rank"], 1);
        assert_eq!(value["order"][0], 1);
    }
}
