use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TopsisError;
use crate::impact::Impact;
use crate::matrix::DecisionMatrix;

/// Closeness assigned under [`DegeneratePolicy::Midpoint`].
pub const MIDPOINT_CLOSENESS: f64 = 0.5;

/// What to do with an alternative whose distances to the ideal and the
/// negative-ideal solutions are both zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Score the alternative [`MIDPOINT_CLOSENESS`] and log a warning.
    #[default]
    Midpoint,
    /// Keep the undefined `0 / 0` score as NaN. NaN sorts last.
    Propagate,
    /// Fail with [`TopsisError::DegenerateAlternative`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    pub degenerate: DegeneratePolicy,
}

/// Result of sorting alternatives by descending closeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    order: Vec<usize>,
    ranks: Vec<usize>,
}

impl Ranking {
    /// Stable descending sort, so equal scores keep input row order.
    pub fn from_closeness(closeness: &[f64]) -> Self {
        let mut indexed: Vec<(usize, f64)> = closeness.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| descending_nan_last(a.1, b.1));

        let order: Vec<usize> = indexed.into_iter().map(|(row, _)| row).collect();
        let mut ranks = vec![0; order.len()];
        for (position, row) in order.iter().enumerate() {
            if let Some(slot) = ranks.get_mut(*row) {
                *slot = position + 1;
            }
        }
        Self { order, ranks }
    }

    /// 1-indexed rank of each input row, aligned with the input order.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Row indices from best to worst.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn best(&self) -> Option<usize> {
        self.order.first().copied()
    }

    pub fn rank_of(&self, row: usize) -> Option<usize> {
        self.ranks.get(row).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// Every intermediate of one TOPSIS pass.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub norms: Vec<f64>,
    pub weighted: DecisionMatrix,
    pub ideal: Vec<f64>,
    pub negative_ideal: Vec<f64>,
    pub distance_to_ideal: Vec<f64>,
    pub distance_to_negative_ideal: Vec<f64>,
    /// Aligned with the input rows, not with the ranking.
    pub closeness: Vec<f64>,
    pub ranking: Ranking,
    /// Rows whose closeness was undefined and resolved by the policy.
    pub degenerate_rows: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TopsisRanker {
    options: RankOptions,
}

impl TopsisRanker {
    pub const fn new(options: RankOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> RankOptions {
        self.options
    }

    pub fn evaluate(
        &self,
        data: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<Evaluation, TopsisError> {
        check_dimensions(data, weights, impacts)?;

        let norms = data.column_norms();
        if let Some(column) = norms.iter().position(|n| *n <= 0.0 || !n.is_finite()) {
            return Err(TopsisError::DegenerateColumn { column });
        }

        let weighted = data.map_columns(|j, v| match (norms.get(j), weights.get(j)) {
            (Some(norm), Some(weight)) => v / norm * weight,
            _ => f64::NAN,
        });

        let (ideal, negative_ideal): (Vec<f64>, Vec<f64>) = weighted
            .column_extrema()
            .into_iter()
            .zip(impacts)
            .map(|((lo, hi), impact)| (impact.ideal_of(lo, hi), impact.negative_ideal_of(lo, hi)))
            .unzip();
        debug!(?norms, ?ideal, ?negative_ideal, "computed per-column scalars");

        let distance_to_ideal: Vec<f64> = weighted
            .row_iter()
            .map(|row| euclidean(row, &ideal))
            .collect();
        let distance_to_negative_ideal: Vec<f64> = weighted
            .row_iter()
            .map(|row| euclidean(row, &negative_ideal))
            .collect();

        let mut closeness = Vec::with_capacity(data.rows());
        let mut degenerate_rows = Vec::new();
        for (row, (d_pos, d_neg)) in distance_to_ideal
            .iter()
            .zip(&distance_to_negative_ideal)
            .enumerate()
        {
            let total = d_pos + d_neg;
            if total > 0.0 {
                closeness.push(d_neg / total);
                continue;
            }

            degenerate_rows.push(row);
            match self.options.degenerate {
                DegeneratePolicy::Midpoint => {
                    warn!(row, "alternative matches ideal and negative-ideal; scoring as midpoint");
                    closeness.push(MIDPOINT_CLOSENESS);
                }
                DegeneratePolicy::Propagate => {
                    warn!(row, "alternative matches ideal and negative-ideal; closeness is NaN");
                    closeness.push(f64::NAN);
                }
                DegeneratePolicy::Reject => {
                    return Err(TopsisError::DegenerateAlternative { row });
                }
            }
        }

        let ranking = Ranking::from_closeness(&closeness);
        debug!(order = ?ranking.order(), ?closeness, "ranked alternatives");

        Ok(Evaluation {
            norms,
            weighted,
            ideal,
            negative_ideal,
            distance_to_ideal,
            distance_to_negative_ideal,
            closeness,
            ranking,
            degenerate_rows,
        })
    }

    pub fn rank(
        &self,
        data: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<(Ranking, Vec<f64>), TopsisError> {
        let evaluation = self.evaluate(data, weights, impacts)?;
        Ok((evaluation.ranking, evaluation.closeness))
    }
}

/// Ranks `data` with the default options.
pub fn rank(
    data: &DecisionMatrix,
    weights: &[f64],
    impacts: &[Impact],
) -> Result<(Ranking, Vec<f64>), TopsisError> {
    TopsisRanker::default().rank(data, weights, impacts)
}

fn check_dimensions(
    data: &DecisionMatrix,
    weights: &[f64],
    impacts: &[Impact],
) -> Result<(), TopsisError> {
    let expected = data.cols();
    if weights.len() != expected {
        return Err(TopsisError::DimensionMismatch {
            what: "weights",
            expected,
            found: weights.len(),
        });
    }
    if impacts.len() != expected {
        return Err(TopsisError::DimensionMismatch {
            what: "impacts",
            expected,
            found: impacts.len(),
        });
    }
    if let Some((column, value)) = weights
        .iter()
        .copied()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || *w < 0.0)
    {
        return Err(TopsisError::InvalidWeight { column, value });
    }
    Ok(())
}

fn euclidean(row: &[f64], target: &[f64]) -> f64 {
    row.iter()
        .zip(target)
        .map(|(v, t)| v - t)
        .fold(0.0, f64::hypot)
}
