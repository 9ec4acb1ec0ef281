use serde::Serialize;

use crate::error::TopsisError;

/// Dense row-major matrix of alternatives (rows) by criteria (columns).
///
/// Shape and finiteness are checked once in [`DecisionMatrix::from_rows`];
/// every accessor after that can rely on a rectangular, non-empty layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DecisionMatrix {
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, TopsisError>
    where
        R: AsRef<[f64]>,
    {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(TopsisError::EmptyMatrix);
        }

        let mut values = Vec::with_capacity(rows.len() * cols);
        for (row, raw) in rows.iter().enumerate() {
            let raw = raw.as_ref();
            if raw.len() != cols {
                return Err(TopsisError::RaggedRow {
                    row,
                    expected: cols,
                    found: raw.len(),
                });
            }
            if let Some(column) = raw.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::NonFiniteValue { row, column });
            }
            values.extend_from_slice(raw);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.cols)
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(j).step_by(self.cols).copied()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + column).copied()
    }

    /// Euclidean norm of every column, in column order. Accumulates with
    /// `hypot` so tiny or huge finite cells neither underflow nor overflow.
    pub fn column_norms(&self) -> Vec<f64> {
        (0..self.cols)
            .map(|j| self.column(j).fold(0.0, f64::hypot))
            .collect()
    }

    /// `(min, max)` of every column, in column order.
    pub fn column_extrema(&self) -> Vec<(f64, f64)> {
        (0..self.cols)
            .map(|j| {
                self.column(j).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                })
            })
            .collect()
    }

    /// Applies `f(column, value)` to every cell, keeping the shape.
    pub(crate) fn map_columns(&self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        let cols = self.cols;
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(idx, v)| f(idx % cols, *v))
            .collect();
        Self {
            rows: self.rows,
            cols,
            values,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.row_iter().map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_input() {
        let empty: [[f64; 0]; 0] = [];
        assert_eq!(
            DecisionMatrix::from_rows(&empty),
            Err(TopsisError::EmptyMatrix)
        );
        assert_eq!(
            DecisionMatrix::from_rows(&[Vec::<f64>::new()]),
            Err(TopsisError::EmptyMatrix)
        );

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            DecisionMatrix::from_rows(&ragged),
            Err(TopsisError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_non_finite_cells() {
        let rows = [[1.0, 2.0], [f64::NAN, 4.0]];
        assert_eq!(
            DecisionMatrix::from_rows(&rows),
            Err(TopsisError::NonFiniteValue { row: 1, column: 0 })
        );
    }

    #[test]
    fn column_reductions() {
        let m = DecisionMatrix::from_rows(&[[3.0, -1.0], [4.0, 2.0]]).expect("matrix");
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![-1.0, 2.0]);
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.get(2, 0), None);

        let norms = m.column_norms();
        assert!((norms[0] - 5.0).abs() < 1e-12);
        assert!((norms[1] - 5.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(m.column_extrema(), vec![(3.0, 4.0), (-1.0, 2.0)]);
    }

    #[test]
    fn column_norms_survive_extreme_magnitudes() {
        let m = DecisionMatrix::from_rows(&[[1e-170, 1e160], [3e-170, 3e160]]).expect("matrix");
        let norms = m.column_norms();
        let expected = 10.0_f64.sqrt();
        assert!((norms[0] / 1e-170 - expected).abs() < 1e-9, "{norms:?}");
        assert!((norms[1] / 1e160 - expected).abs() < 1e-9, "{norms:?}");
    }

    #[test]
    fn map_columns_sees_column_index() {
        let m = DecisionMatrix::from_rows(&[[1.0, 1.0], [2.0, 2.0]]).expect("matrix");
        let scaled = m.map_columns(|j, v| v * (j + 1) as f64);
        assert_eq!(scaled.to_rows(), vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
    }
}
