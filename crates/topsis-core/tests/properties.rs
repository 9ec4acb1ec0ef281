use proptest::prelude::*;
use topsis_core::{rank, DecisionMatrix, Impact};

fn impact() -> impl Strategy<Value = Impact> {
    prop_oneof![Just(Impact::Benefit), Just(Impact::Cost)]
}

/// Strictly positive cells keep every column norm non-zero.
fn problem() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<Impact>)> {
    (2usize..7, 1usize..5).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(0.1f64..100.0, cols), rows),
            prop::collection::vec(0.05f64..1.0, cols),
            prop::collection::vec(impact(), cols),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn ranking_is_a_permutation((rows, weights, impacts) in problem()) {
        let data = DecisionMatrix::from_rows(&rows).expect("valid matrix");
        let (ranking, closeness) = rank(&data, &weights, &impacts).expect("rank");

        prop_assert_eq!(ranking.len(), rows.len());
        prop_assert_eq!(closeness.len(), rows.len());

        let mut ranks = ranking.ranks().to_vec();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=rows.len()).collect::<Vec<_>>());

        let mut order = ranking.order().to_vec();
        order.sort_unstable();
        prop_assert_eq!(order, (0..rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn closeness_within_unit_interval((rows, weights, impacts) in problem()) {
        let data = DecisionMatrix::from_rows(&rows).expect("valid matrix");
        let (_, closeness) = rank(&data, &weights, &impacts).expect("rank");
        for c in closeness {
            prop_assert!((0.0..=1.0).contains(&c), "closeness {c} outside [0, 1]");
        }
    }

    #[test]
    fn best_and_worst_get_extreme_ranks((rows, weights, impacts) in problem()) {
        let data = DecisionMatrix::from_rows(&rows).expect("valid matrix");
        let (ranking, closeness) = rank(&data, &weights, &impacts).expect("rank");

        let max = closeness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = closeness.iter().copied().fold(f64::INFINITY, f64::min);
        let best = ranking.best().expect("non-empty");
        prop_assert_eq!(closeness[best], max);
        prop_assert_eq!(ranking.rank_of(best), Some(1));

        let worst = *ranking.order().last().expect("non-empty");
        prop_assert_eq!(closeness[worst], min);
        prop_assert_eq!(ranking.rank_of(worst), Some(rows.len()));
    }

    #[test]
    fn weight_scaling_preserves_closeness(
        (rows, weights, impacts) in problem(),
        factor in 0.1f64..50.0,
    ) {
        let data = DecisionMatrix::from_rows(&rows).expect("valid matrix");
        let scaled: Vec<f64> = weights.iter().map(|w| w * factor).collect();

        let (_, base) = rank(&data, &weights, &impacts).expect("rank");
        let (_, other) = rank(&data, &scaled, &impacts).expect("rank scaled");
        for (a, b) in base.iter().zip(&other) {
            prop_assert!((a - b).abs() < 1e-9, "closeness moved: {base:?} vs {other:?}");
        }
    }

    #[test]
    fn flipping_constant_column_keeps_ranking(
        (mut rows, mut weights, mut impacts) in problem(),
        constant in 0.5f64..10.0,
        weight in 0.05f64..1.0,
    ) {
        for row in &mut rows {
            row.push(constant);
        }
        weights.push(weight);
        impacts.push(Impact::Benefit);
        let data = DecisionMatrix::from_rows(&rows).expect("valid matrix");
        let (benefit_ranking, benefit) = rank(&data, &weights, &impacts).expect("rank");

        if let Some(last) = impacts.last_mut() {
            *last = Impact::Cost;
        }
        let (cost_ranking, cost) = rank(&data, &weights, &impacts).expect("rank flipped");

        prop_assert_eq!(benefit_ranking, cost_ranking);
        prop_assert_eq!(benefit, cost);
    }
}
