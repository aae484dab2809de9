//! Property tests for the generation invariants: matrix values stay
//! clamped under extreme parameters, and networks never contain
//! self-loops.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use chartspec::simulator::{MatrixParams, NetworkParams, generate_matrix, generate_network};
use chartspec::spec::build_matrix_spec;

proptest! {
    #[test]
    fn matrix_values_always_land_in_range(
        baseline in -500_i64..500,
        weekend_boost in -200_i64..200,
        evening_boost in -200_i64..200,
        jitter_range in 0_i64..300,
        seed in any::<u64>(),
    ) {
        let params = MatrixParams {
            row_categories: vec!["Mon".to_string(), "Sat".to_string(), "Sun".to_string()],
            col_categories: vec!["8:00".to_string(), "14:00".to_string(), "20:00".to_string()],
            baseline,
            weekend_boost,
            evening_boost,
            jitter_range,
            ..MatrixParams::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = generate_matrix(&params, &mut rng).unwrap();

        prop_assert_eq!(cells.len(), 9);
        for cell in &cells {
            prop_assert!((0..=100).contains(&cell.value), "cell value {} escaped", cell.value);
        }
    }

    #[test]
    fn generated_matrices_always_pass_the_builder(
        baseline in -500_i64..500,
        jitter_range in 0_i64..300,
        seed in any::<u64>(),
    ) {
        let params = MatrixParams {
            baseline,
            jitter_range,
            ..MatrixParams::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = generate_matrix(&params, &mut rng).unwrap();
        prop_assert!(
            build_matrix_spec(&params.row_categories, &params.col_categories, &cells).is_ok()
        );
    }

    #[test]
    fn networks_never_contain_self_loops(
        node_count in 0_usize..40,
        edge_count in 0_usize..300,
        seed in any::<u64>(),
    ) {
        let params = NetworkParams { node_count, edge_count };
        let mut rng = StdRng::seed_from_u64(seed);
        let data = generate_network(&params, &mut rng);

        prop_assert_eq!(data.nodes.len(), node_count);
        prop_assert!(data.edges.len() <= edge_count);
        for edge in &data.edges {
            prop_assert_ne!(&edge.source, &edge.target);
        }
    }
}
