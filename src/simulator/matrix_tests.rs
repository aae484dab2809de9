use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ChartSpecError;
use crate::model::MatrixCell;

use super::*;

fn params(rows: &[&str], cols: &[&str], baseline: i64, jitter: i64) -> MatrixParams {
    MatrixParams {
        row_categories: rows.iter().map(|&s| s.to_string()).collect(),
        col_categories: cols.iter().map(|&s| s.to_string()).collect(),
        baseline,
        jitter_range: jitter,
        ..MatrixParams::default()
    }
}

#[test]
fn boost_formula_matches_exactly_with_zero_jitter() {
    // Weekend boost 20 on Sat, evening boost 25 on 20:00, clamp untouched.
    let params = params(&["Mon", "Sat"], &["10:00", "20:00"], 30, 0);
    let mut rng = StdRng::seed_from_u64(0);
    let cells = generate_matrix(&params, &mut rng).unwrap();
    assert_eq!(
        cells,
        vec![
            MatrixCell::new(0, 0, 30),
            MatrixCell::new(0, 1, 55),
            MatrixCell::new(1, 0, 50),
            MatrixCell::new(1, 1, 75),
        ]
    );
}

#[test]
fn values_are_clamped_into_range_once_after_all_boosts() {
    let high = params(&["Sat"], &["20:00"], 95, 0);
    let mut rng = StdRng::seed_from_u64(0);
    let cells = generate_matrix(&high, &mut rng).unwrap();
    // 95 + 20 + 25 saturates at 100.
    assert_eq!(cells[0].value, 100);

    let low = params(&["Mon"], &["10:00"], -40, 0);
    let cells = generate_matrix(&low, &mut rng).unwrap();
    assert_eq!(cells[0].value, 0);
}

#[test]
fn jitter_stays_within_half_width() {
    let params = params(&["Mon"], &["10:00"], 50, 10);
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = generate_matrix(&params, &mut rng).unwrap();
        assert!((40..=60).contains(&cells[0].value), "got {}", cells[0].value);
    }
}

#[test]
fn grid_is_row_major_and_complete() {
    let params = params(&["Mon", "Tue", "Sat"], &["8:00", "12:00"], 50, 0);
    let mut rng = StdRng::seed_from_u64(0);
    let cells = generate_matrix(&params, &mut rng).unwrap();
    let coords: Vec<(usize, usize)> = cells.iter().map(|c| (c.row, c.col)).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
}

#[test]
fn empty_categories_yield_empty_grid() {
    let mut rng = StdRng::seed_from_u64(0);
    let no_rows = params(&[], &["10:00"], 50, 0);
    assert!(generate_matrix(&no_rows, &mut rng).unwrap().is_empty());

    let no_cols = params(&["Mon"], &[], 50, 0);
    assert!(generate_matrix(&no_cols, &mut rng).unwrap().is_empty());
}

#[test]
fn negative_jitter_range_is_rejected() {
    let params = params(&["Mon"], &["10:00"], 50, -1);
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_matrix(&params, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        ChartSpecError::InvalidParameter { name: "jitter_range", .. }
    ));
}

#[test]
fn evening_window_respects_configured_start_hour() {
    let mut p = params(&["Mon"], &["16:00"], 30, 0);
    p.evening_start_hour = 16;
    let mut rng = StdRng::seed_from_u64(0);
    let cells = generate_matrix(&p, &mut rng).unwrap();
    assert_eq!(cells[0].value, 55);
}

#[test]
fn non_time_labels_never_fall_in_the_evening_window() {
    let params = params(&["Mon"], &["late"], 30, 0);
    let mut rng = StdRng::seed_from_u64(0);
    let cells = generate_matrix(&params, &mut rng).unwrap();
    assert_eq!(cells[0].value, 30);
}

#[test]
fn default_grid_covers_week_by_two_hour_slots() {
    let params = MatrixParams::default();
    assert_eq!(params.row_categories.len(), 7);
    assert_eq!(params.col_categories, vec![
        "8:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00"
    ]);
    let mut rng = StdRng::seed_from_u64(0);
    let cells = generate_matrix(&params, &mut rng).unwrap();
    assert_eq!(cells.len(), 49);
    assert!(cells.iter().all(|c| (0..=100).contains(&c.value)));
}
