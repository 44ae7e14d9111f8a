use super::*;

use crate::metrics::DISPLAY_NAMES;

fn wide_fixture() -> Table {
    Table {
        columns: vec![
            "TaskName".to_string(),
            "ModelVersion".to_string(),
            "CollaboratorName".to_string(),
            "MeanBinaryDICE".to_string(),
            "binary_DICE_WT".to_string(),
            "binary_DICE_TC".to_string(),
            "binary_DICE_ET".to_string(),
        ],
        rows: vec![
            vec![
                "shared_model_validation".to_string(),
                "0".to_string(),
                "institution_11".to_string(),
                "0.70".to_string(),
                "0.80".to_string(),
                "0.65".to_string(),
                "0.60".to_string(),
            ],
            vec![
                "shared_model_validation".to_string(),
                "52".to_string(),
                "institution_11".to_string(),
                "0.84".to_string(),
                "0.90".to_string(),
                "0.82".to_string(),
                "0.79".to_string(),
            ],
        ],
    }
}

#[test]
fn test_spread_row_count_and_categories() {
    let long = spread_metrics_across_rows(&wide_fixture(), MetricFamily::Dice).unwrap();
    assert_eq!(long.records.len(), 2 * 4);
    let categories = long.categories();
    assert_eq!(categories.len(), DISPLAY_NAMES.len());
    for name in DISPLAY_NAMES {
        assert!(categories.iter().any(|c| c == name));
    }
}

#[test]
fn test_spread_keeps_every_value() {
    let long = spread_metrics_across_rows(&wide_fixture(), MetricFamily::Dice).unwrap();
    assert_eq!(long.values_for("Average"), vec![0.70, 0.84]);
    assert_eq!(long.values_for("ET"), vec![0.60, 0.79]);
    let round_zero: Vec<f64> = long
        .records
        .iter()
        .filter(|r| r.version == 0)
        .map(|r| r.value)
        .collect();
    assert_eq!(round_zero, vec![0.70, 0.80, 0.65, 0.60]);
}

#[test]
fn test_spread_fails_on_missing_metric_column() {
    let mut table = wide_fixture();
    table.columns[4] = "binary_DICE_XX".to_string();
    assert!(spread_metrics_across_rows(&table, MetricFamily::Dice).is_err());
}

#[test]
fn test_spread_labels() {
    let long = spread_metrics_across_rows(&wide_fixture(), MetricFamily::Dice).unwrap();
    assert_eq!(long.version_label, "ModelVersion");
    assert_eq!(long.category_label, "Tumor Sub-Compartment");
    assert_eq!(long.value_label, "DSC");
}

#[test]
fn test_version_filter_isolates_single_row_pipeline() {
    // 2-row, 4-metric fixture filtered to one version yields exactly 4
    // long-format rows for charting.
    let task = filter_shared_validation(&wide_fixture()).unwrap();
    let round = filter_version(&task, 52).unwrap();
    assert_eq!(round.rows.len(), 1);
    let long = spread_metrics_across_rows(&round, MetricFamily::Dice).unwrap();
    assert_eq!(long.records.len(), 4);
    assert_eq!(long.max_version(), 52);
}

#[test]
fn test_filter_task_drops_other_tasks() {
    let mut table = wide_fixture();
    table.rows[1][0] = "local_training".to_string();
    let task = filter_shared_validation(&table).unwrap();
    assert_eq!(task.rows.len(), 1);
}

#[test]
fn test_spread_is_deterministic() {
    let a = spread_metrics_across_rows(&wide_fixture(), MetricFamily::Dice).unwrap();
    let b = spread_metrics_across_rows(&wide_fixture(), MetricFamily::Dice).unwrap();
    assert_eq!(a, b);
}
