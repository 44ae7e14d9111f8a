use super::*;

fn sample() -> Table {
    Table {
        columns: vec![
            "TaskName".to_string(),
            "ModelVersion".to_string(),
            "DSC".to_string(),
        ],
        rows: vec![
            vec![
                "shared_model_validation".to_string(),
                "0".to_string(),
                "0.5".to_string(),
            ],
            vec![
                "shared_model_validation".to_string(),
                "1".to_string(),
                "0.75".to_string(),
            ],
            vec!["train".to_string(), "1".to_string(), "0.9".to_string()],
        ],
    }
}

#[test]
fn test_require_column_missing() {
    let table = sample();
    assert!(table.require_column("DSC").is_ok());
    assert!(matches!(
        table.require_column("Jaccard"),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_typed_columns() {
    let table = sample();
    assert_eq!(table.f64_column("DSC").unwrap(), vec![0.5, 0.75, 0.9]);
    assert_eq!(table.i64_column("ModelVersion").unwrap(), vec![0, 1, 1]);
    assert!(table.f64_column("TaskName").is_err());
}

#[test]
fn test_filter_eq() {
    let table = sample();
    let filtered = table.filter_eq("TaskName", "shared_model_validation").unwrap();
    assert_eq!(filtered.rows.len(), 2);
    assert!(table.filter_eq("NoSuchColumn", "x").is_err());
}

#[test]
fn test_replace_value_and_rename() {
    let mut table = sample();
    table.replace_value("TaskName", "train", "local_training").unwrap();
    assert_eq!(table.rows[2][0], "local_training");
    table.rename_column("DSC", "Score");
    assert_eq!(table.columns[2], "Score");
}

#[test]
fn test_append_aligns_columns_by_name() {
    let mut table = sample();
    let other = Table {
        columns: vec![
            "DSC".to_string(),
            "TaskName".to_string(),
            "ModelVersion".to_string(),
        ],
        rows: vec![vec![
            "0.25".to_string(),
            "train".to_string(),
            "2".to_string(),
        ]],
    };
    table.append(&other).unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[3], vec!["train", "2", "0.25"]);
}

#[test]
fn test_append_rejects_differing_columns() {
    let mut table = sample();
    let other = Table {
        columns: vec!["A".to_string()],
        rows: vec![],
    };
    assert!(table.append(&other).is_err());
}

#[test]
fn test_unique_values_preserves_order() {
    let table = sample();
    assert_eq!(
        table.unique_values("TaskName").unwrap(),
        vec!["shared_model_validation", "train"]
    );
}
