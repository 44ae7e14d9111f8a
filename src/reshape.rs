use crate::input::{InputError, Table, parse_f64};
use crate::metrics::{
    CATEGORY_COLUMN, MetricFamily, MetricSpec, SHARED_MODEL_VALIDATION, TASK_COLUMN, VERSION_COLUMN,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub version: i64,
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongTable {
    pub version_label: String,
    pub category_label: String,
    pub value_label: String,
    pub records: Vec<LongRecord>,
}

impl LongTable {
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for rec in &self.records {
            if !out.iter().any(|c| c == &rec.category) {
                out.push(rec.category.clone());
            }
        }
        out
    }

    pub fn values_for(&self, category: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.value)
            .collect()
    }

    pub fn max_version(&self) -> i64 {
        self.records.iter().map(|r| r.version).max().unwrap_or(0)
    }
}

pub fn filter_task(table: &Table, task: &str) -> Result<Table, InputError> {
    table.filter_eq(TASK_COLUMN, task)
}

pub fn filter_shared_validation(table: &Table) -> Result<Table, InputError> {
    filter_task(table, SHARED_MODEL_VALIDATION)
}

pub fn filter_version(table: &Table, version: i64) -> Result<Table, InputError> {
    let idx = table.require_column(VERSION_COLUMN)?;
    Ok(table.filter_rows(|row| row[idx].trim().parse::<i64>() == Ok(version)))
}

pub fn spread_metrics_across_rows(
    table: &Table,
    family: MetricFamily,
) -> Result<LongTable, InputError> {
    let spec = MetricSpec::resolve(family);
    let pairs: Vec<(String, String)> = spec
        .source_columns
        .iter()
        .zip(spec.display_names.iter())
        .map(|(c, d)| (c.clone(), d.clone()))
        .collect();
    spread_named_metrics(
        table,
        &pairs,
        VERSION_COLUMN,
        CATEGORY_COLUMN,
        family.display_root(),
    )
}

pub fn spread_named_metrics(
    table: &Table,
    metric_columns: &[(String, String)],
    version_column: &str,
    category_label: &str,
    value_label: &str,
) -> Result<LongTable, InputError> {
    let version_idx = table.require_column(version_column)?;
    let mut metric_idx = Vec::with_capacity(metric_columns.len());
    for (column, label) in metric_columns {
        metric_idx.push((table.require_column(column)?, column.as_str(), label.as_str()));
    }

    let mut records = Vec::with_capacity(table.rows.len() * metric_columns.len());
    for row in &table.rows {
        let version = row[version_idx].trim().parse::<i64>().map_err(|_| {
            InputError::Parse(format!(
                "column {version_column:?} holds non-integer value {:?}",
                row[version_idx]
            ))
        })?;
        for &(idx, column, label) in &metric_idx {
            records.push(LongRecord {
                version,
                category: label.to_string(),
                value: parse_f64(&row[idx], column)?,
            });
        }
    }

    Ok(LongTable {
        version_label: version_column.to_string(),
        category_label: category_label.to_string(),
        value_label: value_label.to_string(),
        records,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/reshape.rs"]
mod tests;
