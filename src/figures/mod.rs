use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::input::{InputError, Table};
use crate::metrics::{MetricFamily, dice_to_jaccard};
use crate::render::line::{CurvePoint, CurveSeries};
use crate::stats::mean_ci95;

pub mod consensus_violin;
pub mod region_curves;
pub mod restricted_init_violin;
pub mod single_models_violin;
pub mod site_curves;
pub mod tables;
pub mod total_cases;

pub const CATEGORY_ORDER: [&str; 4] = ["Average", "ET", "TC", "WT"];

pub const PUBLIC_INITIAL: &str = "Public Initial Model";
pub const FULL_CONSENSUS: &str = "Full Federation Consensus";

pub fn category_order() -> Vec<String> {
    CATEGORY_ORDER.iter().map(|s| s.to_string()).collect()
}

pub fn out_path(output_pardir: &Path, name: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(output_pardir)?;
    Ok(output_pardir.join(name))
}

pub fn group_samples(
    table: &Table,
    group_column: &str,
    category_column: &str,
    value_column: &str,
) -> Result<BTreeMap<(String, String), Vec<f64>>, InputError> {
    let group_idx = table.require_column(group_column)?;
    let category_idx = table.require_column(category_column)?;
    let value_idx = table.require_column(value_column)?;

    let mut samples: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    for row in &table.rows {
        let value = crate::input::parse_f64(&row[value_idx], value_column)?;
        samples
            .entry((row[category_idx].clone(), row[group_idx].clone()))
            .or_default()
            .push(value);
    }
    Ok(samples)
}

// One series per category, one point per model version, mean with a 95%
// confidence band across the observations at that version.
pub fn curve_series(long: &crate::reshape::LongTable, order: &[String]) -> Vec<CurveSeries> {
    let mut out = Vec::with_capacity(order.len());
    for category in order {
        let mut by_version: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
        for rec in long.records.iter().filter(|r| &r.category == category) {
            by_version.entry(rec.version).or_default().push(rec.value);
        }
        let points = by_version
            .iter()
            .map(|(&version, values)| {
                let (m, lo, hi) = mean_ci95(values);
                CurvePoint {
                    x: version as f64,
                    mean: m,
                    lo,
                    hi,
                }
            })
            .collect();
        out.push(CurveSeries {
            name: category.clone(),
            points,
        });
    }
    out
}

// Long-format inputs carry a DSC column; when the overlap index is requested
// and no Jaccard column is present, derive one from the similarity scores.
pub fn ensure_value_column(table: &mut Table, family: MetricFamily) -> Result<String, InputError> {
    let display = family.display_root().to_string();
    if table.column_index(&display).is_some() {
        return Ok(display);
    }
    if family == MetricFamily::Jaccard {
        if let Some(dice_idx) = table.column_index(crate::metrics::DICE_DISPLAY_ROOT) {
            let derived_col = display.as_str();
            info!("deriving {} values from the similarity-score column", derived_col);
            table.columns.push(display.clone());
            for row in &mut table.rows {
                let dice = crate::input::parse_f64(&row[dice_idx], crate::metrics::DICE_DISPLAY_ROOT)?;
                row.push(format!("{}", dice_to_jaccard(dice)));
            }
            return Ok(display);
        }
    }
    Err(InputError::InvalidInput(format!(
        "column {display:?} is not present in the table"
    )))
}
