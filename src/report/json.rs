use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::stats::PairedComparison;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryComparison {
    pub category: String,
    pub baseline_mean: f64,
    pub treatment_mean: f64,
    pub baseline_std: f64,
    pub treatment_std: f64,
    pub p_value: f64,
    pub percent_gain: i64,
    pub n_pairs: usize,
    pub approximate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub figure: String,
    pub baseline: String,
    pub treatment: String,
    pub categories: Vec<CategoryComparison>,
}

impl ComparisonSummary {
    pub fn push(&mut self, category: &str, cmp: &PairedComparison, percent_gain: i64) {
        self.categories.push(CategoryComparison {
            category: category.to_string(),
            baseline_mean: cmp.baseline_mean,
            treatment_mean: cmp.treatment_mean,
            baseline_std: cmp.baseline_std,
            treatment_std: cmp.treatment_std,
            p_value: cmp.p_value,
            percent_gain,
            n_pairs: cmp.n_pairs,
            approximate: cmp.approximate,
        });
    }
}

pub fn write_summary(summary: &ComparisonSummary, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    info!("saving statistics summary at: {}", path.display());
    Ok(())
}
