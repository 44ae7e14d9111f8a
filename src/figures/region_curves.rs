use std::error::Error;
use std::path::Path;

use crate::figures::{curve_series, out_path};
use crate::input::load_table;
use crate::metrics::{MetricFamily, VERSION_COLUMN};
use crate::render::line::{CurveSpec, render_curves};
use crate::render::{COLORBLIND, PlotStyle};
use crate::reshape::{filter_shared_validation, spread_named_metrics};

// Scores are generally higher for larger regions: WT > ET > TC.
const REGION_ORDER: [&str; 3] = ["WT", "ET", "TC"];

pub fn run(data_pardir: &Path, output_pardir: &Path, jaccard: bool) -> Result<(), Box<dyn Error>> {
    let family = MetricFamily::from_flag(jaccard);
    let root = family.source_root();

    let table = load_table(data_pardir, "val_df_final")?;
    let task = filter_shared_validation(&table)?;

    let metric_columns: Vec<(String, String)> = REGION_ORDER
        .iter()
        .map(|region| (format!("binary_{root}_{region}"), region.to_string()))
        .collect();
    let long = spread_named_metrics(
        &task,
        &metric_columns,
        VERSION_COLUMN,
        "Region Of Interest",
        family.display_root(),
    )?;

    let order: Vec<String> = REGION_ORDER.iter().map(|s| s.to_string()).collect();
    let series = curve_series(&long, &order);

    let spec = CurveSpec {
        title: "Mean Local Validation Across Sites",
        x_desc: "FL Training Round",
        y_desc: family.display_root(),
        x_range: (0.0, long.max_version() as f64),
        y_range: (0.6, 0.9),
        envelope: false,
        series: &series,
        palette: &COLORBLIND,
    };

    let name = format!("{}_better_on_larger_regions.png", family.display_root());
    let fig_path = out_path(output_pardir, &name)?;
    render_curves(&spec, &PlotStyle::paper(), &fig_path)?;
    Ok(())
}
