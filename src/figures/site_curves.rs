use std::error::Error;
use std::path::Path;

use crate::figures::{curve_series, out_path};
use crate::input::load_table;
use crate::metrics::{CATEGORY_COLUMN, COLLABORATOR_COLUMN, DICE_DISPLAY_ROOT, VERSION_COLUMN};
use crate::render::line::{CurveSpec, render_curves};
use crate::render::{COLORBLIND, PlotStyle};
use crate::reshape::{filter_shared_validation, spread_named_metrics};

const SITE_COLLABORATOR: &str = "institution_11";
const REGION_ORDER: [&str; 3] = ["ET", "TC", "WT"];

pub fn run(data_pardir: &Path, output_pardir: &Path) -> Result<(), Box<dyn Error>> {
    let table = load_table(data_pardir, "val_df_final__")?;
    let task = filter_shared_validation(&table)?;
    let site = task.filter_eq(COLLABORATOR_COLUMN, SITE_COLLABORATOR)?;

    let metric_columns: Vec<(String, String)> = REGION_ORDER
        .iter()
        .map(|region| (format!("binary_DICE_{region}"), region.to_string()))
        .collect();
    let long = spread_named_metrics(
        &site,
        &metric_columns,
        VERSION_COLUMN,
        CATEGORY_COLUMN,
        DICE_DISPLAY_ROOT,
    )?;

    let order: Vec<String> = REGION_ORDER.iter().map(|s| s.to_string()).collect();
    let series = curve_series(&long, &order);

    let spec = CurveSpec {
        title: "Local Validation For Site 48",
        x_desc: "FL Training Round",
        y_desc: DICE_DISPLAY_ROOT,
        x_range: (0.0, long.max_version() as f64),
        y_range: (0.0, 1.0),
        envelope: true,
        series: &series,
        palette: &COLORBLIND,
    };

    let fig_path = out_path(output_pardir, "inst_48_curves.png")?;
    render_curves(&spec, &PlotStyle::paper(), &fig_path)?;
    Ok(())
}
