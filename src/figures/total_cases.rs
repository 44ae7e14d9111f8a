use std::error::Error;
use std::path::Path;

use plotters::style::RGBColor;

use crate::figures::out_path;
use crate::input::load_table;
use crate::render::bar::{BarRow, BarSpec, render_hbar};
use crate::render::{BLUE, LIGHT_GREEN, ORANGE, PlotStyle};

const SITE_COLUMN: &str = "Site ID (for paper)";
const CASES_COLUMN: &str = "Cases";
const CASES_LABEL: &str = "Cases(total=6,314)";

const INITIAL_MODEL_SITES: [i64; 16] =
    [47, 51, 55, 57, 58, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71];
const TESTING_SITES: [i64; 6] = [8, 11, 19, 20, 21, 43];

fn site_color(site_id: i64) -> RGBColor {
    if TESTING_SITES.contains(&site_id) {
        LIGHT_GREEN
    } else if INITIAL_MODEL_SITES.contains(&site_id) {
        BLUE
    } else {
        ORANGE
    }
}

pub fn run(data_pardir: &Path, output_pardir: &Path) -> Result<(), Box<dyn Error>> {
    let table = load_table(data_pardir, "total_cases_df")?;
    let site_ids = table.i64_column(SITE_COLUMN)?;
    let cases = table.f64_column(CASES_COLUMN)?;

    let rows: Vec<BarRow> = site_ids
        .iter()
        .zip(cases.iter())
        .map(|(&site, &count)| BarRow {
            label: format!("{site}"),
            value: count,
            color: site_color(site),
        })
        .collect();

    let spec = BarSpec {
        x_desc: CASES_LABEL,
        y_desc: "Site ID",
        rows: &rows,
    };

    let fig_path = out_path(output_pardir, "total_cases_plot_vert_python.png")?;
    render_hbar(&spec, &PlotStyle::tall(740, 2600), &fig_path)?;
    Ok(())
}
