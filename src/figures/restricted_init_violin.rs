use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use tracing::info;

use crate::figures::{FULL_CONSENSUS, PUBLIC_INITIAL, category_order, out_path};
use crate::input::{InputError, Table, load_table};
use crate::metrics::{CATEGORY_COLUMN, COLLABORATOR_COLUMN, MetricFamily, MetricSpec};
use crate::render::violin::{BoxLayout, GainLabel, ViolinSpec, render_violins};
use crate::render::{BLUE, ORANGE, PlotStyle};
use crate::report::json::{ComparisonSummary, write_summary};
use crate::reshape::{filter_shared_validation, filter_version, spread_metrics_across_rows};
use crate::stats::{compare_groups, mean, percent_increase};

// Round at which the interpolated mean binary score peaked.
pub const BEST_ROUND: i64 = 52;

const TEXT_X: [f64; 4] = [-0.08, 0.88, 1.86, 2.8];
const TEXT_Y: [f64; 4] = [0.613, 0.582, 0.578, 0.7];
const ARROW_Y: [f64; 4] = [0.671, 0.638, 0.62, 0.753];
const ARROW_DY: [f64; 4] = [0.157, 0.162, 0.198, 0.116];

pub fn run(data_pardir: &Path, output_pardir: &Path, jaccard: bool) -> Result<(), Box<dyn Error>> {
    let family = MetricFamily::from_flag(jaccard);

    let table = load_table(data_pardir, "val_df_final__")?;
    let task = filter_shared_validation(&table)?;
    let version_rows = filter_version(&task, BEST_ROUND)?;
    let init_rows = filter_version(&task, 0)?;
    info!("length of init frame is {}", init_rows.rows.len());

    let gains_by_label = restricted_gains(&version_rows, &init_rows, family)?;

    let version_long = spread_metrics_across_rows(&version_rows, family)?;
    let init_long = spread_metrics_across_rows(&init_rows, family)?;

    let mut samples: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    for rec in &init_long.records {
        samples
            .entry((rec.category.clone(), PUBLIC_INITIAL.to_string()))
            .or_default()
            .push(rec.value);
    }
    for rec in &version_long.records {
        samples
            .entry((rec.category.clone(), FULL_CONSENSUS.to_string()))
            .or_default()
            .push(rec.value);
    }

    let categories = category_order();
    let mut summary = ComparisonSummary {
        figure: "performance_increase_restricted_init_violin".to_string(),
        baseline: PUBLIC_INITIAL.to_string(),
        treatment: FULL_CONSENSUS.to_string(),
        categories: Vec::new(),
    };
    let mut gains = Vec::with_capacity(categories.len());
    for (i, category) in categories.iter().enumerate() {
        let init_values = samples
            .get(&(category.clone(), PUBLIC_INITIAL.to_string()))
            .cloned()
            .unwrap_or_default();
        let version_values = samples
            .get(&(category.clone(), FULL_CONSENSUS.to_string()))
            .cloned()
            .unwrap_or_default();
        let cmp = compare_groups(&init_values, &version_values);
        let percent = *gains_by_label.get(category).unwrap_or(&0);
        info!(
            "{category}: gain over restricted initial {percent}%, p = {:.6}",
            cmp.p_value
        );
        summary.push(category, &cmp, percent);
        gains.push(GainLabel {
            percent,
            text_x: TEXT_X[i],
            text_y: TEXT_Y[i],
            arrow_x: i as f64,
            arrow_y: ARROW_Y[i],
            arrow_dy: ARROW_DY[i],
        });
    }

    let groups = vec![PUBLIC_INITIAL.to_string(), FULL_CONSENSUS.to_string()];
    let palette = [BLUE, ORANGE];
    let spec = ViolinSpec {
        title: "Local Validation Data",
        x_desc: CATEGORY_COLUMN,
        y_desc: family.display_root(),
        categories: &categories,
        groups: &groups,
        samples: &samples,
        palette: &palette,
        layout: BoxLayout {
            group_size: 2,
            shrink_factor: 0.3,
            box_width: 0.3,
            shifts: vec![0.1273, -0.1273],
        },
        gains: &gains,
    };

    let fig_path = out_path(output_pardir, "performance_increase_restricted_init_violin.png")?;
    render_violins(&spec, &PlotStyle::paper(), &fig_path)?;

    let json_path = out_path(
        output_pardir,
        "performance_increase_restricted_init_violin.json",
    )?;
    write_summary(&summary, &json_path)?;
    Ok(())
}

// Percent increase of the round-R mean over the round-0 mean restricted to
// the collaborators that reported at round R, per metric category.
fn restricted_gains(
    version_rows: &Table,
    init_rows: &Table,
    family: MetricFamily,
) -> Result<BTreeMap<String, i64>, InputError> {
    let spec = MetricSpec::resolve(family);
    let reporting = version_rows.unique_values(COLLABORATOR_COLUMN)?;
    let collab_idx = init_rows.require_column(COLLABORATOR_COLUMN)?;
    let restricted_init =
        init_rows.filter_rows(|row| reporting.iter().any(|c| c == &row[collab_idx]));

    let mut gains = BTreeMap::new();
    for (column, label) in spec.source_columns.iter().zip(spec.display_names.iter()) {
        let version_mean = mean(&version_rows.f64_column(column)?);
        let restricted_mean = mean(&restricted_init.f64_column(column)?);
        gains.insert(label.clone(), percent_increase(restricted_mean, version_mean));
    }
    Ok(gains)
}
