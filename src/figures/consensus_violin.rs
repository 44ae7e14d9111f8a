use std::error::Error;
use std::path::Path;

use tracing::info;

use crate::figures::{FULL_CONSENSUS, PUBLIC_INITIAL, category_order, group_samples, out_path};
use crate::input::{InputError, Table, load_table};
use crate::metrics::{CATEGORY_COLUMN, DICE_DISPLAY_ROOT};
use crate::render::violin::{BoxLayout, GainLabel, ViolinSpec, render_violins};
use crate::render::{BLUE, ORANGE, PlotStyle};
use crate::report::json::{ComparisonSummary, write_summary};
use crate::stats::{compare_groups, percent_increase};

const MODEL_COLUMN: &str = "Model Type";

const TEXT_X: [f64; 4] = [-0.12, 0.86, 1.82, 2.78];
const TEXT_Y: [f64; 4] = [0.58, 0.54, 0.53, 0.675];
const ARROW_Y: [f64; 4] = [0.625, 0.598, 0.568, 0.726];
const ARROW_DY: [f64; 4] = [0.118, 0.083, 0.144, 0.11];

pub fn run(data_pardir: &Path, output_pardir: &Path) -> Result<(), Box<dyn Error>> {
    let mut consensus = load_table(data_pardir, "final_consensus_val_df")?;
    let init = load_table(data_pardir, "init_val_df")?;

    consensus.append(&init)?;
    canonicalize(&mut consensus)?;

    let samples = group_samples(&consensus, MODEL_COLUMN, CATEGORY_COLUMN, DICE_DISPLAY_ROOT)?;

    let categories = category_order();
    let mut summary = ComparisonSummary {
        figure: "init_scores_versus_consensus_against_holdout_violin".to_string(),
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
        let con_values = samples
            .get(&(category.clone(), FULL_CONSENSUS.to_string()))
            .cloned()
            .unwrap_or_default();
        let cmp = compare_groups(&init_values, &con_values);
        let percent = percent_increase(cmp.baseline_mean, cmp.treatment_mean);
        info!(
            "{category}: initial mean {:.6}, consensus mean {:.6}, gain {percent}%, p = {:.6}",
            cmp.baseline_mean, cmp.treatment_mean, cmp.p_value
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
        title: "Out-Of-Sample Data",
        x_desc: CATEGORY_COLUMN,
        y_desc: DICE_DISPLAY_ROOT,
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

    let fig_path = out_path(
        output_pardir,
        "init_scores_versus_consensus_against_holdout_violin.png",
    )?;
    render_violins(&spec, &PlotStyle::paper(), &fig_path)?;

    let json_path = out_path(
        output_pardir,
        "init_scores_versus_consensus_against_holdout_violin.json",
    )?;
    write_summary(&summary, &json_path)?;
    Ok(())
}

fn canonicalize(table: &mut Table) -> Result<(), InputError> {
    table.replace_value(CATEGORY_COLUMN, "binary_DICE_ET", "ET")?;
    table.replace_value(CATEGORY_COLUMN, "binary_DICE_TC", "TC")?;
    table.replace_value(CATEGORY_COLUMN, "binary_DICE_WT", "WT")?;
    table.replace_value(CATEGORY_COLUMN, "MeanBinaryDICE", "Average")?;
    table.replace_value(MODEL_COLUMN, "initial", PUBLIC_INITIAL)?;
    table.replace_value(MODEL_COLUMN, "singlet_0", FULL_CONSENSUS)?;
    Ok(())
}
