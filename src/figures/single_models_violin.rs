use std::error::Error;
use std::path::Path;

use tracing::info;

use crate::figures::{FULL_CONSENSUS, category_order, ensure_value_column, group_samples, out_path};
use crate::input::{InputError, Table, load_table};
use crate::metrics::{CATEGORY_COLUMN, MetricFamily};
use crate::render::violin::{BoxLayout, ViolinSpec, render_violins};
use crate::render::{BROWN, GREY, ORANGE, PURPLE, PlotStyle, SKY, YELLOW};
use crate::report::json::{ComparisonSummary, write_summary};
use crate::stats::{compare_groups, percent_increase};

const MODEL_COLUMN: &str = "Model Name";
const ENSEMBLE: &str = "Ensemble";
const SITES: [&str; 4] = ["Site 1", "Site 2", "Site 3", "Site 4"];
const BASE_SHIFT: f64 = 0.062;

pub fn run(data_pardir: &Path, output_pardir: &Path, jaccard: bool) -> Result<(), Box<dyn Error>> {
    let family = MetricFamily::from_flag(jaccard);

    let mut singles = load_table(data_pardir, "single_models_val_df")?;
    let mut consensus = load_table(data_pardir, "consensus_model_results_inhouse_only_df")?;

    consensus.rename_column("Model Type", MODEL_COLUMN);
    let mut consensus = consensus.filter_eq(MODEL_COLUMN, "singlet_0")?;
    consensus.replace_value(MODEL_COLUMN, "singlet_0", FULL_CONSENSUS)?;

    singles.rename_column("Single Institution", MODEL_COLUMN);
    singles.append(&consensus)?;
    canonicalize(&mut singles)?;

    let value_column = ensure_value_column(&mut singles, family)?;
    let samples = group_samples(&singles, MODEL_COLUMN, CATEGORY_COLUMN, &value_column)?;

    let categories = category_order();
    let mut summary = ComparisonSummary {
        figure: "single_and_consensus_models_against_holdout_violin".to_string(),
        baseline: FULL_CONSENSUS.to_string(),
        treatment: "ensemble and single-site models".to_string(),
        categories: Vec::new(),
    };

    let mut challengers = vec![ENSEMBLE.to_string()];
    challengers.extend(SITES.iter().map(|s| s.to_string()));
    for challenger in &challengers {
        for category in &categories {
            let consensus_values = samples
                .get(&(category.clone(), FULL_CONSENSUS.to_string()))
                .cloned()
                .unwrap_or_default();
            let challenger_values = samples
                .get(&(category.clone(), challenger.clone()))
                .cloned()
                .unwrap_or_default();
            let cmp = compare_groups(&consensus_values, &challenger_values);
            let percent = percent_increase(cmp.baseline_mean, cmp.treatment_mean);
            if challenger == ENSEMBLE {
                info!(
                    "{category}: consensus scored {:.6}, ensemble scored {:.6}, percent increase {percent}%",
                    cmp.baseline_mean, cmp.treatment_mean
                );
            }
            info!(
                "{challenger} vs consensus, {category}: p = {:.6}",
                cmp.p_value
            );
            summary.push(&format!("{challenger} / {category}"), &cmp, percent);
        }
    }

    let mut groups = vec![FULL_CONSENSUS.to_string(), ENSEMBLE.to_string()];
    groups.extend(SITES.iter().map(|s| s.to_string()));
    let palette = [ORANGE, YELLOW, PURPLE, BROWN, SKY, GREY];
    let spec = ViolinSpec {
        title: "Centralized Out-Of-Sample Data",
        x_desc: CATEGORY_COLUMN,
        y_desc: &value_column,
        categories: &categories,
        groups: &groups,
        samples: &samples,
        palette: &palette,
        layout: BoxLayout {
            group_size: 6,
            shrink_factor: 0.7,
            box_width: 0.3,
            shifts: vec![
                3.32 * BASE_SHIFT,
                -3.35 * BASE_SHIFT,
                -2.02 * BASE_SHIFT,
                -0.72 * BASE_SHIFT,
                0.665 * BASE_SHIFT,
                1.95 * BASE_SHIFT,
            ],
        },
        gains: &[],
    };

    let stem = format!("single_and_consensus_models_against_holdout_violin_{value_column}");
    let fig_path = out_path(output_pardir, &format!("{stem}.png"))?;
    render_violins(&spec, &PlotStyle::paper(), &fig_path)?;

    let json_path = out_path(output_pardir, &format!("{stem}.json"))?;
    write_summary(&summary, &json_path)?;
    Ok(())
}

fn canonicalize(table: &mut Table) -> Result<(), InputError> {
    table.replace_value(MODEL_COLUMN, "All single institution ensemble", ENSEMBLE)?;
    table.replace_value(MODEL_COLUMN, "Institution 46", "Site 1")?;
    table.replace_value(MODEL_COLUMN, "Institution 44", "Site 2")?;
    table.replace_value(MODEL_COLUMN, "Institution 42", "Site 3")?;
    table.replace_value(MODEL_COLUMN, "Institution 43", "Site 4")?;
    Ok(())
}
