use std::error::Error;
use std::path::Path;

use tracing::info;

use crate::input::{Table, find_csv, load_table};
use crate::metrics::dice_to_jaccard;
use crate::report::latex::render_latex;
use crate::report::{is_numeric_column, render_frame};

pub fn pairs_table(data_pardir: &Path) -> Result<(), Box<dyn Error>> {
    let table = load_table(data_pardir, "p_value_for_singlet_and_triplet_pairs_PLUS")?;
    print_table(&table);
    Ok(())
}

pub fn scores_table(data_pardir: &Path, jaccard: bool) -> Result<(), Box<dyn Error>> {
    let table = if jaccard {
        if find_csv(data_pardir, "singlet_and_triplet_jaccard_scores").is_ok() {
            load_table(data_pardir, "singlet_and_triplet_jaccard_scores")?
        } else {
            info!("no precomputed overlap-index table found; converting similarity scores");
            let mut table = load_table(data_pardir, "singlet_and_triplet_dice_scores")?;
            convert_scores(&mut table);
            table
        }
    } else {
        load_table(data_pardir, "singlet_and_triplet_dice_scores")?
    };
    print_table(&table);
    Ok(())
}

fn print_table(table: &Table) {
    print!("{}", render_frame(table));
    println!();
    print!("{}", render_latex(table));
}

// Column-wise similarity score -> overlap index on every numeric column,
// with the metric root rewritten in the affected headers.
fn convert_scores(table: &mut Table) {
    let numeric: Vec<usize> = (0..table.columns.len())
        .filter(|&idx| is_numeric_column(table, idx))
        .collect();
    for &idx in &numeric {
        for row in &mut table.rows {
            if let Ok(dice) = row[idx].trim().parse::<f64>() {
                row[idx] = format!("{:.6}", dice_to_jaccard(dice));
            }
        }
        let renamed = table.columns[idx].replace("DICE", "Jaccard").replace("DSC", "Jaccard");
        table.columns[idx] = renamed;
    }
}
