use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::render::PlotStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

#[derive(Debug, Clone)]
pub struct BarSpec<'a> {
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub rows: &'a [BarRow],
}

// Horizontal bar chart, one bar per row, first row on top, each bar
// annotated with its numeric value.
pub fn render_hbar(
    spec: &BarSpec<'_>,
    style: &PlotStyle,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = spec.rows.len();
    let max_value = spec
        .rows
        .iter()
        .map(|r| r.value)
        .fold(0.0f64, f64::max);
    let x_max = max_value * 1.12;

    let mut chart = ChartBuilder::on(&root)
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(0.0..x_max, -0.5..(n as f64 - 0.5))?;

    let labels: Vec<String> = spec.rows.iter().map(|r| r.label.clone()).collect();
    chart
        .configure_mesh()
        .disable_mesh()
        .y_labels(n)
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", style.axis_font))
        .label_style(("sans-serif", style.label_font))
        .y_label_formatter(&move |y| {
            let idx = y.round();
            if (y - idx).abs() < 0.01 && idx >= 0.0 && (idx as usize) < labels.len() {
                // first row drawn at the top
                labels[labels.len() - 1 - idx as usize].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    for (i, row) in spec.rows.iter().enumerate() {
        let y = (n - 1 - i) as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, y - 0.35), (row.value, y + 0.35)],
            row.color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{}", row.value as i64),
            (row.value + max_value * 0.01, y - 0.15),
            ("sans-serif", style.label_font).into_font().color(&BLACK),
        )))?;
    }

    root.present()?;
    info!("saving output file at: {}", path.display());
    Ok(())
}
