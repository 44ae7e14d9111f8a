use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::info;

use crate::render::{ANNOTATION_RED, PlotStyle};
use crate::stats::{mean, quantile, std_dev};

const KDE_GRID: usize = 80;
const CLUSTER_WIDTH: f64 = 0.8;

// Horizontal placement of the overlaid boxes. The shrink factor scales each
// box around its own midpoint and the shift moves it under its violin; shifts
// are keyed by 1-based draw order modulo the group size.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout {
    pub group_size: usize,
    pub shrink_factor: f64,
    pub box_width: f64,
    pub shifts: Vec<f64>,
}

impl BoxLayout {
    pub fn box_extent(&self, center: f64, ordinal: usize) -> (f64, f64) {
        let slot = self.box_width / self.group_size as f64;
        let xmid = center + (ordinal as f64 + 0.5) * slot - self.box_width / 2.0;
        let xhalf = slot / 2.0;
        let shift = self.shifts[(ordinal + 1) % self.group_size];
        (
            xmid - self.shrink_factor * xhalf + shift,
            xmid + self.shrink_factor * xhalf + shift,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GainLabel {
    pub percent: i64,
    pub text_x: f64,
    pub text_y: f64,
    pub arrow_x: f64,
    pub arrow_y: f64,
    pub arrow_dy: f64,
}

#[derive(Debug, Clone)]
pub struct ViolinSpec<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub categories: &'a [String],
    pub groups: &'a [String],
    pub samples: &'a BTreeMap<(String, String), Vec<f64>>,
    pub palette: &'a [RGBColor],
    pub layout: BoxLayout,
    pub gains: &'a [GainLabel],
}

pub fn render_violins(
    spec: &ViolinSpec<'_>,
    style: &PlotStyle,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = spec.categories.len();
    let mut chart = ChartBuilder::on(&root)
        .margin(style.margin)
        .caption(spec.title, ("sans-serif", style.title_font))
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..1.0)?;

    let categories = spec.categories.to_vec();
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", style.axis_font))
        .label_style(("sans-serif", style.label_font))
        .x_label_formatter(&move |x| {
            let idx = x.round();
            if (x - idx).abs() < 0.01 && idx >= 0.0 && (idx as usize) < categories.len() {
                categories[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    for (gi, group) in spec.groups.iter().enumerate() {
        let color = spec.palette[gi % spec.palette.len()];
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(0.0, 0.0), (0.0, 0.0)],
                color.mix(0.5).filled(),
            )))?
            .label(group.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.mix(0.5).filled())
            });
    }

    let slot = CLUSTER_WIDTH / spec.groups.len() as f64;
    for (ci, category) in spec.categories.iter().enumerate() {
        for (gi, group) in spec.groups.iter().enumerate() {
            let key = (category.clone(), group.clone());
            let Some(values) = spec.samples.get(&key) else {
                continue;
            };
            if values.is_empty() {
                continue;
            }
            let color = spec.palette[gi % spec.palette.len()];
            let violin_center =
                ci as f64 - CLUSTER_WIDTH / 2.0 + (gi as f64 + 0.5) * slot;

            draw_violin_body(&mut chart, values, violin_center, slot / 2.0, color)?;
            let (x0, x1) = spec.layout.box_extent(ci as f64, gi);
            draw_box(&mut chart, values, x0, x1, color)?;
        }
    }

    for gain in spec.gains {
        draw_gain(&mut chart, gain, style)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", style.label_font))
        .draw()?;

    root.present()?;
    info!("saving output file at: {}", path.display());
    Ok(())
}

type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_violin_body(
    chart: &mut Chart2d<'_, '_>,
    values: &[f64],
    center: f64,
    half_width: f64,
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let lo = sorted[0];
    let hi = sorted[sorted.len() - 1];

    if hi == lo {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(center - half_width, lo), (center + half_width, lo)],
            color.mix(0.5).stroke_width(2),
        )))?;
        return Ok(());
    }

    let densities = kde_profile(&sorted, lo, hi);
    let max_d = densities.iter().cloned().fold(0.0f64, f64::max);
    if max_d <= 0.0 {
        return Ok(());
    }
    let scale = half_width * 0.98 / max_d;

    let mut outline = Vec::with_capacity(2 * KDE_GRID);
    for (i, d) in densities.iter().enumerate() {
        let y = lo + (hi - lo) * i as f64 / (KDE_GRID - 1) as f64;
        outline.push((center - d * scale, y));
    }
    for (i, d) in densities.iter().enumerate().rev() {
        let y = lo + (hi - lo) * i as f64 / (KDE_GRID - 1) as f64;
        outline.push((center + d * scale, y));
    }
    chart.draw_series(std::iter::once(Polygon::new(
        outline,
        color.mix(0.5).filled(),
    )))?;
    Ok(())
}

// Gaussian kernel density on a fixed grid clipped to the sample range.
fn kde_profile(sorted: &[f64], lo: f64, hi: f64) -> Vec<f64> {
    let n = sorted.len() as f64;
    let sd = std_dev(sorted);
    let spread = if sd > 0.0 { sd } else { (hi - lo) / 4.0 };
    let bw = (spread * n.powf(-0.2)).max(f64::EPSILON);

    let mut densities = Vec::with_capacity(KDE_GRID);
    for i in 0..KDE_GRID {
        let y = lo + (hi - lo) * i as f64 / (KDE_GRID - 1) as f64;
        let mut acc = 0.0;
        for &v in sorted {
            let u = (y - v) / bw;
            acc += (-0.5 * u * u).exp();
        }
        densities.push(acc / (n * bw * (2.0 * std::f64::consts::PI).sqrt()));
    }
    densities
}

fn draw_box(
    chart: &mut Chart2d<'_, '_>,
    values: &[f64],
    x0: f64,
    x1: f64,
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let med = quantile(&sorted, 0.5);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;
    let whisker_lo = sorted
        .iter()
        .cloned()
        .find(|&v| v >= lo_fence)
        .unwrap_or(q1);
    let whisker_hi = sorted
        .iter()
        .cloned()
        .rev()
        .find(|&v| v <= hi_fence)
        .unwrap_or(q3);

    let xmid = (x0 + x1) / 2.0;
    let cap = (x1 - x0) / 3.0;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(x0, q1), (x1, q3)],
        color.filled(),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(xmid, whisker_lo), (xmid, q1)],
        color.stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(xmid, q3), (xmid, whisker_hi)],
        color.stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(xmid - cap / 2.0, whisker_lo), (xmid + cap / 2.0, whisker_lo)],
        color.stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(xmid - cap / 2.0, whisker_hi), (xmid + cap / 2.0, whisker_hi)],
        color.stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x0, med), (x1, med)],
        WHITE.stroke_width(4),
    )))?;
    chart.draw_series(std::iter::once(Cross::new(
        (xmid, mean(values)),
        8,
        ANNOTATION_RED.stroke_width(3),
    )))?;
    Ok(())
}

fn draw_gain(
    chart: &mut Chart2d<'_, '_>,
    gain: &GainLabel,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let text = format!("{}% Gain", gain.percent);
    chart.draw_series(std::iter::once(Text::new(
        text,
        (gain.text_x, gain.text_y),
        ("sans-serif", style.annotation_font)
            .into_font()
            .color(&ANNOTATION_RED),
    )))?;

    let tip = gain.arrow_y + gain.arrow_dy;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(gain.arrow_x, gain.arrow_y), (gain.arrow_x, tip)],
        ANNOTATION_RED.stroke_width(3),
    )))?;
    chart.draw_series(std::iter::once(Polygon::new(
        vec![
            (gain.arrow_x - 0.04, tip - 0.03),
            (gain.arrow_x + 0.04, tip - 0.03),
            (gain.arrow_x, tip),
        ],
        ANNOTATION_RED.filled(),
    )))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/violin.rs"]
mod tests;
