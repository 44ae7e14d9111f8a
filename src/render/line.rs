use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::render::PlotStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub mean: f64,
    pub lo: f64,
    pub hi: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    pub name: String,
    pub points: Vec<CurvePoint>,
}

#[derive(Debug, Clone)]
pub struct CurveSpec<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub envelope: bool,
    pub series: &'a [CurveSeries],
    pub palette: &'a [RGBColor],
}

pub fn render_curves(
    spec: &CurveSpec<'_>,
    style: &PlotStyle,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(style.margin)
        .caption(spec.title, ("sans-serif", style.title_font))
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(spec.x_range.0..spec.x_range.1, spec.y_range.0..spec.y_range.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", style.axis_font))
        .label_style(("sans-serif", style.label_font))
        .draw()?;

    for (i, series) in spec.series.iter().enumerate() {
        let color = spec.palette[i % spec.palette.len()];

        if spec.envelope {
            let mut band: Vec<(f64, f64)> =
                series.points.iter().map(|p| (p.x, p.hi)).collect();
            band.extend(series.points.iter().rev().map(|p| (p.x, p.lo)));
            chart.draw_series(std::iter::once(Polygon::new(band, color.mix(0.2).filled())))?;
        }

        let line: Vec<(f64, f64)> = series.points.iter().map(|p| (p.x, p.mean)).collect();
        chart
            .draw_series(LineSeries::new(line, color.stroke_width(3)))?
            .label(series.name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 5, y), (x + 15, y)], color.stroke_width(3))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", style.label_font))
        .draw()?;

    root.present()?;
    info!("saving output file at: {}", path.display());
    Ok(())
}
