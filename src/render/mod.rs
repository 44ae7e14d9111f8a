use plotters::style::RGBColor;

pub mod bar;
pub mod line;
pub mod violin;

// Colorblind palette entries carried over from the source figures.
pub const BLUE: RGBColor = RGBColor(1, 115, 178);
pub const ORANGE: RGBColor = RGBColor(222, 143, 5);
pub const YELLOW: RGBColor = RGBColor(236, 225, 51);
pub const PURPLE: RGBColor = RGBColor(204, 120, 188);
pub const BROWN: RGBColor = RGBColor(202, 145, 97);
pub const SKY: RGBColor = RGBColor(86, 180, 233);
pub const GREY: RGBColor = RGBColor(148, 148, 148);
pub const LIGHT_GREEN: RGBColor = RGBColor(120, 255, 0);
pub const ANNOTATION_RED: RGBColor = RGBColor(214, 39, 40);

pub const COLORBLIND: [RGBColor; 6] = [BLUE, ORANGE, PURPLE, BROWN, SKY, GREY];

#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub margin: i32,
    pub title_font: u32,
    pub axis_font: u32,
    pub label_font: u32,
    pub annotation_font: u32,
    pub x_label_area: i32,
    pub y_label_area: i32,
}

impl PlotStyle {
    // 16.1 x 10 inch figure rasterized at a fixed publication resolution.
    pub fn paper() -> Self {
        PlotStyle {
            width: 1610,
            height: 1000,
            margin: 40,
            title_font: 44,
            axis_font: 38,
            label_font: 30,
            annotation_font: 36,
            x_label_area: 90,
            y_label_area: 110,
        }
    }

    pub fn tall(width: u32, height: u32) -> Self {
        PlotStyle {
            width,
            height,
            ..PlotStyle::paper()
        }
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle::paper()
    }
}
