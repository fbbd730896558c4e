use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

use crate::error::AppError;

pub const BASE_WIDTH: u32 = 640;
pub const BASE_HEIGHT: u32 = 480;

/// Champions that fit in the base height before the chart starts growing.
const ROWS_PER_BASE_HEIGHT: f64 = 25.0;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

pub fn height_scale(count: usize) -> f64 {
    (count as f64 / ROWS_PER_BASE_HEIGHT).max(1.0)
}

pub fn chart_size(count: usize) -> (u32, u32) {
    let height = (BASE_HEIGHT as f64 * height_scale(count)).round() as u32;
    (BASE_WIDTH, height)
}

/// Room for the longest champion name on the y axis.
fn label_area_width(names: &[&str]) -> u32 {
    let longest = names
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0) as u32;
    (longest * 8 + 16).max(60)
}

/// One segment per bar. Plotters treats integer ranges as inclusive, so
/// `0..count - 1` yields exactly `count` segments. An empty chart keeps one.
fn row_range(count: usize) -> Range<i32> {
    0..count.max(1) as i32 - 1
}

/// Vertical extent of the bar in `row`. The top bar runs to the end of the
/// axis since there is no segment above it to point at.
fn row_bounds(row: i32, rows: i32) -> (SegmentValue<i32>, SegmentValue<i32>) {
    let top = if row + 1 < rows {
        SegmentValue::Exact(row + 1)
    } else {
        SegmentValue::Last
    };
    (SegmentValue::Exact(row), top)
}

/// Renders one bar per champion, `names` and `points` ascending by points.
///
/// Plotters draws the y axis bottom-up, so the last entry, the player's
/// best champion, ends up at the top.
pub fn render_chart(title: &str, names: &[&str], points: &[i64]) -> Result<Vec<u8>, AppError> {
    let (width, height) = chart_size(names.len());
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        draw_bars(&root, title, names, points).map_err(|e| AppError::ChartError(e.to_string()))?;
        root.present()
            .map_err(|e| AppError::ChartError(e.to_string()))?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, width, height, ColorType::Rgb8)
        .map_err(|e| AppError::ChartError(e.to_string()))?;

    Ok(png)
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    names: &[&str],
    points: &[i64],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let max_points = points.iter().copied().max().unwrap_or(0).max(1) as f64;
    let rows = row_range(names.len());
    let row_count = rows.end + 1;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .margin_right(30)
        .caption(
            format!("Champion Mastery Points for {}", title),
            ("sans-serif", 22),
        )
        .set_label_area_size(LabelAreaPosition::Left, label_area_width(names))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0f64..max_points * 1.05, rows.into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(row_count as usize)
        .y_label_formatter(&|row| match row {
            SegmentValue::CenterOf(i) => names
                .get(*i as usize)
                .map(|name| name.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_formatter(&|points| format!("{:.0}", points))
        .x_desc("Mastery Points")
        .draw()?;

    chart.draw_series(points.iter().take(names.len()).enumerate().map(|(i, &value)| {
        let (bottom, top) = row_bounds(i as i32, row_count);
        let mut bar = Rectangle::new([(0.0, bottom), (value as f64, top)], BAR_COLOR.filled());
        bar.set_margin(2, 2, 0, 0);
        bar
    }))?;

    Ok(())
}
