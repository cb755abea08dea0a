use crate::chart::scale::{LinearScale, Rgb, SequentialScale};
use crate::record::Record;

/// Vertical space per record: a 40px bar plus a 10px gap.
pub const ROW_HEIGHT: f64 = 50.0;
/// Height of one bar.
pub const BAR_HEIGHT: f64 = 40.0;
/// Band above the first bar reserved for the legend.
pub const LEGEND_BAND: f64 = 50.0;
/// Horizontal margin subtracted from the viewport for the chart surface.
pub const CHART_MARGIN: f64 = 100.0;
/// Horizontal margin subtracted from the viewport for the bar length range.
pub const BAR_RANGE_MARGIN: f64 = 150.0;

/// Everything needed to draw one bar: final geometry, fill, and texts.
/// `width` is the revealed width; bars enter collapsed at width zero and
/// animate to this value on first visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub country: String,
    pub index: usize,
    pub y: f64,
    pub height: f64,
    pub width: f64,
    pub fill: Rgb,
    pub score_text: String,
    /// No usable score: zero-length bar, rendered visually distinct.
    pub degenerate: bool,
}

/// One legend swatch with its horizontal offset inside the legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSwatch {
    pub label: &'static str,
    pub color: Rgb,
    pub x: f64,
}

/// The computed chart: overall surface size, per-bar geometry in view
/// order, and the centered legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<BarGeometry>,
    pub legend: Vec<LegendSwatch>,
}

/// Lay out the chart for the current view
///
/// A pure function of (ordered records, viewport width): bar lengths scale
/// linearly over `[0, max score]`, fills interpolate the happiness ramp
/// over `[min score, max score]`, and rows stack at a fixed height under
/// the legend band. Records without a score are excluded from both scale
/// domains and get zero-length degenerate bars.
///
/// # Arguments
/// * `view` - The filtered, sorted records to render
/// * `viewport_width` - Current viewport width in pixels, injected by the
///   hosting surface
///
/// # Returns
/// * `ChartLayout` - Geometry and colors for every bar plus the legend
pub fn compute(view: &[Record], viewport_width: f64) -> ChartLayout {
    let width = (viewport_width - CHART_MARGIN).max(0.0);
    let height = view.len() as f64 * ROW_HEIGHT + LEGEND_BAND;

    let scores: Vec<f64> = view.iter().filter_map(|r| r.score).collect();
    let max_score = scores.iter().cloned().fold(f64::MIN, f64::max);
    let min_score = scores.iter().cloned().fold(f64::MAX, f64::min);

    let x_scale = LinearScale::new(
        (0.0, if scores.is_empty() { 0.0 } else { max_score }),
        (0.0, (viewport_width - BAR_RANGE_MARGIN).max(0.0)),
    );
    let color_scale = if scores.is_empty() {
        None
    } else {
        Some(SequentialScale::happiness((min_score, max_score)))
    };

    let bars = view
        .iter()
        .enumerate()
        .map(|(index, record)| bar_geometry(record, index, x_scale, color_scale))
        .collect();

    ChartLayout {
        width,
        height,
        bars,
        legend: legend_row(width),
    }
}

fn bar_geometry(
    record: &Record,
    index: usize,
    x_scale: LinearScale,
    color_scale: Option<SequentialScale>,
) -> BarGeometry {
    let (width, fill, score_text) = match (record.score, color_scale) {
        (Some(score), Some(colors)) => (
            x_scale.scale(score).max(0.0),
            colors.color(score),
            format!("{}", score),
        ),
        // Null score: zero-length neutral bar, marked degenerate.
        _ => (0.0, Rgb::new(0xcc, 0xcc, 0xcc), "n/a".to_string()),
    };

    BarGeometry {
        country: record.country.clone(),
        index,
        y: index as f64 * ROW_HEIGHT + LEGEND_BAND,
        height: BAR_HEIGHT,
        width,
        fill,
        score_text,
        degenerate: record.is_degenerate(),
    }
}

const LEGEND_SWATCH: f64 = 20.0;
const LEGEND_SPACING: f64 = 20.0;
// Approximate 12px-font character width; headless layout has no text
// measurement, so legend centering works from this estimate.
const LEGEND_CHAR_WIDTH: f64 = 7.0;

/// The three fixed swatches above the chart, horizontally centered.
fn legend_row(chart_width: f64) -> Vec<LegendSwatch> {
    let entries: [(&'static str, Rgb); 3] = [
        ("High Happiness", Rgb::new(0x00, 0xff, 0x00)),
        ("Medium Happiness", Rgb::new(0xff, 0xff, 0x00)),
        ("Low Happiness", Rgb::new(0xff, 0x00, 0x00)),
    ];

    let entry_width = |label: &str| {
        LEGEND_SWATCH + 10.0 + label.chars().count() as f64 * LEGEND_CHAR_WIDTH
    };
    let total: f64 = entries
        .iter()
        .map(|(label, _)| entry_width(label))
        .sum::<f64>()
        + LEGEND_SPACING * (entries.len() - 1) as f64;

    let mut x = ((chart_width - total) / 2.0).max(0.0);
    entries
        .into_iter()
        .map(|(label, color)| {
            let swatch = LegendSwatch { label, color, x };
            x += entry_width(label) + LEGEND_SPACING;
            swatch
        })
        .collect()
}
