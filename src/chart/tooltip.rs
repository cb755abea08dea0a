use crate::record::Record;
use crate::view::Factor;

/// Tooltip fade-in duration on hover.
pub const FADE_IN_MS: u32 = 200;
/// Tooltip fade-out duration on mouse-out.
pub const FADE_OUT_MS: u32 = 500;

// Cursor-relative placement: a little right of and above the pointer.
const OFFSET_X: f64 = 10.0;
const OFFSET_Y: f64 = -28.0;

/// The text content of a hover tooltip: country name plus the score and
/// all six factor values, null values printed as "n/a".
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<(String, String)>,
}

impl TooltipContent {
    pub fn for_record(record: &Record) -> Self {
        let mut lines = vec![(
            "Happiness Score".to_string(),
            format_value(record.score),
        )];
        lines.extend(Factor::ALL.iter().map(|factor| {
            (
                factor.label().to_string(),
                format_value(factor.value(record)),
            )
        }));

        Self {
            title: record.country.clone(),
            lines,
        }
    }

    /// The tooltip body as HTML, matching the stylesheet's tooltip classes.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"tooltip-content\">");
        html.push_str(&format!(
            "<div class=\"tooltip-title\">{}</div>",
            self.title
        ));
        for (label, value) in &self.lines {
            html.push_str(&format!(
                "<div class=\"tooltip-item\"><strong>{}:</strong> {}</div>",
                label, value
            ));
        }
        html.push_str("</div>");
        html
    }
}

/// Tooltip top-left corner for a cursor position.
pub fn position(cursor_x: f64, cursor_y: f64) -> (f64, f64) {
    (cursor_x + OFFSET_X, cursor_y + OFFSET_Y)
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "n/a".to_string(),
    }
}
