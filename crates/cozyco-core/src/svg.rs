//! Polyline to SVG serialization
//!
//! Paths become `<path d="M.. L..">` elements inside a single styled `<g>`;
//! [`document`] wraps a group in a root `<svg>` with a painted background.

use crate::geometry::{Path, Vector};
use serde::{Deserialize, Serialize};

/// Stroke corner style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Stroke end style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Shared style for every path in a group.
///
/// Unset fields fall back to `fill="none"`, `stroke="black"` and a 1px
/// stroke; join and cap attributes are omitted when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub fill_color: Option<String>,
    pub stroke_color: Option<String>,
    pub line_width: Option<f64>,
    pub line_join: Option<LineJoin>,
    pub line_cap: Option<LineCap>,
}

impl StyleOptions {
    pub const DEFAULT_FILL: &'static str = "none";
    pub const DEFAULT_STROKE: &'static str = "black";
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = Some(join);
        self
    }

    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = Some(cap);
        self
    }

    fn attributes(&self) -> String {
        let mut attrs = vec![
            (
                "fill",
                self.fill_color
                    .clone()
                    .unwrap_or_else(|| Self::DEFAULT_FILL.to_owned()),
            ),
            (
                "stroke",
                self.stroke_color
                    .clone()
                    .unwrap_or_else(|| Self::DEFAULT_STROKE.to_owned()),
            ),
            (
                "stroke-width",
                format!(
                    "{}px",
                    format_number(self.line_width.unwrap_or(Self::DEFAULT_LINE_WIDTH))
                ),
            ),
        ];
        if let Some(join) = self.line_join {
            attrs.push(("stroke-linejoin", join.as_str().to_owned()));
        }
        if let Some(cap) = self.line_cap {
            attrs.push(("stroke-linecap", cap.as_str().to_owned()));
        }
        attr_list(&attrs)
    }
}

fn attr_list(attrs: &[(&str, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, escape_attr(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

/// Format a number the way JavaScript's `Number#toString` does.
///
/// Shortest round-trip digits, `-0` prints as `0`, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form (`1.5e-7`, `1e+21`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

fn write_point(out: &mut String, command: char, point: Vector) {
    out.push(command);
    out.push_str(&format_number(point.x));
    out.push(' ');
    out.push_str(&format_number(point.y));
}

/// Draw commands for one polyline: a move-to then a line-to per point
pub fn path_data(path: &[Vector]) -> String {
    let mut d = String::with_capacity(path.len() * 40);
    for (i, &point) in path.iter().enumerate() {
        if i == 0 {
            write_point(&mut d, 'M', point);
        } else {
            d.push(' ');
            write_point(&mut d, 'L', point);
        }
    }
    d
}

/// Serialize polylines into one styled `<g>` element.
///
/// Empty paths are skipped; an empty input yields an empty group.
pub fn polylines_to_svg(paths: &[Path], options: &StyleOptions) -> String {
    let mut out = format!("<g {}>", options.attributes());
    for path in paths.iter().filter(|p| !p.is_empty()) {
        out.push_str(&format!("<path d=\"{}\" />", path_data(path)));
    }
    out.push_str("</g>");
    out
}

/// Wrap a group in a root `<svg>` with a full-canvas background rectangle
pub fn document(width: f64, height: f64, background: &str, group: &str) -> String {
    let width = format_number(width);
    let height = format_number(height);
    format!(
        "<svg viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n    <rect width=\"{w}\" height=\"{h}\" fill=\"{bg}\" />\n    {group}\n  </svg>",
        w = width,
        h = height,
        bg = escape_attr(background),
        group = group,
    )
}
