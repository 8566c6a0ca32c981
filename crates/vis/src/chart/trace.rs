//! Trace variants and their marker and line styling.

use serde::Deserialize;
use serde::Serialize;

use crate::build::error::BuildError;
use crate::build::error::SeriesDefect;
use crate::cascade::Edge;
use crate::chart::Series;
use crate::style::Color;

/// One visual series within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trace {
    /// Connected points.
    Line(LineTrace),
    /// Vertical bars over categories.
    Bar(BarTrace),
    /// A point cloud.
    Scatter(ScatterTrace),
    /// Labelled network nodes.
    NetworkNodes(NodeTrace),
    /// Straight links between network nodes.
    NetworkEdges(EdgeTrace),
}

impl Trace {
    /// The name shown in the legend.
    pub fn name(&self) -> &str {
        match self {
            Trace::Line(trace) => &trace.name,
            Trace::Bar(trace) => &trace.name,
            Trace::Scatter(trace) => &trace.name,
            Trace::NetworkNodes(trace) => &trace.name,
            Trace::NetworkEdges(trace) => &trace.name,
        }
    }

    /// How the points of the trace are drawn.
    pub fn mode(&self) -> Mode {
        match self {
            Trace::Line(trace) => trace.mode,
            Trace::Bar(_) => Mode::Bar,
            Trace::Scatter(_) => Mode::Markers,
            Trace::NetworkNodes(_) => Mode::MarkersText,
            Trace::NetworkEdges(_) => Mode::Lines,
        }
    }

    /// Checks the series shape and that per-point styling matches it.
    pub fn check(&self) -> Result<(), BuildError> {
        let name = self.name();

        match self {
            Trace::Line(trace) => {
                trace.series.check(name)?;
                if let Some(marker) = &trace.marker {
                    marker.check(name, trace.series.len())?;
                }
                Ok(())
            }
            Trace::Bar(trace) => {
                trace.series.check(name)?;
                trace.marker.check(name, trace.series.len())
            }
            Trace::Scatter(trace) => {
                trace.series.check(name)?;
                trace.marker.check(name, trace.series.len())
            }
            Trace::NetworkNodes(trace) => {
                trace.series.check(name)?;
                trace.marker.check(name, trace.series.len())?;
                per_point_len(name, "text", trace.series.len(), trace.text.len())
            }
            Trace::NetworkEdges(trace) => check_opacity(name, trace.opacity),
        }
    }
}

/// The drawing mode tag of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Line segments only.
    #[serde(rename = "lines")]
    Lines,
    /// Markers only.
    #[serde(rename = "markers")]
    Markers,
    /// Line segments with a marker on every point.
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    /// Markers with a text label on every point.
    #[serde(rename = "markers+text")]
    MarkersText,
    /// Bars.
    #[serde(rename = "bar")]
    Bar,
}

impl Mode {
    /// The tag as understood by the rendering library.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lines => "lines",
            Mode::Markers => "markers",
            Mode::LinesMarkers => "lines+markers",
            Mode::MarkersText => "markers+text",
            Mode::Bar => "bar",
        }
    }
}

/// A line through the points of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    /// The legend name.
    pub name: String,
    /// The points.
    pub series: Series,
    /// Either [Mode::Lines] or [Mode::LinesMarkers].
    pub mode: Mode,
    /// The line styling.
    pub line: LineStyle,
    /// The marker styling, when markers are drawn.
    pub marker: Option<MarkerStyle>,
}

impl LineTrace {
    /// A solid line of width 2 without markers.
    pub fn plain(name: impl Into<String>, series: Series, color: Color) -> LineTrace {
        Self {
            name: name.into(),
            series,
            mode: Mode::Lines,
            line: LineStyle::solid(color, 2.0),
            marker: None,
        }
    }
}

/// One bar per point of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    /// The legend name.
    pub name: String,
    /// Categories on x, bar heights on y.
    pub series: Series,
    /// The bar fill.
    pub marker: MarkerStyle,
}

/// A point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    /// The legend name.
    pub name: String,
    /// The points.
    pub series: Series,
    /// The marker styling.
    pub marker: MarkerStyle,
}

/// Network nodes drawn as labelled markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTrace {
    /// The legend name.
    pub name: String,
    /// Node positions.
    pub series: Series,
    /// One label per node.
    pub text: Vec<String>,
    /// Where labels sit relative to their marker.
    pub text_position: TextPosition,
    /// The marker styling, usually per node.
    pub marker: MarkerStyle,
}

/// Network edges drawn as separate straight segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeTrace {
    /// The legend name.
    pub name: String,
    /// The segments, in drawing order.
    pub edges: Vec<Edge>,
    /// The segment styling.
    pub line: LineStyle,
    /// Trace opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Label placement relative to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    /// Centered above the marker.
    Top,
    /// Centered below the marker.
    Bottom,
}

/// A value either shared by every point or given once per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerPoint<T> {
    /// The same value for every point.
    Uniform(T),
    /// One value per point; the length must equal the series length.
    Each(Vec<T>),
}

impl<T> PerPoint<T> {
    fn len(&self) -> Option<usize> {
        match self {
            PerPoint::Uniform(_) => None,
            PerPoint::Each(values) => Some(values.len()),
        }
    }
}

/// Marker styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Fill color.
    pub color: PerPoint<Color>,
    /// Diameter in pixels.
    pub size: Option<PerPoint<f64>>,
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Marker border.
    pub outline: Option<LineStyle>,
}

impl MarkerStyle {
    /// A marker of one color with the library's default size.
    pub fn filled(color: Color) -> MarkerStyle {
        Self {
            color: PerPoint::Uniform(color),
            size: None,
            opacity: None,
            outline: None,
        }
    }

    fn check(&self, name: &str, points: usize) -> Result<(), BuildError> {
        if let Some(len) = self.color.len() {
            per_point_len(name, "marker color", points, len)?;
        }

        if let Some(len) = self.size.as_ref().and_then(PerPoint::len) {
            per_point_len(name, "marker size", points, len)?;
        }

        if let Some(index) = self.size.as_ref().and_then(non_finite_size) {
            return Err(BuildError::malformed(
                name,
                SeriesDefect::NonFinite {
                    attribute: "marker size",
                    index,
                },
            ));
        }

        match self.opacity {
            Some(opacity) => check_opacity(name, opacity),
            None => Ok(()),
        }
    }
}

/// Line styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke pattern.
    pub dash: Dash,
}

impl LineStyle {
    /// A solid stroke.
    pub fn solid(color: Color, width: f64) -> LineStyle {
        Self {
            color,
            width,
            dash: Dash::Solid,
        }
    }

    /// A dashed stroke.
    pub fn dashed(color: Color, width: f64) -> LineStyle {
        Self {
            color,
            width,
            dash: Dash::Dash,
        }
    }
}

/// Stroke pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    /// Continuous.
    #[default]
    Solid,
    /// Dashed.
    Dash,
}

fn per_point_len(name: &str, attribute: &'static str, expected: usize, actual: usize) -> Result<(), BuildError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BuildError::malformed(
            name,
            SeriesDefect::PerPointLength {
                attribute,
                expected,
                actual,
            },
        ))
    }
}

fn non_finite_size(size: &PerPoint<f64>) -> Option<usize> {
    match size {
        PerPoint::Uniform(size) => (!size.is_finite()).then_some(0),
        PerPoint::Each(sizes) => sizes.iter().position(|size| !size.is_finite()),
    }
}

fn check_opacity(name: &str, opacity: f64) -> Result<(), BuildError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(BuildError::malformed(name, SeriesDefect::OpacityOutOfRange(opacity)))
    }
}
