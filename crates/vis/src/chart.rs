//! Render-ready chart descriptors.
//!
//! A [PlotDescriptor] is pure data: the traces of one chart, the layout that
//! frames them and the mount point they target. Builders produce them,
//! [RenderAdapter](crate::render::RenderAdapter)s consume them.

pub mod axes;
pub mod trace;

use serde::Deserialize;
use serde::Serialize;

use crate::build::error::BuildError;
use crate::build::error::SeriesDefect;
use crate::chart::axes::AxisName;
use crate::chart::axes::AxisSpec;
use crate::chart::trace::Trace;
use crate::id::MountId;
use crate::style::Color;
use crate::style::Margins;
use crate::style::palette;

/// A single value on the x axis: either a number or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    /// A numeric coordinate.
    Number(f64),
    /// A categorical coordinate.
    Label(String),
}

impl Datum {
    /// Whether the datum is a label or a finite number.
    pub fn is_finite(&self) -> bool {
        match self {
            Datum::Number(value) => value.is_finite(),
            Datum::Label(_) => true,
        }
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Number(value)
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Datum::Label(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Label(value.to_owned())
    }
}

/// Paired x and y values, displayed in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    x: Vec<Datum>,
    y: Vec<f64>,
}

impl Series {
    /// Creates a series. The shape is checked by the builders that consume it.
    pub fn new<X, I, J>(x: I, y: J) -> Series
    where
        X: Into<Datum>,
        I: IntoIterator<Item = X>,
        J: IntoIterator<Item = f64>,
    {
        Self {
            x: x.into_iter().map(Into::into).collect(),
            y: y.into_iter().collect(),
        }
    }

    /// The x values.
    pub fn x(&self) -> &[Datum] {
        &self.x
    }

    /// The y values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The number of points, counted on the y values.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Checks that the series is non-empty, that both sides have the same
    /// length and that every number is finite.
    pub fn check(&self, name: &str) -> Result<(), BuildError> {
        let defect = if self.x.len() != self.y.len() {
            SeriesDefect::LengthMismatch {
                x: self.x.len(),
                y: self.y.len(),
            }
        } else if self.y.is_empty() {
            SeriesDefect::Empty
        } else if let Some(index) = self.x.iter().position(|x| !x.is_finite()) {
            SeriesDefect::NonFinite { attribute: "x", index }
        } else if let Some(index) = self.y.iter().position(|y| !y.is_finite()) {
            SeriesDefect::NonFinite { attribute: "y", index }
        } else {
            return Ok(());
        };

        Err(BuildError::malformed(name, defect))
    }
}

/// The fully specified, render-ready representation of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDescriptor {
    id: MountId,
    traces: Vec<Trace>,
    layout: Layout,
}

impl PlotDescriptor {
    /// Creates a descriptor after checking every trace and axis range.
    pub fn new(id: MountId, traces: Vec<Trace>, layout: Layout) -> Result<PlotDescriptor, BuildError> {
        if traces.is_empty() {
            return Err(BuildError::malformed(id.as_str(), SeriesDefect::NoTraces));
        }

        for trace in &traces {
            trace.check()?;
        }

        layout.x_axis.check(AxisName::X)?;
        layout.y_axis.check(AxisName::Y)?;

        Ok(Self { id, traces, layout })
    }

    /// The mount point the chart targets.
    pub fn id(&self) -> &MountId {
        &self.id
    }

    /// The traces in drawing order.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// The chart layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

/// Chart-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// The chart title.
    pub title: String,
    /// The horizontal axis.
    pub x_axis: AxisSpec,
    /// The vertical axis.
    pub y_axis: AxisSpec,
    /// The plot margins.
    pub margins: Margins,
    /// Plot and paper background.
    pub background: Color,
    /// Where to place the legend, if not at the library default.
    pub legend: Option<Legend>,
    /// Whether the legend is shown; the rendering library decides when absent.
    pub show_legend: Option<bool>,
    /// How hover labels pick points.
    pub hover_mode: Option<HoverMode>,
    /// Free-floating text boxes.
    pub annotations: Vec<Annotation>,
}

impl Layout {
    /// Creates a layout with the standard margins and background.
    pub fn new(title: impl Into<String>, x_axis: AxisSpec, y_axis: AxisSpec) -> Layout {
        Self {
            title: title.into(),
            x_axis,
            y_axis,
            margins: Margins::STANDARD,
            background: palette::BACKGROUND,
            legend: None,
            show_legend: None,
            hover_mode: None,
            annotations: Vec::new(),
        }
    }
}

/// Legend placement in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Horizontal position in `[0, 1]`.
    pub x: f64,
    /// Vertical position in `[0, 1]`.
    pub y: f64,
    /// The legend background.
    pub background: Option<Color>,
}

/// How hover labels pick the points they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    /// The point closest to the cursor.
    Closest,
    /// All points sharing the cursor's x value.
    X,
}

/// A text box anchored in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Horizontal position in `[0, 1]`.
    pub x: f64,
    /// Vertical position in `[0, 1]`.
    pub y: f64,
    /// The text; lines are separated by `<br>`.
    pub text: String,
    /// The box background.
    pub background: Color,
    /// The box border color.
    pub border_color: Color,
    /// The box border width in pixels.
    pub border_width: f64,
    /// The padding between the border and the text in pixels.
    pub border_pad: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::trace::LineTrace;

    #[test]
    fn series_check_reports_mismatch_before_emptiness() {
        let series = Series::new(Vec::<f64>::new(), vec![1.0]);

        assert_eq!(
            series.check("delays"),
            Err(BuildError::malformed(
                "delays",
                SeriesDefect::LengthMismatch { x: 0, y: 1 }
            ))
        );
    }

    #[test]
    fn series_check_rejects_empty_series() {
        let series = Series::new(Vec::<f64>::new(), Vec::new());

        assert_eq!(
            series.check("delays"),
            Err(BuildError::malformed("delays", SeriesDefect::Empty))
        );
    }

    #[test]
    fn series_check_rejects_non_finite_values() {
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![4.0, f64::NAN, 6.0]);
        assert_eq!(
            series.check("delays"),
            Err(BuildError::malformed(
                "delays",
                SeriesDefect::NonFinite { attribute: "y", index: 1 }
            ))
        );

        let series = Series::new(vec![0.0, f64::INFINITY], vec![4.0, 5.0]);
        assert_eq!(
            series.check("delays"),
            Err(BuildError::malformed(
                "delays",
                SeriesDefect::NonFinite { attribute: "x", index: 1 }
            ))
        );
    }

    #[test]
    fn labels_are_always_finite() {
        let series = Series::new(vec!["Jan", "Feb"], vec![1.0, 2.0]);

        assert_eq!(series.check("delays"), Ok(()));
    }

    #[test]
    fn descriptor_requires_traces() {
        let layout = Layout::new("empty", AxisSpec::titled("x"), AxisSpec::titled("y"));
        let result = PlotDescriptor::new(MountId::new("empty-plot"), Vec::new(), layout);

        assert_eq!(
            result,
            Err(BuildError::malformed("empty-plot", SeriesDefect::NoTraces))
        );
    }

    #[test]
    fn descriptor_checks_axis_ranges() {
        let mut x_axis = AxisSpec::titled("x");
        x_axis.range = Some(axes::Range::new(1.0, 1.0));
        let layout = Layout::new("bad range", x_axis, AxisSpec::titled("y"));
        let trace = Trace::Line(LineTrace::plain(
            "line",
            Series::new(vec![0.0, 1.0], vec![0.0, 1.0]),
            palette::NAVY,
        ));

        let result = PlotDescriptor::new(MountId::new("range-plot"), vec![trace], layout);

        assert_eq!(
            result,
            Err(BuildError::InvalidRange {
                axis: AxisName::X,
                min: 1.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn labels_and_numbers_deserialize_untagged() -> Result<(), serde_json::Error> {
        let series: Series = serde_json::from_str(r#"{"x": ["Jan", 2], "y": [10, 12.5]}"#)?;

        assert_eq!(series.x(), &[Datum::from("Jan"), Datum::from(2.0)]);
        assert_eq!(series.y(), &[10.0, 12.5]);

        Ok(())
    }
}
