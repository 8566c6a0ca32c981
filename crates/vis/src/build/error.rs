//! Defines the errors reported while building chart descriptors.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::cascade::CascadeError;
use crate::chart::axes::AxisName;

/// The error type for building a [PlotDescriptor](crate::chart::PlotDescriptor).
///
/// These are data or programming errors, never transient: retrying with the
/// same input fails the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The named series or trace violates a shape invariant.
    MalformedSeries {
        /// The series or trace name.
        series: String,
        /// What is wrong with it.
        defect: SeriesDefect,
    },

    /// A fixed axis range is empty, reversed or not finite.
    InvalidRange {
        /// The axis carrying the range.
        axis: AxisName,
        /// The lower end.
        min: f64,
        /// The upper end.
        max: f64,
    },

    /// The cascade network could not be laid out.
    Cascade(CascadeError),
}

impl BuildError {
    pub(crate) fn malformed(series: &str, defect: SeriesDefect) -> BuildError {
        BuildError::MalformedSeries {
            series: series.to_owned(),
            defect,
        }
    }
}

/// The shape violations reported by [BuildError::MalformedSeries].
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesDefect {
    /// The series has no points.
    Empty,

    /// The x and y sides have different lengths.
    LengthMismatch {
        /// Number of x values.
        x: usize,
        /// Number of y values.
        y: usize,
    },

    /// A per-point attribute does not have one value per point.
    PerPointLength {
        /// The attribute, e.g. `marker size`.
        attribute: &'static str,
        /// The series length.
        expected: usize,
        /// The attribute length.
        actual: usize,
    },

    /// A value is NaN or infinite.
    NonFinite {
        /// The attribute holding the value, e.g. `y`.
        attribute: &'static str,
        /// The position of the value.
        index: usize,
    },

    /// An opacity lies outside `[0, 1]`.
    OpacityOutOfRange(f64),

    /// A chart has no traces at all.
    NoTraces,
}

impl Display for SeriesDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesDefect::Empty => f.write_str("the series is empty"),
            SeriesDefect::LengthMismatch { x, y } => {
                write!(f, "{x} x values do not pair with {y} y values")
            }
            SeriesDefect::PerPointLength {
                attribute,
                expected,
                actual,
            } => write!(f, "{attribute} has {actual} values, expected {expected}"),
            SeriesDefect::NonFinite { attribute, index } => {
                write!(f, "{attribute} value at index {index} is not finite")
            }
            SeriesDefect::OpacityOutOfRange(opacity) => {
                write!(f, "opacity {opacity} is outside [0, 1]")
            }
            SeriesDefect::NoTraces => f.write_str("the chart has no traces"),
        }
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let build_error = "build error:";

        match self {
            BuildError::MalformedSeries { series, defect } => {
                write!(f, "{build_error} malformed series \"{series}\": {defect}")
            }
            BuildError::InvalidRange { axis, min, max } => write!(
                f,
                "{build_error} invalid {axis} range [{min}, {max}]: min must be below max"
            ),
            BuildError::Cascade(error) => write!(f, "{build_error} {error}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::MalformedSeries { .. } => None,
            BuildError::InvalidRange { .. } => None,
            BuildError::Cascade(error) => Some(error),
        }
    }
}

impl From<CascadeError> for BuildError {
    fn from(error: CascadeError) -> Self {
        BuildError::Cascade(error)
    }
}
