//! Axis configuration: titles, ranges and tick placement.

use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use crate::build::error::BuildError;

/// Identifies an axis in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisName {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisName::X => f.write_str("x axis"),
            AxisName::Y => f.write_str("y axis"),
        }
    }
}

/// Configuration of one chart axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// The axis title.
    pub title: Option<String>,
    /// A fixed visible range; the rendering library autoscales when absent.
    pub range: Option<Range>,
    /// Whether autoscaling always includes zero.
    pub range_mode: RangeMode,
    /// Evenly spaced ticks, if not left to the rendering library.
    pub tick_policy: Option<TickPolicy>,
    /// Whether grid lines are drawn.
    pub show_grid: bool,
    /// Whether tick labels are drawn.
    pub show_tick_labels: bool,
    /// Whether the zero line is drawn.
    pub zero_line: bool,
}

impl AxisSpec {
    /// A visible axis with a title.
    pub fn titled(title: impl Into<String>) -> AxisSpec {
        Self {
            title: Some(title.into()),
            range: None,
            range_mode: RangeMode::Normal,
            tick_policy: None,
            show_grid: true,
            show_tick_labels: true,
            zero_line: true,
        }
    }

    /// An axis without grid, tick labels or zero line.
    pub fn hidden() -> AxisSpec {
        Self {
            title: None,
            range: None,
            range_mode: RangeMode::Normal,
            tick_policy: None,
            show_grid: false,
            show_tick_labels: false,
            zero_line: false,
        }
    }

    /// Sets a fixed range.
    pub fn with_range(mut self, range: Range) -> AxisSpec {
        self.range = Some(range);
        self
    }

    /// Sets the range mode.
    pub fn with_range_mode(mut self, range_mode: RangeMode) -> AxisSpec {
        self.range_mode = range_mode;
        self
    }

    /// Sets the tick policy.
    pub fn with_ticks(mut self, tick_policy: TickPolicy) -> AxisSpec {
        self.tick_policy = Some(tick_policy);
        self
    }

    pub(crate) fn check(&self, axis: AxisName) -> Result<(), BuildError> {
        match self.range {
            Some(range) => range.check(axis),
            None => Ok(()),
        }
    }
}

/// A closed interval `[min, max]` with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower end.
    pub min: f64,
    /// Upper end.
    pub max: f64,
}

impl Range {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Range = Range { min: 0.0, max: 1.0 };

    /// Creates a range. It is checked when a descriptor is built from it.
    pub const fn new(min: f64, max: f64) -> Range {
        Self { min, max }
    }

    /// Fails with [BuildError::InvalidRange] unless both ends are finite and `min < max`.
    pub fn check(&self, axis: AxisName) -> Result<(), BuildError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(BuildError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// How the rendering library extends an autoscaled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// Fit the data.
    #[default]
    Normal,
    /// Fit the data and always include zero.
    ToZero,
}

/// Ticks at `start + n * step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPolicy {
    /// The first tick.
    pub start: f64,
    /// The distance between ticks.
    pub step: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_requires_min_below_max() {
        assert_eq!(Range::UNIT.check(AxisName::Y), Ok(()));
        assert!(Range::new(2.0, 1.0).check(AxisName::Y).is_err());
        assert!(Range::new(0.0, f64::NAN).check(AxisName::Y).is_err());
    }

    #[test]
    fn hidden_axis_draws_nothing() {
        let axis = AxisSpec::hidden();

        assert!(!axis.show_grid);
        assert!(!axis.show_tick_labels);
        assert!(!axis.zero_line);
        assert_eq!(axis.title, None);
    }
}
