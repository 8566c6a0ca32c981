//! Shared visual conventions of the dashboard: the palette, backgrounds,
//! margin presets and the color bucketing rule used to classify values.

use std::borrow::Cow;
use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// A CSS color understood by the rendering library, e.g. `#4caf50` or `red`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Creates a color from a string known at compile time.
    pub const fn from_static(color: &'static str) -> Color {
        Self(Cow::Borrowed(color))
    }

    /// Creates a color from an owned string.
    pub fn new(color: impl Into<String>) -> Color {
        Self(Cow::Owned(color.into()))
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The dashboard palette.
pub mod palette {
    use super::Color;

    /// Low delays.
    pub const GREEN: Color = Color::from_static("#4caf50");
    /// Moderate delays.
    pub const ORANGE: Color = Color::from_static("#ff9800");
    /// High delays and airports where delays originate.
    pub const RED: Color = Color::from_static("#f44336");
    /// Airports affected by a delay cascade.
    pub const BLUE: Color = Color::from_static("#2196f3");
    /// Primary series color.
    pub const NAVY: Color = Color::from_static("#0033a0");
    /// Point cloud color.
    pub const STEEL: Color = Color::from_static("#1f77b4");
    /// Marker outlines on point clouds.
    pub const WHITE: Color = Color::from_static("#fff");
    /// Marker outlines on network nodes.
    pub const BLACK: Color = Color::from_static("black");
    /// Reference and trend lines.
    pub const PURE_RED: Color = Color::from_static("red");
    /// Model curves.
    pub const PURE_BLUE: Color = Color::from_static("blue");
    /// Annotation borders.
    pub const BORDER: Color = Color::from_static("#ddd");

    /// Plot and paper background of every chart.
    pub const BACKGROUND: Color = Color::from_static("#f8f9fa");
    /// Translucent legend background.
    pub const LEGEND_BACKGROUND: Color = Color::from_static("rgba(255,255,255,0.5)");
    /// Translucent annotation background.
    pub const ANNOTATION_BACKGROUND: Color = Color::from_static("rgba(255,255,255,0.8)");
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Margins {
    #[serde(rename = "t")]
    pub top: u32,
    #[serde(rename = "r")]
    pub right: u32,
    #[serde(rename = "b")]
    pub bottom: u32,
    #[serde(rename = "l")]
    pub left: u32,
}

impl Margins {
    /// Margins of charts with titled axes.
    pub const STANDARD: Margins = Margins {
        top: 50,
        right: 50,
        bottom: 80,
        left: 80,
    };

    /// Margins of charts whose axes are hidden.
    pub const COMPACT: Margins = Margins {
        top: 50,
        right: 50,
        bottom: 50,
        left: 50,
    };
}

/// A classification band: values strictly below `upper` map to `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Exclusive upper bound of the band.
    pub upper: f64,
    /// Color of the values in the band.
    pub color: Color,
}

impl Bucket {
    /// Creates a bucket.
    pub const fn new(upper: f64, color: Color) -> Bucket {
        Self { upper, color }
    }
}

/// An ordered list of buckets followed by a catch-all color.
///
/// The first bucket whose upper bound exceeds a value wins. Bounds are
/// finite and strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRule {
    buckets: Cow<'static, [Bucket]>,
    catch_all: Color,
}

impl ColorRule {
    /// Creates a rule, validating that the bounds are finite and strictly increasing.
    pub fn new(buckets: Vec<Bucket>, catch_all: Color) -> Result<ColorRule, StyleError> {
        validate(&buckets)?;

        Ok(Self {
            buckets: Cow::Owned(buckets),
            catch_all,
        })
    }

    // Only used for the built-in rules, which are checked by the tests below.
    const fn from_static(buckets: &'static [Bucket], catch_all: Color) -> ColorRule {
        Self {
            buckets: Cow::Borrowed(buckets),
            catch_all,
        }
    }

    /// The bounded buckets in evaluation order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The color of values not below any bound.
    pub fn catch_all(&self) -> &Color {
        &self.catch_all
    }
}

fn validate(buckets: &[Bucket]) -> Result<(), StyleError> {
    for (index, bucket) in buckets.iter().enumerate() {
        if !bucket.upper.is_finite() {
            return Err(StyleError::NonFiniteBound { index });
        }
    }

    for (index, pair) in buckets.windows(2).enumerate() {
        if pair[0].upper >= pair[1].upper {
            return Err(StyleError::UnorderedBounds {
                index: index + 1,
                previous: pair[0].upper,
                current: pair[1].upper,
            });
        }
    }

    Ok(())
}

const DELAY_BUCKETS: &[Bucket] = &[
    Bucket::new(15.0, palette::GREEN),
    Bucket::new(25.0, palette::ORANGE),
];

/// Average delay rule shared by every chart that colors delays.
pub const DELAY_RULE: ColorRule = ColorRule::from_static(DELAY_BUCKETS, palette::RED);

/// Returns the color of the first bucket whose upper bound exceeds `value`,
/// or the catch-all color. `NaN` and `+inf` fall into the catch-all.
pub fn classify(value: f64, rule: &ColorRule) -> Color {
    rule.buckets
        .iter()
        .find(|bucket| value < bucket.upper)
        .map(|bucket| &bucket.color)
        .unwrap_or(&rule.catch_all)
        .clone()
}

/// The error type for constructing color rules.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// The bound at `index` is NaN or infinite.
    #[allow(missing_docs)]
    NonFiniteBound { index: usize },

    /// The bound at `index` does not exceed the one before it.
    #[allow(missing_docs)]
    UnorderedBounds {
        index: usize,
        previous: f64,
        current: f64,
    },
}

impl Display for StyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let style_error = "style error:";

        match self {
            StyleError::NonFiniteBound { index } => {
                write!(f, "{style_error} bucket {index} has a non-finite upper bound")
            }
            StyleError::UnorderedBounds {
                index,
                previous,
                current,
            } => write!(
                f,
                "{style_error} bucket {index} bound {current} must be greater than {previous}"
            ),
        }
    }
}

impl Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(rule: &ColorRule, color: &Color) -> usize {
        rule.buckets()
            .iter()
            .position(|b| &b.color == color)
            .unwrap_or(rule.buckets().len())
    }

    #[test]
    fn builtin_delay_rule_is_valid() -> Result<(), StyleError> {
        let rule = ColorRule::new(DELAY_RULE.buckets().to_vec(), DELAY_RULE.catch_all().clone())?;
        assert_eq!(rule, DELAY_RULE);
        Ok(())
    }

    #[test]
    fn classify_uses_first_exceeding_bound() {
        assert_eq!(classify(10.0, &DELAY_RULE), palette::GREEN);
        assert_eq!(classify(15.0, &DELAY_RULE), palette::ORANGE);
        assert_eq!(classify(24.99, &DELAY_RULE), palette::ORANGE);
        assert_eq!(classify(25.0, &DELAY_RULE), palette::RED);
    }

    #[test]
    fn classify_is_total() {
        assert_eq!(classify(-1000.0, &DELAY_RULE), palette::GREEN);
        assert_eq!(classify(f64::NEG_INFINITY, &DELAY_RULE), palette::GREEN);
        assert_eq!(classify(f64::MAX, &DELAY_RULE), palette::RED);
        assert_eq!(classify(f64::INFINITY, &DELAY_RULE), palette::RED);
        assert_eq!(classify(f64::NAN, &DELAY_RULE), palette::RED);
    }

    #[test]
    fn classify_is_monotonic() -> Result<(), StyleError> {
        let rule = ColorRule::new(
            vec![
                Bucket::new(-10.0, Color::new("a")),
                Bucket::new(0.0, Color::new("b")),
                Bucket::new(0.5, Color::new("c")),
                Bucket::new(100.0, Color::new("d")),
            ],
            Color::new("e"),
        )?;

        let mut previous = 0;
        let mut value = -50.0;
        while value < 150.0 {
            let current = position(&rule, &classify(value, &rule));
            assert!(current >= previous, "value {value} moved to an earlier bucket");
            previous = current;
            value += 0.25;
        }

        Ok(())
    }

    #[test]
    fn empty_rule_always_yields_catch_all() -> Result<(), StyleError> {
        let rule = ColorRule::new(Vec::new(), palette::BLUE)?;
        assert_eq!(classify(0.0, &rule), palette::BLUE);
        Ok(())
    }

    #[test]
    fn rejects_unordered_bounds() {
        let result = ColorRule::new(
            vec![
                Bucket::new(25.0, palette::ORANGE),
                Bucket::new(15.0, palette::GREEN),
            ],
            palette::RED,
        );

        assert_eq!(
            result,
            Err(StyleError::UnorderedBounds {
                index: 1,
                previous: 25.0,
                current: 15.0
            })
        );
    }

    #[test]
    fn rejects_equal_and_non_finite_bounds() {
        let equal = ColorRule::new(
            vec![Bucket::new(1.0, palette::GREEN), Bucket::new(1.0, palette::RED)],
            palette::BLUE,
        );
        assert!(matches!(equal, Err(StyleError::UnorderedBounds { .. })));

        let nan = ColorRule::new(vec![Bucket::new(f64::NAN, palette::GREEN)], palette::BLUE);
        assert_eq!(nan, Err(StyleError::NonFiniteBound { index: 0 }));
    }
}
