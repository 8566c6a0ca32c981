use crate::build::error::BuildError;
use crate::build::error::SeriesDefect;
use crate::chart::Layout;
use crate::chart::Legend;
use crate::chart::PlotDescriptor;
use crate::chart::Series;
use crate::chart::axes::AxisSpec;
use crate::chart::axes::Range;
use crate::chart::trace::LineStyle;
use crate::chart::trace::LineTrace;
use crate::chart::trace::MarkerStyle;
use crate::chart::trace::Mode;
use crate::chart::trace::PerPoint;
use crate::chart::trace::ScatterTrace;
use crate::chart::trace::Trace;
use crate::id::MountId;
use crate::style::palette;

const POINTS_NAME: &str = "Aircraft Data Points";
const TREND_NAME: &str = "Trend";

/// Aircraft age against delay: a point cloud with per-point marker sizes and
/// a dashed trend overlay.
///
/// The trend is drawn as given. It is never fitted here, so a flat trend
/// describing the absence of correlation must be computed by the data source.
pub fn build_scatter_with_trend(
    points: Series,
    sizes: Vec<f64>,
    trend: Series,
    x_range: Range,
    y_range: Range,
) -> Result<PlotDescriptor, BuildError> {
    points.check(POINTS_NAME)?;
    trend.check(TREND_NAME)?;

    if sizes.len() != points.len() {
        return Err(BuildError::malformed(
            POINTS_NAME,
            SeriesDefect::PerPointLength {
                attribute: "marker size",
                expected: points.len(),
                actual: sizes.len(),
            },
        ));
    }

    let cloud = ScatterTrace {
        name: String::from(POINTS_NAME),
        series: points,
        marker: MarkerStyle {
            color: PerPoint::Uniform(palette::STEEL),
            size: Some(PerPoint::Each(sizes)),
            opacity: Some(0.7),
            outline: Some(LineStyle::solid(palette::WHITE, 1.0)),
        },
    };

    let trend = LineTrace {
        name: String::from(TREND_NAME),
        series: trend,
        mode: Mode::Lines,
        line: LineStyle::dashed(palette::PURE_RED, 2.0),
        marker: None,
    };

    let x_axis = AxisSpec::titled("Aircraft Age (years)").with_range(x_range);
    let y_axis = AxisSpec::titled("Average Delay Time (minutes)").with_range(y_range);

    let mut layout = Layout::new("Aircraft Age vs. Delay Time", x_axis, y_axis);
    layout.legend = Some(Legend {
        x: 0.01,
        y: 0.99,
        background: Some(palette::LEGEND_BACKGROUND),
    });

    PlotDescriptor::new(
        MountId::AIRCRAFT_AGE,
        vec![Trace::Scatter(cloud), Trace::Line(trend)],
        layout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::axes::AxisName;
    use crate::chart::trace::Dash;

    fn points() -> Series {
        Series::new(vec![1.5, 12.0, 20.25], vec![14.0, 31.5, 22.0])
    }

    fn flat_trend() -> Series {
        Series::new(vec![0.0, 25.0], vec![20.0, 20.0])
    }

    #[test]
    fn builds_cloud_and_dashed_trend() -> Result<(), BuildError> {
        let descriptor = build_scatter_with_trend(
            points(),
            vec![6.0, 9.5, 14.0],
            flat_trend(),
            Range::new(0.0, 25.0),
            Range::new(0.0, 45.0),
        )?;

        let [Trace::Scatter(cloud), Trace::Line(trend)] = descriptor.traces() else {
            panic!("expected a scatter and a line trace");
        };
        assert_eq!(cloud.marker.size, Some(PerPoint::Each(vec![6.0, 9.5, 14.0])));
        assert_eq!(cloud.marker.opacity, Some(0.7));
        assert_eq!(trend.line.dash, Dash::Dash);
        assert_eq!(trend.series, flat_trend());
        assert_eq!(descriptor.layout().y_axis.range, Some(Range::new(0.0, 45.0)));

        Ok(())
    }

    #[test]
    fn sizes_must_pair_with_points() {
        let result = build_scatter_with_trend(
            points(),
            vec![6.0],
            flat_trend(),
            Range::new(0.0, 25.0),
            Range::new(0.0, 45.0),
        );

        assert!(matches!(
            result,
            Err(BuildError::MalformedSeries {
                defect: SeriesDefect::PerPointLength { expected: 3, actual: 1, .. },
                ..
            })
        ));
    }

    #[test]
    fn reversed_range_is_invalid() {
        let result = build_scatter_with_trend(
            points(),
            vec![6.0, 9.5, 14.0],
            flat_trend(),
            Range::new(0.0, 25.0),
            Range::new(45.0, 0.0),
        );

        assert_eq!(
            result,
            Err(BuildError::InvalidRange {
                axis: AxisName::Y,
                min: 45.0,
                max: 0.0
            })
        );
    }

    #[test]
    fn empty_trend_is_malformed() {
        let result = build_scatter_with_trend(
            points(),
            vec![6.0, 9.5, 14.0],
            Series::new(Vec::<f64>::new(), Vec::new()),
            Range::new(0.0, 25.0),
            Range::new(0.0, 45.0),
        );

        assert_eq!(
            result,
            Err(BuildError::malformed(TREND_NAME, SeriesDefect::Empty))
        );
    }
}
