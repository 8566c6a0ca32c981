use crate::build::error::BuildError;
use crate::chart::HoverMode;
use crate::chart::Layout;
use crate::chart::PlotDescriptor;
use crate::chart::Series;
use crate::chart::axes::AxisSpec;
use crate::chart::axes::RangeMode;
use crate::chart::axes::TickPolicy;
use crate::chart::trace::LineStyle;
use crate::chart::trace::LineTrace;
use crate::chart::trace::MarkerStyle;
use crate::chart::trace::Mode;
use crate::chart::trace::PerPoint;
use crate::chart::trace::Trace;
use crate::id::MountId;
use crate::style::palette;

const NAME: &str = "Average Delay (minutes)";

/// Average delay by hour of day: hours on x, delays on y.
pub fn build_time_series(hours: Series) -> Result<PlotDescriptor, BuildError> {
    hours.check(NAME)?;

    let trace = LineTrace {
        name: String::from(NAME),
        series: hours,
        mode: Mode::LinesMarkers,
        line: LineStyle::solid(palette::NAVY, 2.0),
        marker: Some(MarkerStyle {
            size: Some(PerPoint::Uniform(8.0)),
            ..MarkerStyle::filled(palette::NAVY)
        }),
    };

    let x_axis = AxisSpec::titled("Hour of Day (24-hour format)").with_ticks(TickPolicy {
        start: 0.0,
        step: 2.0,
    });
    let y_axis = AxisSpec::titled(NAME).with_range_mode(RangeMode::ToZero);

    let mut layout = Layout::new("Average Flight Delay by Hour of Day", x_axis, y_axis);
    layout.hover_mode = Some(HoverMode::Closest);

    PlotDescriptor::new(MountId::TIME_OF_DAY, vec![Trace::Line(trace)], layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::error::SeriesDefect;

    fn hours(delays: Vec<f64>) -> Series {
        Series::new((0..24).map(f64::from), delays)
    }

    #[test]
    fn full_day_builds_one_line_trace() -> Result<(), BuildError> {
        let descriptor = build_time_series(hours(vec![12.0; 24]))?;

        assert_eq!(descriptor.id(), &MountId::TIME_OF_DAY);
        assert_eq!(descriptor.traces().len(), 1);
        assert_eq!(descriptor.traces()[0].mode(), Mode::LinesMarkers);

        let layout = descriptor.layout();
        assert_eq!(
            layout.x_axis.tick_policy,
            Some(TickPolicy {
                start: 0.0,
                step: 2.0
            })
        );
        assert_eq!(layout.y_axis.range_mode, RangeMode::ToZero);

        Ok(())
    }

    #[test]
    fn missing_hour_is_malformed() {
        let result = build_time_series(hours(vec![12.0; 23]));

        assert_eq!(
            result,
            Err(BuildError::malformed(
                NAME,
                SeriesDefect::LengthMismatch { x: 24, y: 23 }
            ))
        );
    }

    #[test]
    fn infinite_delays_are_malformed() {
        let result = build_time_series(hours(vec![f64::INFINITY; 24]));

        assert_eq!(
            result,
            Err(BuildError::malformed(
                NAME,
                SeriesDefect::NonFinite {
                    attribute: "y",
                    index: 0
                }
            ))
        );
    }

    #[test]
    fn empty_series_is_malformed() {
        let result = build_time_series(Series::new(Vec::<f64>::new(), Vec::new()));

        assert!(matches!(
            result,
            Err(BuildError::MalformedSeries {
                defect: SeriesDefect::Empty,
                ..
            })
        ));
    }
}
