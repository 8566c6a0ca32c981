use crate::build::error::BuildError;
use crate::chart::Datum;
use crate::chart::Layout;
use crate::chart::PlotDescriptor;
use crate::chart::Series;
use crate::chart::axes::AxisSpec;
use crate::chart::axes::RangeMode;
use crate::chart::trace::BarTrace;
use crate::chart::trace::MarkerStyle;
use crate::chart::trace::PerPoint;
use crate::chart::trace::Trace;
use crate::id::MountId;
use crate::style::DELAY_RULE;
use crate::style::classify;

const NAME: &str = "Average Delay (minutes)";

/// Average delay by month, one bar per month colored by the delay rule.
pub fn build_seasonal<I, S>(months: I, delays: Vec<f64>) -> Result<PlotDescriptor, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let colors = delays
        .iter()
        .map(|&delay| classify(delay, &DELAY_RULE))
        .collect();

    let series = Series::new(months.into_iter().map(|month| Datum::Label(month.into())), delays);
    series.check(NAME)?;

    let trace = BarTrace {
        name: String::from(NAME),
        series,
        marker: MarkerStyle {
            color: PerPoint::Each(colors),
            size: None,
            opacity: None,
            outline: None,
        },
    };

    let x_axis = AxisSpec::titled("Month");
    let y_axis = AxisSpec::titled(NAME).with_range_mode(RangeMode::ToZero);
    let layout = Layout::new("Average Flight Delay by Month", x_axis, y_axis);

    PlotDescriptor::new(MountId::SEASONAL, vec![Trace::Bar(trace)], layout)
}
