use crate::build::error::BuildError;
use crate::chart::Layout;
use crate::chart::Legend;
use crate::chart::PlotDescriptor;
use crate::chart::Series;
use crate::chart::axes::AxisSpec;
use crate::chart::axes::Range;
use crate::chart::trace::LineStyle;
use crate::chart::trace::LineTrace;
use crate::chart::trace::Mode;
use crate::chart::trace::Trace;
use crate::id::MountId;
use crate::style::palette;

const REFERENCE_NAME: &str = "Random";

/// The ROC curve of the delay prediction model against the random-guess diagonal.
///
/// `auc_label` names the model curve in the legend, e.g. `Model (AUC = 0.78)`.
pub fn build_roc(fpr: Vec<f64>, tpr: Vec<f64>, auc_label: &str) -> Result<PlotDescriptor, BuildError> {
    let curve = Series::new(fpr, tpr);
    curve.check(auc_label)?;

    let model = LineTrace::plain(auc_label, curve, palette::PURE_BLUE);
    let reference = LineTrace {
        name: String::from(REFERENCE_NAME),
        series: Series::new([0.0, 1.0], [0.0, 1.0]),
        mode: Mode::Lines,
        line: LineStyle::dashed(palette::PURE_RED, 2.0),
        marker: None,
    };

    let x_axis = AxisSpec::titled("False Positive Rate").with_range(Range::UNIT);
    let y_axis = AxisSpec::titled("True Positive Rate").with_range(Range::UNIT);

    let mut layout = Layout::new("ROC Curve - Flight Delay Prediction Model", x_axis, y_axis);
    layout.legend = Some(Legend {
        x: 0.7,
        y: 0.1,
        background: None,
    });

    PlotDescriptor::new(
        MountId::MODEL_PERFORMANCE,
        vec![Trace::Line(model), Trace::Line(reference)],
        layout,
    )
}
