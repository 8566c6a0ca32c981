//! Typed inputs of the five dashboard charts.
//!
//! The dataset is produced by whatever data source feeds the dashboard; the
//! builders only ever read it.

use serde::Deserialize;
use serde::Serialize;

use crate::cascade::Node;
use crate::cascade::Propagation;
use crate::chart::Series;
use crate::chart::axes::Range;

/// Everything needed to build the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Average delay per hour of day.
    pub time_of_day: Series,
    /// Average delay per month.
    pub seasonal: Seasonal,
    /// Aircraft age against delay.
    pub aircraft_age: AircraftAge,
    /// The airport delay cascade.
    pub cascade: Cascade,
    /// Prediction model performance.
    pub model_performance: ModelPerformance,
}

/// Average delay per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seasonal {
    /// Month labels in display order.
    pub months: Vec<String>,
    /// Average delay of each month, in minutes.
    pub delays: Vec<f64>,
}

/// Aircraft age against delay, with a pre-computed trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftAge {
    /// Age in years on x, delay in minutes on y.
    pub points: Series,
    /// Marker size of each point.
    pub sizes: Vec<f64>,
    /// The trend line coordinates.
    pub trend: Series,
    /// Visible age range.
    pub x_range: Range,
    /// Visible delay range.
    pub y_range: Range,
}

/// Airports and the delay propagation between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cascade {
    /// The airports.
    pub nodes: Vec<Node>,
    /// Which airport's delays reached which.
    pub propagation: Vec<Propagation>,
}

/// The ROC curve of the delay prediction model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    /// False positive rates.
    pub fpr: Vec<f64>,
    /// True positive rates.
    pub tpr: Vec<f64>,
    /// The legend name of the curve, e.g. `Model (AUC = 0.78)`.
    pub auc_label: String,
}
