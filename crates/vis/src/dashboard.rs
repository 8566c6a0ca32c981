//! The five dashboard charts as independent, failure-isolated render tasks.

use std::fmt::Display;

use log::debug;
use log::error;
use log::info;

use crate::build;
use crate::chart::PlotDescriptor;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::error::VisError;
use crate::id::MountId;
use crate::ready::ReadySignal;
use crate::render::DrawOptions;
use crate::render::RenderAdapter;
use crate::render::RenderHandle;

/// The charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Average delay by hour of day.
    TimeOfDay,
    /// Average delay by month.
    Seasonal,
    /// Aircraft age against delay.
    AircraftAge,
    /// The airport delay cascade network.
    Cascade,
    /// The ROC curve of the prediction model.
    ModelPerformance,
}

impl ChartKind {
    /// Every chart, in the order the dashboard renders them.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::TimeOfDay,
        ChartKind::Seasonal,
        ChartKind::AircraftAge,
        ChartKind::Cascade,
        ChartKind::ModelPerformance,
    ];

    /// The container the chart is drawn into.
    pub fn mount_id(&self) -> MountId {
        match self {
            ChartKind::TimeOfDay => MountId::TIME_OF_DAY,
            ChartKind::Seasonal => MountId::SEASONAL,
            ChartKind::AircraftAge => MountId::AIRCRAFT_AGE,
            ChartKind::Cascade => MountId::CASCADE,
            ChartKind::ModelPerformance => MountId::MODEL_PERFORMANCE,
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChartKind::TimeOfDay => "time of day",
            ChartKind::Seasonal => "seasonal",
            ChartKind::AircraftAge => "aircraft age",
            ChartKind::Cascade => "cascade",
            ChartKind::ModelPerformance => "model performance",
        };

        f.write_str(name)
    }
}

/// Builds and draws the dashboard charts from one dataset.
///
/// Each chart is its own task: it can be rendered alone, rendering it again
/// replaces the previous chart, and its failure never affects the others.
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    options: DrawOptions,
}

impl<'a> Dashboard<'a> {
    /// Creates a dashboard over `dataset`.
    pub fn new(dataset: &'a Dataset, options: DrawOptions) -> Dashboard<'a> {
        Self { dataset, options }
    }

    /// Builds the descriptor of one chart.
    pub fn build(&self, kind: ChartKind) -> Result<PlotDescriptor> {
        let data = self.dataset;

        let descriptor = match kind {
            ChartKind::TimeOfDay => build::build_time_series(data.time_of_day.clone()),
            ChartKind::Seasonal => build::build_seasonal(
                data.seasonal.months.iter().cloned(),
                data.seasonal.delays.clone(),
            ),
            ChartKind::AircraftAge => {
                let age = &data.aircraft_age;
                build::build_scatter_with_trend(
                    age.points.clone(),
                    age.sizes.clone(),
                    age.trend.clone(),
                    age.x_range,
                    age.y_range,
                )
            }
            ChartKind::Cascade => {
                build::build_cascade(&data.cascade.nodes, &data.cascade.propagation)
            }
            ChartKind::ModelPerformance => {
                let model = &data.model_performance;
                build::build_roc(model.fpr.clone(), model.tpr.clone(), &model.auc_label)
            }
        }?;

        Ok(descriptor)
    }

    /// Builds one chart and draws it into its container.
    pub fn render<A>(&self, kind: ChartKind, adapter: &mut A) -> ChartOutcome
    where
        A: RenderAdapter,
    {
        let mount_id = kind.mount_id();
        let result = self.build(kind).and_then(|descriptor| {
            debug!("built the {kind} chart with {} trace(s)", descriptor.traces().len());
            adapter
                .draw(&mount_id, descriptor, self.options)
                .map_err(VisError::from)
        });

        if let Err(err) = &result {
            error!("the {kind} chart in \"{mount_id}\" was not rendered: {err}");
        }

        ChartOutcome { kind, result }
    }

    /// Renders every chart in the fixed dashboard order.
    pub fn render_all<A>(&self, adapter: &mut A) -> RenderReport
    where
        A: RenderAdapter,
    {
        let outcomes: Vec<ChartOutcome> = ChartKind::ALL
            .into_iter()
            .map(|kind| self.render(kind, adapter))
            .collect();

        let report = RenderReport { outcomes };
        info!(
            "rendered {} of {} charts",
            report.rendered().count(),
            report.outcomes.len()
        );

        report
    }

    /// Registers the rendering of every chart as the handler of `signal`.
    pub fn on_ready<A>(self, signal: &mut ReadySignal<'a, A, RenderReport>) -> Result<()>
    where
        A: RenderAdapter,
    {
        signal.on_ready(move |adapter| self.render_all(adapter))
    }
}

/// The result of rendering one chart.
#[derive(Debug)]
pub struct ChartOutcome {
    /// The chart.
    pub kind: ChartKind,
    /// The draw handle, or why the chart is missing.
    pub result: Result<RenderHandle>,
}

/// The outcomes of a full dashboard render, in render order.
#[derive(Debug, Default)]
pub struct RenderReport {
    outcomes: Vec<ChartOutcome>,
}

impl RenderReport {
    /// Every outcome in render order.
    pub fn outcomes(&self) -> &[ChartOutcome] {
        &self.outcomes
    }

    /// The charts that were drawn.
    pub fn rendered(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .map(|outcome| outcome.kind)
    }

    /// The charts that failed, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (ChartKind, &VisError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|err| (outcome.kind, err)))
    }
}
