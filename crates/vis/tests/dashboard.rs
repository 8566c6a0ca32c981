use skylag_vis::build::error::BuildError;
use skylag_vis::build::error::SeriesDefect;
use skylag_vis::chart::PlotDescriptor;
use skylag_vis::dashboard::ChartKind;
use skylag_vis::dashboard::Dashboard;
use skylag_vis::dashboard::RenderReport;
use skylag_vis::dataset::Dataset;
use skylag_vis::error::VisError;
use skylag_vis::id::MountId;
use skylag_vis::ready::ReadySignal;
use skylag_vis::render::DrawOptions;
use skylag_vis::render::Render;
use skylag_vis::render::RenderAdapter;
use skylag_vis::render::RenderHandle;
use skylag_vis::render::document::HtmlDocument;
use skylag_vis::render::error::RenderError;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn dataset() -> Result<Dataset, serde_json::Error> {
    serde_json::from_str(include_str!("../../../demos/flight-delays.json"))
}

fn full_document() -> HtmlDocument {
    ChartKind::ALL
        .into_iter()
        .fold(HtmlDocument::new("Flight Delays"), |document, kind| {
            document.with_container(kind.mount_id())
        })
}

/// Keeps every descriptor it is asked to draw, per mount.
#[derive(Default)]
struct RecordingAdapter {
    drawn: Vec<(MountId, PlotDescriptor)>,
}

impl RenderAdapter for RecordingAdapter {
    fn draw(
        &mut self,
        mount_id: &MountId,
        descriptor: PlotDescriptor,
        _options: DrawOptions,
    ) -> Result<RenderHandle, RenderError> {
        let mut document = HtmlDocument::new("recording").with_container(mount_id.clone());
        let handle = document.draw(mount_id, descriptor.clone(), DrawOptions::default())?;

        self.drawn.retain(|(id, _)| id != mount_id);
        self.drawn.push((mount_id.clone(), descriptor));

        Ok(handle)
    }
}

#[test]
fn demo_dataset_renders_every_chart() -> TestResult {
    let dataset = dataset()?;
    let mut document = full_document();

    let report = Dashboard::new(&dataset, DrawOptions::default()).render_all(&mut document);

    assert_eq!(report.rendered().collect::<Vec<_>>(), ChartKind::ALL.to_vec());
    assert_eq!(report.failed().count(), 0);

    let mut page = String::new();
    document.render(&mut page)?;

    assert_eq!(page.matches("Plotly.newPlot(").count(), 5);
    assert_eq!(page.matches("DOMContentLoaded").count(), 1);

    let order: Vec<usize> = ChartKind::ALL
        .iter()
        .map(|kind| {
            page.find(&format!("Plotly.newPlot(\"{}\"", kind.mount_id()))
                .unwrap_or(usize::MAX)
        })
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));

    Ok(())
}

#[test]
fn missing_container_fails_only_its_chart() -> TestResult {
    let dataset = dataset()?;
    let mut document = HtmlDocument::new("Flight Delays");
    for kind in ChartKind::ALL {
        if kind != ChartKind::Cascade {
            document.add_container(kind.mount_id());
        }
    }

    let report = Dashboard::new(&dataset, DrawOptions::default()).render_all(&mut document);

    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, ChartKind::Cascade);
    assert!(matches!(
        failed[0].1,
        VisError::Render(RenderError::MountNotFound(id)) if *id == MountId::CASCADE
    ));
    assert_eq!(report.rendered().count(), 4);
    assert!(document.figure(&MountId::MODEL_PERFORMANCE).is_some());

    Ok(())
}

#[test]
fn malformed_data_fails_only_its_chart() -> TestResult {
    let mut dataset = dataset()?;
    dataset.seasonal.delays.pop();
    let mut document = full_document();

    let report = Dashboard::new(&dataset, DrawOptions::default()).render_all(&mut document);

    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 1);
    assert!(matches!(
        failed[0].1,
        VisError::Build(BuildError::MalformedSeries {
            defect: SeriesDefect::LengthMismatch { x: 12, y: 11 },
            ..
        })
    ));
    assert!(document.figure(&MountId::SEASONAL).is_none());
    assert!(document.figure(&MountId::CASCADE).is_some());

    Ok(())
}

#[test]
fn rendering_a_chart_again_replaces_it() -> TestResult {
    let dataset = dataset()?;
    let dashboard = Dashboard::new(&dataset, DrawOptions::default());
    let mut adapter = RecordingAdapter::default();

    dashboard.render_all(&mut adapter);
    let outcome = dashboard.render(ChartKind::Seasonal, &mut adapter);
    assert!(outcome.result.is_ok());

    assert_eq!(adapter.drawn.len(), 5);
    let seasonal: Vec<_> = adapter
        .drawn
        .iter()
        .filter(|(id, _)| *id == MountId::SEASONAL)
        .collect();
    assert_eq!(seasonal.len(), 1);
    assert_eq!(seasonal[0].1, dashboard.build(ChartKind::Seasonal)?);

    Ok(())
}

#[test]
fn descriptors_survive_a_json_round_trip() -> TestResult {
    let dataset = dataset()?;
    let dashboard = Dashboard::new(&dataset, DrawOptions::default());

    for kind in ChartKind::ALL {
        let descriptor = dashboard.build(kind)?;

        let json = serde_json::to_string(&descriptor)?;
        let decoded: PlotDescriptor = serde_json::from_str(&json)?;

        assert_eq!(decoded, descriptor, "{kind} descriptor changed in a round trip");
    }

    Ok(())
}

#[test]
fn readiness_signal_triggers_the_dashboard_once() -> TestResult {
    let dataset = dataset()?;
    let mut document = full_document();
    let mut signal: ReadySignal<'_, HtmlDocument, RenderReport> = ReadySignal::new();

    Dashboard::new(&dataset, DrawOptions::default()).on_ready(&mut signal)?;
    let second = Dashboard::new(&dataset, DrawOptions::default()).on_ready(&mut signal);
    assert!(matches!(second, Err(VisError::HandlerAlreadyRegistered)));

    assert!(document.figure(&MountId::TIME_OF_DAY).is_none());

    let report = signal.fire(&mut document).ok_or("the handler did not run")?;
    assert_eq!(report.rendered().count(), 5);
    assert!(document.figure(&MountId::TIME_OF_DAY).is_some());
    assert!(signal.fire(&mut document).is_none());

    Ok(())
}

#[test]
fn static_option_reaches_the_figure_config() -> TestResult {
    let dataset = dataset()?;
    let mut document = full_document();

    Dashboard::new(&dataset, DrawOptions { responsive: false }).render_all(&mut document);

    let figure = document
        .figure(&MountId::AIRCRAFT_AGE)
        .ok_or("aircraft age chart missing")?;
    assert_eq!(figure.config, r#"{"responsive":false}"#);

    Ok(())
}
