use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use log::warn;
use skylag_vis::dashboard::ChartKind;
use skylag_vis::dashboard::Dashboard;
use skylag_vis::dashboard::RenderReport;
use skylag_vis::dataset::Dataset;
use skylag_vis::ready::ReadySignal;
use skylag_vis::render::DrawOptions;
use skylag_vis::render::Render;
use skylag_vis::render::document::HtmlDocument;
use skylag_vis::render::output::OutputFile;

use crate::cli::PathExt;
use crate::cli::ViewArgs;
use crate::error::CliError;
use crate::error::DatasetError;

pub(crate) fn view(args: ViewArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    println!(
        "skylag renders the dashboard from: `{}` into: `{}`",
        args.data.display(),
        output_path.display()
    );

    let dataset = load(&args.data).map_err(|error| CliError::Dataset {
        path: args.data.clone(),
        error,
    })?;

    let skipped: Vec<ChartKind> = args.skip.iter().copied().map(ChartKind::from).collect();
    let mut document = HtmlDocument::new(args.title);
    for kind in ChartKind::ALL {
        if skipped.contains(&kind) {
            warn!("leaving the {kind} chart container out of the page");
        } else {
            document.add_container(kind.mount_id());
        }
    }

    let options = DrawOptions {
        responsive: !args.fixed_size,
    };
    let mut ready: ReadySignal<'_, HtmlDocument, RenderReport> = ReadySignal::new();
    Dashboard::new(&dataset, options).on_ready(&mut ready)?;

    info!("the host document is ready");
    let report = ready.fire(&mut document).unwrap_or_default();

    let mut output = OutputFile::new(&output_path)?;
    document.render(&mut output)?;
    output.finish()?;

    summarize(&report);

    if report.rendered().next().is_none() {
        return Err(CliError::NothingRendered);
    }

    Ok(())
}

fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let reader = BufReader::new(File::open(path)?);
    let dataset = serde_json::from_reader(reader)?;
    Ok(dataset)
}

fn summarize(report: &RenderReport) {
    for kind in report.rendered() {
        println!("  rendered  {kind} -> #{}", kind.mount_id());
    }

    for (kind, error) in report.failed() {
        println!("  failed    {kind}: {error}");
    }
}
