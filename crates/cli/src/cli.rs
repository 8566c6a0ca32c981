use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use skylag_vis::dashboard::ChartKind;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the flight delay dashboard into an HTML page.
    View(ViewArgs),
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    /// Specify the JSON file with the dashboard data.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) data: PathBuf,

    /// Specify the directory where `index.html` will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify the page title.
    #[arg(short, long, default_value = "Flight Delay Analysis")]
    pub(crate) title: String,

    /// Leave the container of a chart out of the page.
    #[arg(short, long, value_enum)]
    pub(crate) skip: Vec<Chart>,

    /// Draw charts with a fixed size instead of resizing them with the page.
    #[arg(long = "static")]
    pub(crate) fixed_size: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Chart {
    TimeOfDay,
    Seasonal,
    AircraftAge,
    Cascade,
    ModelPerformance,
}

impl From<Chart> for ChartKind {
    fn from(chart: Chart) -> Self {
        match chart {
            Chart::TimeOfDay => ChartKind::TimeOfDay,
            Chart::Seasonal => ChartKind::Seasonal,
            Chart::AircraftAge => ChartKind::AircraftAge,
            Chart::Cascade => ChartKind::Cascade,
            Chart::ModelPerformance => ChartKind::ModelPerformance,
        }
    }
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}

fn parse_dir(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
