use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use skylag_vis::error::VisError;
use skylag_vis::render::error::RenderError;

#[derive(Debug)]
pub(crate) enum CliError {
    Path(String),
    Dataset { path: PathBuf, error: DatasetError },
    Render(RenderError),
    Vis(VisError),
    NothingRendered,
}

#[derive(Debug)]
pub(crate) enum DatasetError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(error) => write!(f, "reading failed: {error}"),
            DatasetError::Json(error) => write!(f, "invalid dataset: {error}"),
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::Io(error)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(error: serde_json::Error) -> Self {
        DatasetError::Json(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        CliError::Render(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
            CliError::Dataset { path, error } => {
                write!(f, "{cli_error} dataset `{}`: {error}", path.display())
            }
            CliError::Render(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::NothingRendered => write!(f, "{cli_error} none of the charts could be rendered"),
        }
    }
}
