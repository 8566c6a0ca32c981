//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;

use crate::build::error::BuildError;
use crate::render::error::RenderError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for building and drawing the dashboard charts.
#[derive(Debug)]
pub enum VisError {
    /// A [BuildError] encountered while turning chart data into a descriptor.
    Build(BuildError),

    /// A [RenderError] encountered while drawing a descriptor or writing the document.
    Render(RenderError),

    /// A second handler was registered on a one-shot readiness signal.
    HandlerAlreadyRegistered,
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Build(error) => Some(error),
            VisError::Render(error) => Some(error),
            VisError::HandlerAlreadyRegistered => None,
        }
    }
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Build(error) => write!(f, "{vis_error} {error}"),
            VisError::Render(error) => write!(f, "{vis_error} {error}"),
            VisError::HandlerAlreadyRegistered => {
                write!(f, "{vis_error} the readiness handler is already registered")
            }
        }
    }
}

impl From<BuildError> for VisError {
    fn from(error: BuildError) -> Self {
        VisError::Build(error)
    }
}

impl From<RenderError> for VisError {
    fn from(error: RenderError) -> Self {
        VisError::Render(error)
    }
}
