//! Defines the errors reported while drawing and writing the host document.

use std::error::Error;
use std::fmt::Display;
use std::io;

use tinytemplate::error::Error as TinyTemplateError;

use crate::id::MountId;

/// The error type for drawing charts and writing the host document.
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// The host document has no container with this id.
    MountNotFound(MountId),
    /// A [std::io::Error] encountered while writing the output.
    Io(io::Error),
    /// A [serde_json::Error] encountered while encoding a figure.
    JsonSerialization(serde_json::Error),
    /// A [tinytemplate::error::Error] encountered while rendering the document.
    Template(TinyTemplateError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::MountNotFound(id) => {
                write!(f, "{render_error} no container \"{id}\" in the host document")
            }
            RenderError::Io(inner) => write!(f, "{render_error} I/O error: {inner}"),
            RenderError::JsonSerialization(inner) => {
                write!(f, "{render_error} figure encoding error: {inner}")
            }
            RenderError::Template(inner) => write!(f, "{render_error} template error: {inner}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::MountNotFound(_) => None,
            RenderError::Io(inner) => Some(inner),
            RenderError::JsonSerialization(inner) => Some(inner),
            RenderError::Template(inner) => Some(inner),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        RenderError::Io(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::JsonSerialization(error)
    }
}

impl From<TinyTemplateError> for RenderError {
    fn from(error: TinyTemplateError) -> Self {
        RenderError::Template(error)
    }
}
