//! The drawing contract between chart descriptors and the host document.

pub mod document;
pub mod error;
pub mod output;
pub mod plotly;

use serde::Serialize;

use crate::chart::PlotDescriptor;
use crate::id::DrawId;
use crate::id::MountId;
use crate::render::error::RenderError;

/// A sink for rendered text.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

/// Something that can be written out as text.
pub trait Render {
    /// Writes `self` to `output`.
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream;
}

/// Draws chart descriptors into named containers of a host document.
pub trait RenderAdapter {
    /// Draws `descriptor` into the container named `mount_id`.
    ///
    /// Drawing into the same container again fully replaces the previous
    /// chart. Fails with [RenderError::MountNotFound] when the container does
    /// not exist at call time.
    fn draw(
        &mut self,
        mount_id: &MountId,
        descriptor: PlotDescriptor,
        options: DrawOptions,
    ) -> Result<RenderHandle, RenderError>;
}

/// Options forwarded to the rendering library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawOptions {
    /// Whether the chart resizes with its container.
    pub responsive: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { responsive: true }
    }
}

/// Identifies a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderHandle {
    mount_id: MountId,
    draw_id: DrawId,
}

impl RenderHandle {
    pub(crate) fn new(mount_id: MountId) -> RenderHandle {
        Self {
            mount_id,
            draw_id: DrawId::next(),
        }
    }

    /// The container the chart was drawn into.
    pub fn mount_id(&self) -> &MountId {
        &self.mount_id
    }

    /// The identity of the draw call.
    pub fn draw_id(&self) -> DrawId {
        self.draw_id
    }
}
