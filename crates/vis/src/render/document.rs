//! A self-contained HTML host document drawing its charts with Plotly.js.

use chrono::DateTime;
use chrono::Utc;
use log::debug;
use log::warn;
use serde::Serialize;

use crate::chart::PlotDescriptor;
use crate::id::MountId;
use crate::render::DrawOptions;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::RenderAdapter;
use crate::render::RenderHandle;
use crate::render::error::RenderError;
use crate::render::plotly::EncodedFigure;
use crate::render::plotly::Figure;
use crate::render::plotly::to_script_json;
use crate::template::TemplateEngine;

/// An HTML page with one container per declared mount point.
///
/// Drawing stores the encoded figure of a container; rendering the page emits
/// every container in declaration order and a single `DOMContentLoaded`
/// handler that draws each stored figure in isolation from the others.
#[derive(Debug)]
pub struct HtmlDocument {
    title: String,
    generated_at: DateTime<Utc>,
    containers: Vec<Container>,
}

#[derive(Debug)]
struct Container {
    id: MountId,
    figure: Option<EncodedFigure>,
}

impl HtmlDocument {
    /// Creates a document without containers, stamped with the current time.
    pub fn new(title: impl Into<String>) -> HtmlDocument {
        Self::with_timestamp(title, Utc::now())
    }

    /// Creates a document without containers, stamped with `generated_at`.
    pub fn with_timestamp(title: impl Into<String>, generated_at: DateTime<Utc>) -> HtmlDocument {
        Self {
            title: title.into(),
            generated_at,
            containers: Vec::new(),
        }
    }

    /// Declares a container. Declaring the same id twice has no effect.
    pub fn add_container(&mut self, id: MountId) {
        if self.container(&id).is_none() {
            self.containers.push(Container { id, figure: None });
        }
    }

    /// Declares a container, builder style.
    pub fn with_container(mut self, id: MountId) -> HtmlDocument {
        self.add_container(id);
        self
    }

    /// The declared containers in page order.
    pub fn containers(&self) -> impl Iterator<Item = &MountId> {
        self.containers.iter().map(|container| &container.id)
    }

    /// The figure currently drawn into `id`, if any.
    pub fn figure(&self, id: &MountId) -> Option<&EncodedFigure> {
        self.container(id).and_then(|container| container.figure.as_ref())
    }

    fn container(&self, id: &MountId) -> Option<&Container> {
        self.containers.iter().find(|container| &container.id == id)
    }
}

impl RenderAdapter for HtmlDocument {
    fn draw(
        &mut self,
        mount_id: &MountId,
        descriptor: PlotDescriptor,
        options: DrawOptions,
    ) -> Result<RenderHandle, RenderError> {
        let Some(container) = self
            .containers
            .iter_mut()
            .find(|container| &container.id == mount_id)
        else {
            return Err(RenderError::MountNotFound(mount_id.clone()));
        };

        if descriptor.id() != mount_id {
            warn!(
                "drawing the descriptor for \"{}\" into \"{mount_id}\"",
                descriptor.id()
            );
        }

        let figure = Figure::new(&descriptor, options).encode()?;
        let replaced = container.figure.replace(figure).is_some();

        debug!(
            "drew {} trace(s) into \"{mount_id}\"{}",
            descriptor.traces().len(),
            if replaced { ", replacing the previous chart" } else { "" }
        );

        Ok(RenderHandle::new(mount_id.clone()))
    }
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    title: &'a str,
    generated_at: String,
    containers: Vec<ContainerContext<'a>>,
}

#[derive(Serialize)]
struct ContainerContext<'a> {
    id: &'a str,
    script_id: String,
    figure: Option<&'a EncodedFigure>,
}

impl Render for HtmlDocument {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let context = DocumentContext {
            title: &self.title,
            generated_at: self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            containers: self
                .containers
                .iter()
                .map(|container| {
                    Ok(ContainerContext {
                        id: container.id.as_str(),
                        script_id: to_script_json(&container.id)?,
                        figure: container.figure.as_ref(),
                    })
                })
                .collect::<Result<_, serde_json::Error>>()?,
        };

        let template = TemplateEngine::new()?;
        let text = template.render_index(&context)?;

        output.write(&text)
    }
}
