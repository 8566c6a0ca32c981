//! The flight delay dashboard's visualization library.
//!
//! Typed chart data goes through one pure builder per chart family and comes
//! out as a [PlotDescriptor](chart::PlotDescriptor): render-ready data with
//! every styling decision made. A [RenderAdapter](render::RenderAdapter)
//! draws descriptors into named containers of a host document; the bundled
//! [HtmlDocument](render::document::HtmlDocument) emits a Plotly.js page.
//!
//! ```text
//! Dataset -> build::* -> PlotDescriptor -> RenderAdapter::draw(mount, descriptor, options)
//! ```

#![warn(missing_docs)]

pub(crate) mod template;

pub mod build;
pub mod cascade;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod id;
pub mod ready;
pub mod render;
pub mod style;
