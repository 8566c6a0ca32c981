//! Translation of chart descriptors into Plotly.js figures.
//!
//! The translation is purely structural: every styling decision is already
//! made in the descriptor.

use serde::Serialize;

use crate::cascade::Edge;
use crate::chart::Annotation;
use crate::chart::Datum;
use crate::chart::HoverMode;
use crate::chart::Layout;
use crate::chart::Legend;
use crate::chart::PlotDescriptor;
use crate::chart::Series;
use crate::chart::axes::AxisSpec;
use crate::chart::axes::RangeMode;
use crate::chart::trace::Dash;
use crate::chart::trace::LineStyle;
use crate::chart::trace::MarkerStyle;
use crate::chart::trace::PerPoint;
use crate::chart::trace::TextPosition;
use crate::chart::trace::Trace;
use crate::render::DrawOptions;
use crate::render::error::RenderError;
use crate::style::Color;
use crate::style::Margins;

/// The three arguments of `Plotly.newPlot`, borrowing from a descriptor.
#[derive(Serialize, Debug)]
pub struct Figure<'a> {
    data: Vec<PlotlyTrace<'a>>,
    layout: PlotlyLayout<'a>,
    config: DrawOptions,
}

impl<'a> Figure<'a> {
    /// Maps a descriptor onto Plotly's trace and layout attributes.
    pub fn new(descriptor: &'a PlotDescriptor, options: DrawOptions) -> Figure<'a> {
        Self {
            data: descriptor.traces().iter().map(PlotlyTrace::from).collect(),
            layout: PlotlyLayout::from(descriptor.layout()),
            config: options,
        }
    }

    /// Encodes the figure as JSON safe to embed in a `<script>` element.
    pub fn encode(&self) -> Result<EncodedFigure, RenderError> {
        Ok(EncodedFigure {
            data: to_script_json(&self.data)?,
            layout: to_script_json(&self.layout)?,
            config: to_script_json(&self.config)?,
        })
    }
}

/// JSON text of each `Plotly.newPlot` argument.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedFigure {
    /// The trace array.
    pub data: String,
    /// The layout object.
    pub layout: String,
    /// The config object.
    pub config: String,
}

// `<` may only appear inside JSON strings, where `\u003c` decodes to the same
// text and the HTML tokenizer never sees `</script` or `<!--`.
pub(crate) fn to_script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Xs<'a> {
    Data(&'a [Datum]),
    Segments(Vec<Option<f64>>),
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Ys<'a> {
    Data(&'a [f64]),
    Segments(Vec<Option<f64>>),
}

#[derive(Serialize, Debug)]
struct PlotlyTrace<'a> {
    #[serde(rename = "type")]
    kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
    name: &'a str,
    x: Xs<'a>,
    y: Ys<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a [String]>,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    text_position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<PlotlyMarker<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<PlotlyLine<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
}

impl<'a> PlotlyTrace<'a> {
    fn series(kind: TraceKind, trace: &'a Trace, series: &'a Series) -> PlotlyTrace<'a> {
        Self {
            kind,
            mode: match kind {
                TraceKind::Scatter => Some(trace.mode().as_str()),
                TraceKind::Bar => None,
            },
            name: trace.name(),
            x: Xs::Data(series.x()),
            y: Ys::Data(series.y()),
            text: None,
            text_position: None,
            marker: None,
            line: None,
            opacity: None,
        }
    }
}

impl<'a> From<&'a Trace> for PlotlyTrace<'a> {
    fn from(trace: &'a Trace) -> Self {
        match trace {
            Trace::Line(line) => PlotlyTrace {
                marker: line.marker.as_ref().map(PlotlyMarker::from),
                line: Some(PlotlyLine::from(&line.line)),
                ..PlotlyTrace::series(TraceKind::Scatter, trace, &line.series)
            },
            Trace::Bar(bar) => PlotlyTrace {
                marker: Some(PlotlyMarker::from(&bar.marker)),
                ..PlotlyTrace::series(TraceKind::Bar, trace, &bar.series)
            },
            Trace::Scatter(scatter) => PlotlyTrace {
                marker: Some(PlotlyMarker::from(&scatter.marker)),
                ..PlotlyTrace::series(TraceKind::Scatter, trace, &scatter.series)
            },
            Trace::NetworkNodes(nodes) => PlotlyTrace {
                text: Some(nodes.text.as_slice()),
                text_position: Some(match nodes.text_position {
                    TextPosition::Top => "top center",
                    TextPosition::Bottom => "bottom center",
                }),
                marker: Some(PlotlyMarker::from(&nodes.marker)),
                ..PlotlyTrace::series(TraceKind::Scatter, trace, &nodes.series)
            },
            Trace::NetworkEdges(edges) => {
                let (xs, ys) = segments(&edges.edges);

                PlotlyTrace {
                    kind: TraceKind::Scatter,
                    mode: Some(trace.mode().as_str()),
                    name: trace.name(),
                    x: Xs::Segments(xs),
                    y: Ys::Segments(ys),
                    text: None,
                    text_position: None,
                    marker: None,
                    line: Some(PlotlyLine::from(&edges.line)),
                    opacity: Some(edges.opacity),
                }
            }
        }
    }
}

// Each edge becomes its own segment; a `null` coordinate breaks the line.
fn segments(edges: &[Edge]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let mut xs = Vec::with_capacity(edges.len() * 3);
    let mut ys = Vec::with_capacity(edges.len() * 3);

    for edge in edges {
        xs.extend([Some(edge.from.x), Some(edge.to.x), None]);
        ys.extend([Some(edge.from.y), Some(edge.to.y), None]);
    }

    (xs, ys)
}

#[derive(Serialize, Debug)]
struct PlotlyMarker<'a> {
    color: &'a PerPoint<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<&'a PerPoint<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<PlotlyLine<'a>>,
}

impl<'a> From<&'a MarkerStyle> for PlotlyMarker<'a> {
    fn from(marker: &'a MarkerStyle) -> Self {
        Self {
            color: &marker.color,
            size: marker.size.as_ref(),
            opacity: marker.opacity,
            line: marker.outline.as_ref().map(PlotlyLine::from),
        }
    }
}

#[derive(Serialize, Debug)]
struct PlotlyLine<'a> {
    color: &'a Color,
    width: f64,
    dash: Dash,
}

impl<'a> From<&'a LineStyle> for PlotlyLine<'a> {
    fn from(line: &'a LineStyle) -> Self {
        Self {
            color: &line.color,
            width: line.width,
            dash: line.dash,
        }
    }
}

#[derive(Serialize, Debug)]
struct Title<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct PlotlyLayout<'a> {
    title: Title<'a>,
    #[serde(rename = "xaxis")]
    x_axis: PlotlyAxis<'a>,
    #[serde(rename = "yaxis")]
    y_axis: PlotlyAxis<'a>,
    margin: Margins,
    #[serde(rename = "plot_bgcolor")]
    plot_background: &'a Color,
    #[serde(rename = "paper_bgcolor")]
    paper_background: &'a Color,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<PlotlyLegend<'a>>,
    #[serde(rename = "hovermode", skip_serializing_if = "Option::is_none")]
    hover_mode: Option<HoverMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<PlotlyAnnotation<'a>>,
}

impl<'a> From<&'a Layout> for PlotlyLayout<'a> {
    fn from(layout: &'a Layout) -> Self {
        Self {
            title: Title {
                text: &layout.title,
            },
            x_axis: PlotlyAxis::from(&layout.x_axis),
            y_axis: PlotlyAxis::from(&layout.y_axis),
            margin: layout.margins,
            plot_background: &layout.background,
            paper_background: &layout.background,
            show_legend: layout.show_legend,
            legend: layout.legend.as_ref().map(PlotlyLegend::from),
            hover_mode: layout.hover_mode,
            annotations: layout.annotations.iter().map(PlotlyAnnotation::from).collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum TickMode {
    Linear,
}

#[derive(Serialize, Debug)]
struct PlotlyAxis<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Title<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<[f64; 2]>,
    #[serde(rename = "rangemode")]
    range_mode: RangeMode,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    tick_mode: Option<TickMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tick0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dtick: Option<f64>,
    #[serde(rename = "showgrid")]
    show_grid: bool,
    #[serde(rename = "showticklabels")]
    show_tick_labels: bool,
    #[serde(rename = "zeroline")]
    zero_line: bool,
}

impl<'a> From<&'a AxisSpec> for PlotlyAxis<'a> {
    fn from(axis: &'a AxisSpec) -> Self {
        Self {
            title: axis.title.as_deref().map(|text| Title { text }),
            range: axis.range.map(|range| [range.min, range.max]),
            range_mode: axis.range_mode,
            tick_mode: axis.tick_policy.map(|_| TickMode::Linear),
            tick0: axis.tick_policy.map(|ticks| ticks.start),
            dtick: axis.tick_policy.map(|ticks| ticks.step),
            show_grid: axis.show_grid,
            show_tick_labels: axis.show_tick_labels,
            zero_line: axis.zero_line,
        }
    }
}

#[derive(Serialize, Debug)]
struct PlotlyLegend<'a> {
    x: f64,
    y: f64,
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    background: Option<&'a Color>,
}

impl<'a> From<&'a Legend> for PlotlyLegend<'a> {
    fn from(legend: &'a Legend) -> Self {
        Self {
            x: legend.x,
            y: legend.y,
            background: legend.background.as_ref(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Reference {
    Paper,
}

#[derive(Serialize, Debug)]
struct PlotlyAnnotation<'a> {
    x: f64,
    y: f64,
    #[serde(rename = "xref")]
    x_ref: Reference,
    #[serde(rename = "yref")]
    y_ref: Reference,
    text: &'a str,
    #[serde(rename = "showarrow")]
    show_arrow: bool,
    #[serde(rename = "bgcolor")]
    background: &'a Color,
    #[serde(rename = "bordercolor")]
    border_color: &'a Color,
    #[serde(rename = "borderwidth")]
    border_width: f64,
    #[serde(rename = "borderpad")]
    border_pad: f64,
}

impl<'a> From<&'a Annotation> for PlotlyAnnotation<'a> {
    fn from(annotation: &'a Annotation) -> Self {
        Self {
            x: annotation.x,
            y: annotation.y,
            x_ref: Reference::Paper,
            y_ref: Reference::Paper,
            text: &annotation.text,
            show_arrow: false,
            background: &annotation.background,
            border_color: &annotation.border_color,
            border_width: annotation.border_width,
            border_pad: annotation.border_pad,
        }
    }
}
