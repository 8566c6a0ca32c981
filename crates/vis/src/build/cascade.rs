use crate::build::error::BuildError;
use crate::cascade::CascadeLayout;
use crate::cascade::Node;
use crate::cascade::Propagation;
use crate::chart::Annotation;
use crate::chart::Layout;
use crate::chart::PlotDescriptor;
use crate::chart::axes::AxisSpec;
use crate::chart::trace::Trace;
use crate::id::MountId;
use crate::style::Margins;
use crate::style::palette;

const LEGEND_TEXT: &str =
    "Red nodes: Airports with initial delays<br>Blue nodes: Affected airports";

/// The airport delay cascade network: a node trace followed by an edge trace,
/// on hidden axes with an annotation explaining the node colors.
pub fn build_cascade(nodes: &[Node], propagation: &[Propagation]) -> Result<PlotDescriptor, BuildError> {
    let (nodes, edges) = CascadeLayout::default().layout(nodes, propagation)?;

    let mut layout = Layout::new(
        "Airport Delay Cascade Network",
        AxisSpec::hidden(),
        AxisSpec::hidden(),
    );
    layout.show_legend = Some(false);
    layout.margins = Margins::COMPACT;
    layout.annotations.push(Annotation {
        x: 0.05,
        y: 0.95,
        text: String::from(LEGEND_TEXT),
        background: palette::ANNOTATION_BACKGROUND,
        border_color: palette::BORDER,
        border_width: 1.0,
        border_pad: 5.0,
    });

    PlotDescriptor::new(
        MountId::CASCADE,
        vec![Trace::NetworkNodes(nodes), Trace::NetworkEdges(edges)],
        layout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::error::SeriesDefect;
    use crate::cascade::CascadeError;
    use crate::cascade::NodeId;
    use crate::cascade::Point;

    fn airport(id: &str, weight: f64, is_source: bool) -> Node {
        Node {
            id: NodeId::new(id),
            label: String::from(id),
            position: Point::new(0.5, 0.5),
            weight,
            is_source,
        }
    }

    #[test]
    fn emits_nodes_then_edges_with_hidden_axes() -> Result<(), BuildError> {
        let nodes = [airport("ATL", 20.0, true), airport("ORD", 18.0, false)];
        let propagation = [Propagation(NodeId::new("ATL"), NodeId::new("ORD"))];

        let descriptor = build_cascade(&nodes, &propagation)?;

        let [Trace::NetworkNodes(node_trace), Trace::NetworkEdges(edge_trace)] =
            descriptor.traces()
        else {
            panic!("expected node and edge traces");
        };
        assert_eq!(node_trace.series.len(), 2);
        assert_eq!(edge_trace.edges.len(), 1);

        let layout = descriptor.layout();
        assert_eq!(layout.x_axis, AxisSpec::hidden());
        assert_eq!(layout.y_axis, AxisSpec::hidden());
        assert_eq!(layout.show_legend, Some(false));
        assert_eq!(layout.annotations.len(), 1);

        Ok(())
    }

    #[test]
    fn layout_errors_surface_as_cascade_errors() {
        let nodes = [airport("ATL", -1.0, true)];

        let result = build_cascade(&nodes, &[]);

        assert!(matches!(
            result,
            Err(BuildError::Cascade(CascadeError::NonPositiveWeight { .. }))
        ));
    }

    #[test]
    fn no_nodes_is_malformed() {
        let result = build_cascade(&[], &[]);

        assert_eq!(
            result,
            Err(BuildError::malformed(
                CascadeLayout::NODES_NAME,
                SeriesDefect::Empty
            ))
        );
    }
}
