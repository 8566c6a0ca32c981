//! Node-link layout of the airport delay cascade.
//!
//! Nodes arrive with normalized positions already chosen; the layout sizes
//! and colors them and derives one edge per propagation pair. Output order
//! always equals input order, so the z-order of overlapping markers is
//! reproducible.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::chart::Series;
use crate::chart::trace::EdgeTrace;
use crate::chart::trace::LineStyle;
use crate::chart::trace::MarkerStyle;
use crate::chart::trace::NodeTrace;
use crate::chart::trace::PerPoint;
use crate::chart::trace::TextPosition;
use crate::style::Color;
use crate::style::palette;

/// Marker diameter per unit of node weight.
pub const SIZE_SCALE: f64 = 2.0;

/// The identifier of an airport, e.g. `ATL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id.
    pub fn new(id: impl Into<String>) -> NodeId {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A position in normalized `[0, 1] x [0, 1]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Point {
        Self { x, y }
    }

    fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// An airport in the cascade network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The airport code.
    pub id: NodeId,
    /// The human readable name, e.g. `Atlanta`.
    pub label: String,
    /// Where the node is drawn.
    pub position: Point,
    /// Relative importance; scales the marker. Must be positive.
    pub weight: f64,
    /// Whether delays originate at this airport.
    pub is_source: bool,
}

/// A delay propagating from the first airport to the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Propagation(pub NodeId, pub NodeId);

/// A straight segment between two node positions.
///
/// The positions are copied when the edge is derived; moving a node later
/// does not move its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The position of the originating node.
    pub from: Point,
    /// The position of the affected node.
    pub to: Point,
}

/// Visual encoding of the cascade network.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeLayout {
    /// Marker diameter per unit of weight.
    pub size_scale: f64,
    /// Color of airports where delays originate.
    pub source_color: Color,
    /// Color of airports reached by a cascade.
    pub affected_color: Color,
    /// Node marker border.
    pub outline: LineStyle,
    /// Edge stroke.
    pub edge_line: LineStyle,
    /// Edge opacity.
    pub edge_opacity: f64,
}

impl Default for CascadeLayout {
    fn default() -> Self {
        Self {
            size_scale: SIZE_SCALE,
            source_color: palette::RED,
            affected_color: palette::BLUE,
            outline: LineStyle::solid(palette::BLACK, 1.0),
            edge_line: LineStyle::solid(palette::PURE_RED, 1.0),
            edge_opacity: 0.7,
        }
    }
}

impl CascadeLayout {
    /// The legend name of the node trace.
    pub const NODES_NAME: &'static str = "Airports";

    /// The legend name of the edge trace.
    pub const EDGES_NAME: &'static str = "Delay Cascades";

    /// Turns the nodes and the propagation relation into renderable traces.
    pub fn layout(
        &self,
        nodes: &[Node],
        propagation: &[Propagation],
    ) -> Result<(NodeTrace, EdgeTrace), CascadeError> {
        let positions = index(nodes)?;

        let mut xs = Vec::with_capacity(nodes.len());
        let mut ys = Vec::with_capacity(nodes.len());
        let mut text = Vec::with_capacity(nodes.len());
        let mut colors = Vec::with_capacity(nodes.len());
        let mut sizes = Vec::with_capacity(nodes.len());

        for node in nodes {
            xs.push(node.position.x);
            ys.push(node.position.y);
            text.push(format!("{} - {}", node.id, node.label));
            colors.push(self.color(node));
            sizes.push(node.weight * self.size_scale);
        }

        let edges = propagation
            .iter()
            .map(|Propagation(from, to)| -> Result<Edge, CascadeError> {
                Ok(Edge {
                    from: lookup(&positions, from)?,
                    to: lookup(&positions, to)?,
                })
            })
            .collect::<Result<Vec<Edge>, _>>()?;

        let nodes = NodeTrace {
            name: String::from(Self::NODES_NAME),
            series: Series::new(xs, ys),
            text,
            text_position: TextPosition::Bottom,
            marker: MarkerStyle {
                color: PerPoint::Each(colors),
                size: Some(PerPoint::Each(sizes)),
                opacity: None,
                outline: Some(self.outline.clone()),
            },
        };

        let edges = EdgeTrace {
            name: String::from(Self::EDGES_NAME),
            edges,
            line: self.edge_line.clone(),
            opacity: self.edge_opacity,
        };

        Ok((nodes, edges))
    }

    fn color(&self, node: &Node) -> Color {
        if node.is_source {
            self.source_color.clone()
        } else {
            self.affected_color.clone()
        }
    }
}

fn index(nodes: &[Node]) -> Result<HashMap<&str, Point>, CascadeError> {
    let mut positions = HashMap::with_capacity(nodes.len());

    for node in nodes {
        if !(node.weight.is_finite() && node.weight > 0.0) {
            return Err(CascadeError::NonPositiveWeight {
                id: node.id.clone(),
                weight: node.weight,
            });
        }

        if !node.position.is_normalized() {
            return Err(CascadeError::PositionOutOfBounds {
                id: node.id.clone(),
                position: node.position,
            });
        }

        match positions.entry(node.id.as_str()) {
            Entry::Occupied(_) => return Err(CascadeError::DuplicateNode(node.id.clone())),
            Entry::Vacant(entry) => {
                entry.insert(node.position);
            }
        }
    }

    Ok(positions)
}

fn lookup(positions: &HashMap<&str, Point>, id: &NodeId) -> Result<Point, CascadeError> {
    positions
        .get(id.as_str())
        .copied()
        .ok_or_else(|| CascadeError::UnknownNode(id.clone()))
}

/// The error type for laying out the cascade network.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeError {
    /// Two nodes share the same id.
    DuplicateNode(NodeId),

    /// A propagation pair names a node that is not in the node list.
    UnknownNode(NodeId),

    /// A node weight is zero, negative or not finite.
    #[allow(missing_docs)]
    NonPositiveWeight { id: NodeId, weight: f64 },

    /// A node lies outside the unit square.
    #[allow(missing_docs)]
    PositionOutOfBounds { id: NodeId, position: Point },
}

impl Display for CascadeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cascade_error = "cascade layout error:";

        match self {
            CascadeError::DuplicateNode(id) => {
                write!(f, "{cascade_error} node \"{id}\" is listed more than once")
            }
            CascadeError::UnknownNode(id) => {
                write!(f, "{cascade_error} propagation refers to unknown node \"{id}\"")
            }
            CascadeError::NonPositiveWeight { id, weight } => {
                write!(f, "{cascade_error} node \"{id}\" has non-positive weight {weight}")
            }
            CascadeError::PositionOutOfBounds { id, position } => write!(
                f,
                "{cascade_error} node \"{id}\" at ({}, {}) lies outside the unit square",
                position.x, position.y
            ),
        }
    }
}

impl Error for CascadeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, label: &str, x: f64, y: f64, weight: f64, is_source: bool) -> Node {
        Node {
            id: NodeId::new(id),
            label: String::from(label),
            position: Point::new(x, y),
            weight,
            is_source,
        }
    }

    fn pair(from: &str, to: &str) -> Propagation {
        Propagation(NodeId::new(from), NodeId::new(to))
    }

    #[test]
    fn source_and_affected_nodes_get_distinct_colors() -> Result<(), CascadeError> {
        let nodes = vec![
            node("ATL", "Atlanta", 0.2, 0.5, 20.0, true),
            node("ORD", "Chicago", 0.3, 0.3, 18.0, false),
        ];

        let (node_trace, edge_trace) =
            CascadeLayout::default().layout(&nodes, &[pair("ATL", "ORD")])?;

        assert_eq!(node_trace.series.len(), 2);
        assert_eq!(edge_trace.edges.len(), 1);
        assert_eq!(
            node_trace.marker.color,
            PerPoint::Each(vec![palette::RED, palette::BLUE])
        );
        assert_eq!(
            edge_trace.edges[0],
            Edge {
                from: Point::new(0.2, 0.5),
                to: Point::new(0.3, 0.3)
            }
        );

        Ok(())
    }

    #[test]
    fn marker_size_scales_weight() -> Result<(), CascadeError> {
        let nodes = vec![node("LAX", "Los Angeles", 0.1, 0.7, 16.0, false)];

        let (node_trace, _) = CascadeLayout::default().layout(&nodes, &[])?;

        assert_eq!(node_trace.marker.size, Some(PerPoint::Each(vec![32.0])));
        assert_eq!(node_trace.text, vec![String::from("LAX - Los Angeles")]);

        Ok(())
    }

    #[test]
    fn preserves_cardinality_and_order() -> Result<(), CascadeError> {
        let nodes = vec![
            node("MIA", "Miami", 0.8, 0.5, 9.0, false),
            node("ATL", "Atlanta", 0.2, 0.5, 20.0, true),
            node("JFK", "New York", 0.7, 0.3, 13.0, false),
        ];
        let propagation = vec![pair("ATL", "MIA"), pair("ATL", "JFK"), pair("JFK", "MIA")];

        let (node_trace, edge_trace) = CascadeLayout::default().layout(&nodes, &propagation)?;

        assert_eq!(node_trace.series.len(), nodes.len());
        assert_eq!(edge_trace.edges.len(), propagation.len());
        assert_eq!(
            node_trace.text,
            vec!["MIA - Miami", "ATL - Atlanta", "JFK - New York"]
        );
        assert_eq!(edge_trace.edges[2].from, Point::new(0.7, 0.3));
        assert_eq!(edge_trace.edges[2].to, Point::new(0.8, 0.5));

        Ok(())
    }

    #[test]
    fn edges_keep_positions_from_layout_time() -> Result<(), CascadeError> {
        let mut nodes = vec![
            node("ATL", "Atlanta", 0.2, 0.5, 20.0, true),
            node("ORD", "Chicago", 0.3, 0.3, 18.0, false),
        ];

        let (_, edge_trace) = CascadeLayout::default().layout(&nodes, &[pair("ATL", "ORD")])?;
        nodes[0].position = Point::new(0.9, 0.9);

        assert_eq!(edge_trace.edges[0].from, Point::new(0.2, 0.5));

        Ok(())
    }

    #[test]
    fn rejects_unknown_propagation_endpoint() {
        let nodes = vec![node("ATL", "Atlanta", 0.2, 0.5, 20.0, true)];

        let result = CascadeLayout::default().layout(&nodes, &[pair("ATL", "SEA")]);

        assert_eq!(result, Err(CascadeError::UnknownNode(NodeId::new("SEA"))));
    }

    #[test]
    fn rejects_invalid_nodes() {
        let layout = CascadeLayout::default();

        let zero_weight = [node("ATL", "Atlanta", 0.2, 0.5, 0.0, true)];
        assert!(matches!(
            layout.layout(&zero_weight, &[]),
            Err(CascadeError::NonPositiveWeight { .. })
        ));

        let outside = [node("ATL", "Atlanta", 1.2, 0.5, 1.0, true)];
        assert!(matches!(
            layout.layout(&outside, &[]),
            Err(CascadeError::PositionOutOfBounds { .. })
        ));

        let duplicate = [
            node("ATL", "Atlanta", 0.2, 0.5, 1.0, true),
            node("ATL", "Atlanta again", 0.4, 0.5, 1.0, false),
        ];
        assert_eq!(
            layout.layout(&duplicate, &[]),
            Err(CascadeError::DuplicateNode(NodeId::new("ATL")))
        );
    }
}
