//! Constraint validation for regions and emitted polygons

use crate::boundary::Edge;
use crate::holes::hole_free;
use crate::region::{is_connected, Region};

/// The region's 4-neighbor graph is connected.
pub fn validate_connectivity(region: &Region) -> bool {
    is_connected(region.cells(), region.split())
}

/// The region encloses no cavity.
pub fn validate_hole_free(region: &Region) -> bool {
    hole_free(region.split(), region.len(), |c| region.contains(c))
}

/// Every edge is axis-aligned and consecutive edges alternate between
/// horizontal and vertical, wrapping around the loop.
pub fn validate_rectilinear(edges: &[Edge]) -> bool {
    if edges.is_empty() {
        return false;
    }
    let horizontal = |e: &Edge| e.y1 == e.y2 && e.x1 != e.x2;
    let vertical = |e: &Edge| e.x1 == e.x2 && e.y1 != e.y2;
    if !edges.iter().all(|e| horizontal(e) || vertical(e)) {
        return false;
    }
    (0..edges.len()).all(|i| horizontal(&edges[i]) != horizontal(&edges[(i + 1) % edges.len()]))
}

/// Clockwise orientation: the shoelace signed area is negative with the
/// y-axis pointing up.
pub fn validate_clockwise(edges: &[Edge]) -> bool {
    signed_area(edges) < 0.0
}

/// Shoelace signed area of the closed edge loop.
pub fn signed_area(edges: &[Edge]) -> f64 {
    edges
        .iter()
        .map(|e| e.x1 * e.y2 - e.x2 * e.y1)
        .sum::<f64>()
        / 2.0
}
