use super::ring::{Ring, RingExt};

/// Area figures for one polygon: its exterior minus its holes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolygonMetrics {
    /// Exterior area minus hole area. Can be zero or negative for malformed input.
    pub polygon_area: f64,
    /// Sum of all hole ring areas
    pub hole_area: f64,
    /// `hole_area / polygon_area * 100`, or 0.0 when `polygon_area` is not positive and finite
    pub hole_percent: f64,
}

/// Compute polygon metrics from a ring list
///
/// `rings[0]` is the exterior boundary, every later ring is a hole. Holes are
/// trusted to lie inside the exterior without overlapping each other, so the
/// polygon area is a plain subtraction.
///
/// An empty ring list yields all zeros. When the holes are as large as the
/// exterior or larger, or the area is not finite, the hole percentage is
/// forced to 0.0 instead of dividing by it.
pub fn polygon_metrics(rings: &[Ring]) -> PolygonMetrics {
    let Some((outer, holes)) = rings.split_first() else {
        return PolygonMetrics::default();
    };

    let outer_area = outer.shoelace_area();
    // fold from +0.0: an empty f64 sum is -0.0
    let hole_area = holes
        .iter()
        .map(RingExt::shoelace_area)
        .fold(0.0, |acc, area| acc + area);
    let polygon_area = outer_area - hole_area;

    // Overflowing coordinates can leave the area infinite or NaN
    let hole_percent = if polygon_area <= 0.0 || !polygon_area.is_finite() {
        0.0
    } else {
        hole_area / polygon_area * 100.0
    };

    PolygonMetrics {
        polygon_area,
        hole_area,
        hole_percent,
    }
}
