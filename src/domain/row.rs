use serde::Serialize;

use crate::geometry::PolygonMetrics;

/// Column names of the report, in output order
pub const COLUMNS: [&str; 5] = [
    "file",
    "feature_index",
    "polygon_area",
    "hole_area",
    "hole_percent",
];

/// One report row: the metrics of a single polygon within a source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    /// File name (not the full path) of the source document
    pub file: String,
    /// 1-based position of this polygon among all polygons of the file
    pub feature_index: usize,
    pub polygon_area: f64,
    pub hole_area: f64,
    pub hole_percent: f64,
}

impl FeatureRow {
    pub fn new(file: impl Into<String>, feature_index: usize, metrics: PolygonMetrics) -> Self {
        Self {
            file: file.into(),
            feature_index,
            polygon_area: metrics.polygon_area,
            hole_area: metrics.hole_area,
            hole_percent: metrics.hole_percent,
        }
    }
}
