use serde::Deserialize;
use serde_json::Value;

/// Top-level GeoJSON object
///
/// Parsed leniently: only the members needed to reach polygon coordinates are
/// modelled, everything else (properties, bbox, crs, ids) is ignored.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// `type`, `coordinates` and `geometries` of the top-level object, used
    /// when the document is a bare geometry
    #[serde(flatten)]
    pub body: Geometry,
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    /// `null` and absent both mean "no geometry"
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// A geometry object. Coordinates stay as raw JSON until the traversal knows
/// the geometry type, so unsupported types are never decoded.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub geometries: Option<Vec<Geometry>>,
}

/// Geometry classification relevant to the hole report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
    GeometryCollection,
    /// Points, lines, unknown or missing type tags
    Other,
}

impl GeometryKind {
    pub fn from_type_tag(tag: Option<&str>) -> GeometryKind {
        match tag {
            Some("Polygon") => GeometryKind::Polygon,
            Some("MultiPolygon") => GeometryKind::MultiPolygon,
            Some("GeometryCollection") => GeometryKind::GeometryCollection,
            _ => GeometryKind::Other,
        }
    }
}

const GEOMETRY_TYPES: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        GeometryKind::from_type_tag(self.type_.as_deref())
    }
}

impl Document {
    /// Geometries to traverse, in document order
    ///
    /// - `FeatureCollection`: the geometry of each feature that has one
    /// - a bare geometry object: the document itself
    /// - anything else is treated as a single feature
    pub fn root_geometries(&self) -> Vec<&Geometry> {
        match self.body.type_.as_deref() {
            Some("FeatureCollection") => self
                .features
                .iter()
                .flatten()
                .filter_map(|feature| feature.geometry.as_ref())
                .collect(),
            Some(tag) if GEOMETRY_TYPES.contains(&tag) => vec![&self.body],
            _ => self.geometry.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_kind_from_tag() {
        assert_eq!(
            GeometryKind::from_type_tag(Some("Polygon")),
            GeometryKind::Polygon
        );
        assert_eq!(
            GeometryKind::from_type_tag(Some("MultiPolygon")),
            GeometryKind::MultiPolygon
        );
        assert_eq!(
            GeometryKind::from_type_tag(Some("LineString")),
            GeometryKind::Other
        );
        // Type tags are case-sensitive
        assert_eq!(
            GeometryKind::from_type_tag(Some("polygon")),
            GeometryKind::Other
        );
        assert_eq!(GeometryKind::from_type_tag(None), GeometryKind::Other);
    }

    #[test]
    fn test_feature_collection_roots() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "a"}, "geometry": {"type": "Point", "coordinates": [1, 2]}},
                {"type": "Feature", "properties": null, "geometry": null},
                {"type": "Feature"},
                {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": []}}
            ]
        }"#;

        let document: Document = serde_json::from_str(json).unwrap();
        let roots = document.root_geometries();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].type_.as_deref(), Some("Point"));
        assert_eq!(roots[1].kind(), GeometryKind::Polygon);
    }

    #[test]
    fn test_single_feature_root() {
        let json = r#"{"type": "Feature", "geometry": {"type": "MultiPolygon", "coordinates": []}}"#;

        let document: Document = serde_json::from_str(json).unwrap();
        let roots = document.root_geometries();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].kind(), GeometryKind::MultiPolygon);
    }

    #[test]
    fn test_bare_geometry_root() {
        let json = r#"{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1]]]}"#;

        let document: Document = serde_json::from_str(json).unwrap();
        let roots = document.root_geometries();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].coordinates.is_some());
    }

    #[test]
    fn test_collection_without_features() {
        let document: Document = serde_json::from_str(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(document.root_geometries().is_empty());
    }
}
