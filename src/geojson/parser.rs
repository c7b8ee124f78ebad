use geo::{Coord, LineString};
use serde::Deserialize;
use serde_json::Value;

use super::document::{Document, Geometry, GeometryKind};
use super::error::DocumentError;
use crate::domain::FeatureRow;
use crate::geometry::{Ring, polygon_metrics};

type Position = Vec<f64>;
type PolygonCoordinates = Vec<Vec<Position>>;
type MultiPolygonCoordinates = Vec<PolygonCoordinates>;

/// Parse raw GeoJSON bytes into a document
///
/// Bytes that are not UTF-8 are a JSON syntax error, not an I/O error.
pub fn parse_document(input: impl AsRef<[u8]>) -> Result<Document, DocumentError> {
    Ok(serde_json::from_slice(input.as_ref())?)
}

/// Collect the ring list of every polygon in the document, in document order
///
/// # Algorithm
/// 1. Take the root geometries (feature geometries, or the bare geometry)
/// 2. For each geometry:
///    - `Polygon`: one ring list
///    - `MultiPolygon`: one ring list per member polygon
///    - `GeometryCollection`: recurse into its members
///    - anything else: skipped, coordinates are never decoded
pub fn polygon_ring_lists(document: &Document) -> Result<Vec<Vec<Ring>>, DocumentError> {
    let mut polygons = Vec::new();

    for geometry in document.root_geometries() {
        collect_polygons(geometry, &mut polygons)?;
    }

    Ok(polygons)
}

/// Compute one report row per polygon in the document
///
/// Rows are numbered from 1 in document order. Each member of a MultiPolygon
/// takes its own index; skipped geometries take none.
pub fn feature_rows(file: &str, document: &Document) -> Result<Vec<FeatureRow>, DocumentError> {
    let rows = polygon_ring_lists(document)?
        .iter()
        .enumerate()
        .map(|(i, rings)| FeatureRow::new(file, i + 1, polygon_metrics(rings)))
        .collect();

    Ok(rows)
}

fn collect_polygons(geometry: &Geometry, out: &mut Vec<Vec<Ring>>) -> Result<(), DocumentError> {
    match geometry.kind() {
        GeometryKind::Polygon => {
            let coordinates: PolygonCoordinates =
                decode_coordinates(geometry.coordinates.as_ref(), "Polygon")?;
            out.push(to_rings(coordinates)?);
        }
        GeometryKind::MultiPolygon => {
            let coordinates: MultiPolygonCoordinates =
                decode_coordinates(geometry.coordinates.as_ref(), "MultiPolygon")?;
            for polygon in coordinates {
                out.push(to_rings(polygon)?);
            }
        }
        GeometryKind::GeometryCollection => {
            for member in geometry.geometries.iter().flatten() {
                collect_polygons(member, out)?;
            }
        }
        GeometryKind::Other => {
            log::trace!(
                "skipping geometry of type {}",
                geometry.type_.as_deref().unwrap_or("<none>")
            );
        }
    }

    Ok(())
}

/// Missing or `null` coordinates decode as an empty list
fn decode_coordinates<T>(value: Option<&Value>, geometry: &'static str) -> Result<T, DocumentError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(value) => T::deserialize(value)
            .map_err(|source| DocumentError::Coordinates { geometry, source }),
    }
}

fn to_rings(polygon: PolygonCoordinates) -> Result<Vec<Ring>, DocumentError> {
    polygon
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(to_vertex)
                .collect::<Result<Vec<_>, _>>()
                .map(LineString::new)
        })
        .collect()
}

/// First two ordinates are x and y; altitude and beyond are ignored
fn to_vertex(position: Position) -> Result<Coord<f64>, DocumentError> {
    match position[..] {
        [x, y, ..] => Ok(Coord { x, y }),
        _ => Err(DocumentError::ShortPosition {
            found: position.len(),
        }),
    }
}
