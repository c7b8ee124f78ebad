//! holereport - Report hole areas of polygons in folders of GeoJSON files

pub mod config;
pub mod domain;
pub mod geojson;
pub mod geometry;
pub mod report;
pub mod scan;
