pub mod document;
pub mod error;
pub mod parser;

pub use document::{Document, Feature, Geometry};
pub use error::DocumentError;
pub use parser::{feature_rows, parse_document, polygon_ring_lists};
