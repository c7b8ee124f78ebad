pub mod metrics;
pub mod ring;

pub use metrics::{PolygonMetrics, polygon_metrics};
pub use ring::{Ring, RingExt, Vertex, ring_area};
