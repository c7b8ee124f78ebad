use geo::{Coord, LineString};

/// A 2-D vertex in whatever units the source file uses
pub type Vertex = Coord<f64>;

/// A closed ring of vertices. The closing edge from the last vertex back to
/// the first is implied and need not be stored.
pub type Ring = LineString<f64>;

/// Unsigned planar area of a closed ring using the shoelace formula
///
/// # Algorithm
/// Sums `x_i * y_{i+1} - x_{i+1} * y_i` over every consecutive vertex pair,
/// including the wrap-around pair (last, first), then halves the absolute
/// value. Winding order does not affect the result, and a ring that repeats
/// its first vertex at the end gets the same area as one that doesn't.
///
/// An empty ring has area exactly 0.0.
pub fn ring_area(ring: &[Vertex]) -> f64 {
    if ring.is_empty() {
        return 0.0;
    }

    let next = ring.iter().cycle().skip(1);
    let twice_signed: f64 = ring
        .iter()
        .zip(next)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();

    twice_signed.abs() / 2.0
}

/// Shoelace area directly on a `LineString`
pub trait RingExt {
    fn shoelace_area(&self) -> f64;
}

impl RingExt for Ring {
    fn shoelace_area(&self) -> f64 {
        ring_area(&self.0)
    }
}
