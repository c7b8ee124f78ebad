use thiserror::Error;

/// Ways a GeoJSON document can fail to yield polygon metrics
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Not valid JSON, or valid JSON that doesn't fit the GeoJSON shape
    #[error("invalid GeoJSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid {geometry} coordinates")]
    Coordinates {
        geometry: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("position has {found} ordinate(s), expected at least 2")]
    ShortPosition { found: usize },
}
