// Error type for homestead generation.
//
// Site selection raises `EmptyTargetArea`, `AreaTooSmall` and
// `SiteOutOfBounds`, all before anything is written. `SiteOutOfBounds` means
// the caller's target area and terrain data disagree; the run is aborted
// without retrying. Clipped regions that collapse to nothing are never
// errors. The remaining variants cover rejected configs and JSON file I/O
// (config loading, write log saving).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("site column ({x}, {z}) is outside the terrain data")]
    SiteOutOfBounds { x: i32, z: i32 },

    #[error("target area contains no columns")]
    EmptyTargetArea,

    #[error("target area {width}x{depth} cannot hold the footprint and its fence")]
    AreaTooSmall { width: i32, depth: i32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
