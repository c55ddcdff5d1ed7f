// Site selection.
//
// Picks the origin column of the dwelling (the footprint's south-west
// corner) uniformly at random inside the target area and resolves its
// ground elevation from the terrain. The draw window is chosen per axis:
//
//   - the area holds the largest property: only origins whose whole
//     property fits, so the planner never clips the fence;
//   - the area holds the largest footprint plus one fence column each side:
//     only origins that keep that footprint one column clear of the area
//     edge. The planner clips the yard, never the house;
//   - anything smaller is rejected with `GenError::AreaTooSmall`.
//
// A column the terrain cannot resolve is a hard stop: the caller supplied
// inconsistent area and terrain data, and the run aborts with
// `GenError::SiteOutOfBounds` before anything is written.
//
// **Critical constraint: determinism.** Draws x, then z, from the caller's
// `GenRng`, and nothing else.

use crate::area::Area;
use crate::config::GenConfig;
use crate::error::GenError;
use crate::prng::GenRng;
use crate::terrain::TerrainQuery;
use crate::types::VoxelCoord;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Resolved generation origin: footprint corner column plus its ground
/// elevation. Immutable for the rest of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub x: i32,
    pub z: i32,
    /// Elevation of the highest solid block of the origin column.
    pub y: i32,
}

impl Site {
    /// The site as a voxel: the ground block under the footprint's
    /// south-west corner.
    pub fn origin(&self) -> VoxelCoord {
        VoxelCoord::new(self.x, self.y, self.z)
    }
}

/// Inclusive range of origins along one axis, or `None` when the axis
/// cannot hold the footprint. `lo..hi` is the target area's extent on that
/// axis; `footprint` and `property` are the largest lengths the config can
/// roll, the property adding a margin on each side.
fn origin_window(lo: i32, hi: i32, footprint: i32, property: i32) -> Option<(i32, i32)> {
    let span = hi - lo;
    let margin = (property - footprint) / 2;
    if span >= property {
        Some((lo + margin, hi - property + margin))
    } else if span >= footprint + 2 {
        Some((lo + 1, hi - footprint - 1))
    } else {
        None
    }
}

/// Choose and resolve the site for one run.
pub fn select_site<T: TerrainQuery + ?Sized>(
    outer: Area,
    terrain: &T,
    config: &GenConfig,
    rng: &mut GenRng,
) -> Result<Site, GenError> {
    if outer.is_empty() {
        return Err(GenError::EmptyTargetArea);
    }
    let too_small = || GenError::AreaTooSmall {
        width: outer.width(),
        depth: outer.depth(),
    };
    let (property_x, property_z) = config.max_property_extent();
    let (x_lo, x_hi) = origin_window(outer.min_x, outer.max_x, config.width_range.1, property_x)
        .ok_or_else(too_small)?;
    let (z_lo, z_hi) = origin_window(outer.min_z, outer.max_z, config.depth_range.1, property_z)
        .ok_or_else(too_small)?;
    trace!(x_lo, x_hi, z_lo, z_hi, "site origin window");

    let x = rng.range_i32_inclusive(x_lo, x_hi);
    let z = rng.range_i32_inclusive(z_lo, z_hi);
    let y = terrain
        .ground_height(x, z)
        .ok_or(GenError::SiteOutOfBounds { x, z })?;

    debug!(x, y, z, "site selected");
    Ok(Site { x, z, y })
}
