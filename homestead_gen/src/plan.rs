// Region planning: every rectangle of a homestead, computed once.
//
// `plan_regions()` is a pure function from (site, dimensions, config,
// target area) to an immutable `RegionPlan`. All clipping between regions
// happens here, so the build stages only read finished rectangles and
// never re-derive bounds. Clipping is min/max saturation; a region that
// clips to nothing stays in the plan as an empty `Area` and its stage
// draws nothing.
//
// Layout, with the footprint `[x, x+w) x [z, z+d)` and margin `m`:
//
//   property  footprint grown by m on every side, clipped to the target
//   yard      property minus its one-cell fence ring
//   garden    [x-gap-gw, x-gap) x [z+inset, z+d-inset), clipped to the yard
//   entrance  2 columns centered on the property's X midpoint, on the
//             property's south row
//   path      up to two segments in the entrance's columns: one running
//             `path_reach` rows south of the fence (clipped to the target),
//             one from just inside the fence to the footprint's south wall.
//             The fence row itself is left for the gate.
//   tree      anchor east of the footprint, clamped to stay one cell inside
//             the fence ring; dropped if clamping pushes it into the house
//
// See also: `site.rs` for how the origin is chosen so the property usually
// fits without clipping, and `generate.rs` for the stage order.

use crate::area::Area;
use crate::config::GenConfig;
use crate::prng::GenRng;
use crate::site::Site;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Width of the fence entrance in columns.
pub const ENTRANCE_WIDTH: i32 = 2;

/// Footprint size for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i32,
    pub depth: i32,
}

impl Dimensions {
    /// Draw width, then depth, from the configured inclusive ranges.
    pub fn roll(config: &GenConfig, rng: &mut GenRng) -> Self {
        let width = rng.range_i32_inclusive(config.width_range.0, config.width_range.1);
        let depth = rng.range_i32_inclusive(config.depth_range.0, config.depth_range.1);
        Self { width, depth }
    }
}

/// Every named rectangle of a homestead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPlan {
    pub outer: Area,
    pub footprint: Area,
    pub property: Area,
    pub yard: Area,
    pub garden: Area,
    pub entrance: Area,
    pub path: SmallVec<[Area; 2]>,
    pub tree_anchor: Option<(i32, i32)>,
}

/// Compute the region plan. Pure: no randomness, no writes.
pub fn plan_regions(site: &Site, dims: Dimensions, config: &GenConfig, outer: Area) -> RegionPlan {
    let footprint = Area::from_origin(site.x, site.z, dims.width, dims.depth);
    let property = footprint.expand(config.margin).intersect(&outer);
    let yard = property.shrink(1);
    if property != footprint.expand(config.margin) {
        warn!(?property, ?outer, "property clipped by target area");
    }

    let garden = Area::new(
        footprint.min_x - config.garden_gap - config.garden_width,
        footprint.min_z + config.garden_inset,
        footprint.min_x - config.garden_gap,
        footprint.max_z - config.garden_inset,
    )
    .intersect(&yard);

    let entrance = if property.is_empty() {
        property
    } else {
        let left = property.center_x() - 1;
        Area::new(
            left,
            property.min_z,
            left + ENTRANCE_WIDTH,
            property.min_z + 1,
        )
        .intersect(&property)
    };

    let path = plan_path(&entrance, &property, &footprint, &outer, config.path_reach);
    let tree_anchor = plan_tree_anchor(&footprint, &yard, config.tree_offset);

    let plan = RegionPlan {
        outer,
        footprint,
        property,
        yard,
        garden,
        entrance,
        path,
        tree_anchor,
    };
    debug!(
        footprint = ?plan.footprint,
        property = ?plan.property,
        garden = ?plan.garden,
        entrance = ?plan.entrance,
        path_segments = plan.path.len(),
        tree = ?plan.tree_anchor,
        "regions planned"
    );
    plan
}

/// Path segments in the entrance's columns. The outside segment runs from
/// `reach` rows south of the fence row up to the fence row; the inside one
/// from the row after the fence up to the footprint's south wall. Empty
/// segments are dropped.
fn plan_path(
    entrance: &Area,
    property: &Area,
    footprint: &Area,
    outer: &Area,
    reach: i32,
) -> SmallVec<[Area; 2]> {
    let mut segments = SmallVec::new();
    if entrance.is_empty() {
        return segments;
    }
    let fence_z = property.min_z;
    let outside = Area::new(entrance.min_x, fence_z - reach, entrance.max_x, fence_z)
        .intersect(outer);
    let inside = Area::new(entrance.min_x, fence_z + 1, entrance.max_x, footprint.min_z)
        .intersect(property);
    for segment in [outside, inside] {
        if !segment.is_empty() && !segment.overlaps(footprint) {
            segments.push(segment);
        }
    }
    segments
}

/// Tree anchor `offset` east/north of the footprint's south-east corner,
/// clamped into the yard. `None` when the yard is empty or the clamped
/// anchor's 3x3 canopy would reach over the footprint.
fn plan_tree_anchor(footprint: &Area, yard: &Area, offset: (i32, i32)) -> Option<(i32, i32)> {
    if yard.is_empty() {
        return None;
    }
    let x = (footprint.max_x + offset.0).clamp(yard.min_x, yard.max_x - 1);
    let z = (footprint.min_z + offset.1).clamp(yard.min_z, yard.max_z - 1);
    if footprint.overlaps(&canopy_area(x, z)) {
        return None;
    }
    Some((x, z))
}

/// Columns covered by the canopy of a tree anchored at `(x, z)`.
pub fn canopy_area(x: i32, z: i32) -> Area {
    Area::from_origin(x - 1, z - 1, 3, 3)
}
