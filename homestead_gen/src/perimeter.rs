// Property fence and gated entrance.
//
// Two fence courses, at ground level and one above, run along all four edge
// rows of the (clipped) property. The entrance cells are then reopened to
// air on both courses and get a south-facing gate on the lower course. The
// upper course above the gate stays open so the gate can swing.

use crate::config::GenConfig;
use crate::plan::RegionPlan;
use crate::site::Site;
use crate::types::{BlockSpec, Facing};
use crate::world::VoxelWriter;
use tracing::{debug, warn};

/// Number of stacked fence layers.
pub const FENCE_COURSES: i32 = 2;

/// Build the fence ring and the entrance gate.
pub fn build_perimeter<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    plan: &RegionPlan,
    site: &Site,
    config: &GenConfig,
) {
    let property = plan.property;
    if property.is_empty() {
        warn!("property empty, no fence");
        return;
    }
    let y = site.y;
    let fence = &config.materials.fence;
    let courses = y..y + FENCE_COURSES;
    for side in [
        property.south_row(),
        property.north_row(),
        property.west_column(),
        property.east_column(),
    ] {
        writer.fill_area(side, courses.clone(), fence);
    }

    if plan.entrance.is_empty() {
        return;
    }
    writer.fill_area(plan.entrance, courses, &BlockSpec::air());
    let gate = config.materials.gate.clone().facing(Facing::South);
    writer.fill_area(plan.entrance, y..y + 1, &gate);
    debug!(entrance = ?plan.entrance, "perimeter built");
}
