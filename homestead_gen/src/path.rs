// Access path.
//
// Paves each planned path segment with a single layer of path material at
// ground elevation. The segments were clipped by the planner; this stage
// only draws them.

use crate::config::GenConfig;
use crate::plan::RegionPlan;
use crate::site::Site;
use crate::world::VoxelWriter;
use tracing::trace;

/// Pave the planned path. Returns the number of paved cells.
pub fn build_path<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    plan: &RegionPlan,
    site: &Site,
    config: &GenConfig,
) -> usize {
    let y = site.y;
    let mut paved = 0;
    for segment in &plan.path {
        trace!(?segment, "paving");
        writer.fill_area(*segment, y..y + 1, &config.materials.path);
        paved += segment.len();
    }
    paved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use crate::plan::{Dimensions, plan_regions};
    use crate::types::VoxelCoord;
    use crate::world::VoxelWorld;

    #[test]
    fn paves_both_segments_but_not_fence_row() {
        let config = GenConfig::default();
        let site = Site { x: 10, z: 12, y: 64 };
        let plan = plan_regions(
            &site,
            Dimensions { width: 14, depth: 12 },
            &config,
            Area::new(0, 0, 50, 50),
        );
        let mut world = VoxelWorld::new(VoxelCoord::new(0, 60, 0), 50, 10, 50);
        let paved = build_path(&mut world, &plan, &site, &config);

        // Outside z 1..6 and inside z 7..12, two columns each.
        assert_eq!(paved, 2 * 5 + 2 * 5);
        assert_eq!(world.count_of("cobblestone"), paved);
        assert_eq!(world.id_at(VoxelCoord::new(16, 64, 1)), Some("cobblestone"));
        assert_eq!(world.id_at(VoxelCoord::new(17, 64, 11)), Some("cobblestone"));
        assert_eq!(world.id_at(VoxelCoord::new(16, 64, 6)), None);
        assert_eq!(world.id_at(VoxelCoord::new(16, 64, 0)), None);
        assert_eq!(world.id_at(VoxelCoord::new(16, 64, 12)), None);
    }
}
