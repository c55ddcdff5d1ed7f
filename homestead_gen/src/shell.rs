// Dwelling shell: site clearing, floor, walls, ceiling and front door.
//
// Layers, with `y` the site's ground elevation and `h` the wall height:
//   y            ground cover over the property, floor over the footprint
//   y .. y+h     perimeter walls (the bottom wall layer replaces the floor
//                along the perimeter)
//   y+h          ceiling cap over the whole footprint
//   y+1 .. y+h   interior hollowed to air
//
// The door is a 3x3 opening in the south wall. Its left column is
// `x + w/2 - 1`, which puts the middle column on the footprint's X midpoint
// for even widths and keeps the opening in line with the fence entrance.
// The threshold gets the floor material and the two lower layers of the
// opening get paired lower/upper door halves facing south; the top layer
// stays open.

use crate::area::Area;
use crate::config::GenConfig;
use crate::plan::RegionPlan;
use crate::site::Site;
use crate::types::{BlockSpec, Facing, VoxelCoord};
use crate::world::VoxelWriter;
use tracing::debug;

pub const DOOR_WIDTH: i32 = 3;
pub const DOOR_HEIGHT: i32 = 3;

/// Clear the property and lay ground cover at ground level.
pub fn clear_property<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    plan: &RegionPlan,
    site: &Site,
    config: &GenConfig,
) {
    let y = site.y;
    writer.fill_area(plan.property, y..y + config.clear_height, &BlockSpec::air());
    writer.fill_area(plan.property, y..y + 1, &config.materials.ground_cover);
}

/// Build floor, walls, ceiling and door. Returns the door opening's columns.
pub fn build_shell<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    plan: &RegionPlan,
    site: &Site,
    floor: &BlockSpec,
    config: &GenConfig,
) -> Area {
    let fp = plan.footprint;
    let y = site.y;
    let h = config.wall_height;
    let wall = &config.materials.wall;

    writer.fill_area(fp, y..y + 1, floor);
    for side in [fp.south_row(), fp.north_row(), fp.west_column(), fp.east_column()] {
        writer.fill_area(side, y..y + h, wall);
    }
    writer.fill_area(fp, y + h..y + h + 1, wall);
    writer.fill_area(fp.shrink(1), y + 1..y + h, &BlockSpec::air());

    let door_x = fp.min_x + fp.width() / 2 - 1;
    let door = Area::new(door_x, fp.min_z, door_x + DOOR_WIDTH, fp.min_z + 1);
    writer.fill_area(door, y..y + 1, floor);
    writer.fill_area(door, y + 1..y + 1 + DOOR_HEIGHT, &BlockSpec::air());

    let door_block = config.materials.door.clone().facing(Facing::South);
    let lower = door_block.clone().with_state("half", "lower");
    let upper = door_block.with_state("half", "upper");
    for (x, z) in door.cells() {
        writer.write_cell(VoxelCoord::new(x, y + 1, z), &lower);
        writer.write_cell(VoxelCoord::new(x, y + 2, z), &upper);
    }

    debug!(?door, "shell built");
    door
}
