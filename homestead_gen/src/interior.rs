// Interior furnishing.
//
// Every piece of furniture sits at a fixed offset from the footprint's
// south-west corner, one layer above the floor. Offsets that depend on the
// size (dining table, kitchen, bed, lights) are computed from width and
// depth with integer division. The layout assumes width >= 14 and
// depth >= 12 (`config::MIN_WIDTH`, `config::MIN_DEPTH`); below that the
// clusters would run into the walls. `GenConfig::validate` rejects such
// configs, there is no runtime check here.
//
// Plan view (south at the bottom), not to scale:
//
//   +------------------------------+
//   |   bed                        |
//   |        serv. table  kitchen  |
//   |        benches               |
//   |   *      * dining *          |   * = ceiling lights
//   |          table               |
//   |  sofa      display           |
//   |                              |
//   +-----------door---------------+

use crate::area::Area;
use crate::config::GenConfig;
use crate::site::Site;
use crate::types::{BlockSpec, Facing, VoxelCoord};
use crate::world::VoxelWriter;
use tracing::debug;

/// Place furniture and ceiling lights inside the shell.
pub fn furnish<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    footprint: Area,
    site: &Site,
    floor: &BlockSpec,
    config: &GenConfig,
) {
    let f = &config.materials.furniture;
    let x0 = footprint.min_x;
    let z0 = footprint.min_z;
    let w = footprint.width();
    let d = footprint.depth();
    let y = site.y + 1;
    let at = |dx: i32, dz: i32| VoxelCoord::new(x0 + dx, y, z0 + dz);

    // Living corner: two-seat sofa with wool backrests, display in front.
    let seat = f.sofa_seat.clone().facing(Facing::East);
    for dx in [2, 3] {
        writer.write_cell(at(dx, 3), &seat);
        writer.write_cell(at(dx, 3).offset(0, 1, 0), &f.sofa_back);
    }
    writer.write_cell(at(6, 3), &f.display);

    // Dining table with a bench at each end of its north row. The benches
    // replace the table's corner cells.
    let table_x = w / 2 - 2;
    let table_z = d / 2 - 1;
    let table = Area::from_origin(x0 + table_x, z0 + table_z, 4, 2);
    writer.fill_area(table, y..y + 1, floor);
    writer.write_cell(at(table_x, table_z + 1), &f.bench.clone().facing(Facing::East));
    writer.write_cell(at(table_x + 3, table_z + 1), &f.bench.clone().facing(Facing::West));

    // Kitchen counter in the north-east corner.
    let kitchen_x = w - 5;
    let kitchen_z = d - 5;
    for (i, block) in [&f.crafting, &f.furnace, &f.smoker, &f.barrel].into_iter().enumerate() {
        writer.write_cell(at(kitchen_x + i as i32, kitchen_z), block);
    }

    // Serving table west of the kitchen, benches two rows north of it.
    let serve_x = kitchen_x - 4;
    let serve = Area::from_origin(x0 + serve_x, z0 + kitchen_z, 2, 1);
    writer.fill_area(serve, y..y + 1, floor);
    let bench = f.bench.clone().facing(Facing::South);
    for dx in [serve_x, serve_x + 1] {
        writer.write_cell(at(dx, kitchen_z + 2), &bench);
    }

    writer.write_cell(at(4, d - 4), &f.bed.clone().facing(Facing::South));

    // Lights hang in the top interior layer along the depth centerline.
    let ceiling_y = site.y + config.wall_height - 1;
    for lx in [w / 3, w / 2, 2 * w / 3] {
        writer.write_cell(
            VoxelCoord::new(x0 + lx, ceiling_y, z0 + d / 2),
            &config.materials.light,
        );
    }

    debug!(width = w, depth = d, "interior furnished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::VoxelWorld;

    fn furnished(width: i32, depth: i32) -> (VoxelWorld, Area) {
        let config = GenConfig::default();
        let site = Site { x: 10, z: 10, y: 64 };
        let fp = Area::from_origin(site.x, site.z, width, depth);
        let mut world = VoxelWorld::new(VoxelCoord::new(0, 60, 0), 40, 20, 40);
        furnish(&mut world, fp, &site, &BlockSpec::new("polished_andesite"), &config);
        (world, fp)
    }

    #[test]
    fn everything_stays_strictly_inside_walls() {
        for width in 14..=16 {
            for depth in 12..=14 {
                let (world, fp) = furnished(width, depth);
                let interior = fp.shrink(1);
                for y in 60..80 {
                    for x in 0..40 {
                        for z in 0..40 {
                            if world.get(VoxelCoord::new(x, y, z)).is_some() {
                                assert!(
                                    interior.contains(x, z),
                                    "{width}x{depth}: ({x}, {y}, {z}) outside interior"
                                );
                                assert!(
                                    (65..68).contains(&y),
                                    "({x}, {y}, {z}) not between floor and ceiling"
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn canonical_furniture_positions() {
        let (world, _) = furnished(14, 12);
        assert_eq!(world.id_at(VoxelCoord::new(12, 65, 13)), Some("dark_oak_stairs"));
        assert_eq!(world.id_at(VoxelCoord::new(13, 66, 13)), Some("red_wool"));
        assert_eq!(world.id_at(VoxelCoord::new(16, 65, 13)), Some("black_concrete"));
        // Kitchen at x+9 .. x+12, z+7.
        let kitchen: Vec<_> = (19..23)
            .map(|x| world.id_at(VoxelCoord::new(x, 65, 17)).unwrap().to_string())
            .collect();
        assert_eq!(kitchen, ["crafting_table", "furnace", "smoker", "barrel"]);
        assert_eq!(world.id_at(VoxelCoord::new(14, 65, 18)), Some("orange_bed"));
    }

    #[test]
    fn dining_table_and_benches() {
        let (world, _) = furnished(14, 12);
        // Table over x 15..19, z 15..17; benches at its north corners.
        assert_eq!(world.id_at(VoxelCoord::new(15, 65, 15)), Some("polished_andesite"));
        assert_eq!(world.id_at(VoxelCoord::new(18, 65, 15)), Some("polished_andesite"));
        assert_eq!(world.id_at(VoxelCoord::new(16, 65, 16)), Some("polished_andesite"));
        let east = world.get(VoxelCoord::new(15, 65, 16)).unwrap();
        let west = world.get(VoxelCoord::new(18, 65, 16)).unwrap();
        assert_eq!(east.state("facing"), Some("east"));
        assert_eq!(west.state("facing"), Some("west"));
    }

    #[test]
    fn three_lights_on_centerline() {
        let (world, _) = furnished(15, 13);
        let lights = world.cells_with_id("glowstone");
        assert_eq!(lights.len(), 3);
        let xs: Vec<i32> = lights.iter().map(|c| c.x).collect();
        assert!(xs.contains(&(10 + 5)) && xs.contains(&(10 + 7)) && xs.contains(&(10 + 10)));
        assert!(lights.iter().all(|c| c.y == 67 && c.z == 10 + 6));
    }
}
