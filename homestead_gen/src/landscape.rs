// Landscaping: garden flora and the decorative tree.
//
// The garden is cleared one layer above ground, then every cell is visited
// in `Area::cells()` order (x outer, z inner) and independently rolls
// `flora_chance`. A successful roll draws one flora block uniformly from the
// palette and places it at ground level, replacing the ground cover.
//
// The tree is a straight trunk of `tree_trunk_height` logs starting one
// layer above ground at the planned anchor, capped by a 3x3 leaf layer
// directly above the trunk.
//
// **Critical constraint: determinism.** Each garden cell consumes one
// `random_bool` draw, plus one palette draw when it succeeds. The tree
// consumes nothing.

use crate::area::Area;
use crate::config::GenConfig;
use crate::plan::{RegionPlan, canopy_area};
use crate::prng::GenRng;
use crate::site::Site;
use crate::types::{BlockSpec, VoxelCoord};
use crate::world::VoxelWriter;
use tracing::{debug, trace};

/// Clear the garden and scatter flora over it. Returns how many flora
/// blocks were placed.
pub fn plant_garden<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    garden: Area,
    site: &Site,
    config: &GenConfig,
    rng: &mut GenRng,
) -> usize {
    if garden.is_empty() {
        debug!("garden clipped away");
        return 0;
    }
    let y = site.y;
    writer.fill_area(garden, y + 1..y + 2, &BlockSpec::air());

    let mut planted = 0;
    for (x, z) in garden.cells() {
        if !rng.random_bool(config.flora_chance) {
            continue;
        }
        if let Some(flora) = config.materials.flora_palette.pick(rng) {
            trace!(x, z, flora = %flora, "planting");
            writer.write_cell(VoxelCoord::new(x, y, z), flora);
            planted += 1;
        }
    }
    debug!(planted, cells = garden.len(), "garden planted");
    planted
}

/// Grow the tree at the planned anchor, if any. Returns whether a tree was
/// placed.
pub fn plant_tree<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    plan: &RegionPlan,
    site: &Site,
    config: &GenConfig,
) -> bool {
    let Some((x, z)) = plan.tree_anchor else {
        debug!("no room for a tree");
        return false;
    };
    let trunk_base = site.y + 1;
    let canopy_y = trunk_base + config.tree_trunk_height;
    writer.fill_area(
        Area::from_origin(x, z, 1, 1),
        trunk_base..canopy_y,
        &config.materials.trunk,
    );
    writer.fill_area(canopy_area(x, z), canopy_y..canopy_y + 1, &config.materials.leaves);
    debug!(x, z, canopy_y, "tree planted");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crate::plan::{Dimensions, plan_regions};
    use crate::world::VoxelWorld;

    fn site() -> Site {
        Site { x: 10, z: 12, y: 64 }
    }

    fn world() -> VoxelWorld {
        VoxelWorld::new(VoxelCoord::new(0, 60, 0), 50, 20, 50)
    }

    #[test]
    fn flora_stays_in_garden_at_ground_level() {
        let config = GenConfig::default();
        let garden = Area::new(5, 14, 9, 22);
        let mut w = world();
        let mut rng = GenRng::new(9);
        let planted = plant_garden(&mut w, garden, &site(), &config, &mut rng);

        let flora_ids = ["poppy", "dandelion", "blue_orchid", "flower_pot"];
        let mut found = 0;
        for id in flora_ids {
            for c in w.cells_with_id(id) {
                assert!(garden.contains(c.x, c.z));
                assert_eq!(c.y, 64);
                found += 1;
            }
        }
        assert_eq!(found, planted);
        // The layer above the garden was cleared.
        assert_eq!(w.count_of("air"), garden.len());
    }

    #[test]
    fn certain_and_impossible_chances() {
        let garden = Area::new(0, 0, 4, 8);
        let always = GenConfig {
            flora_chance: 1.0,
            ..GenConfig::default()
        };
        let never = GenConfig {
            flora_chance: 0.0,
            ..GenConfig::default()
        };
        let mut rng = GenRng::new(1);
        assert_eq!(plant_garden(&mut world(), garden, &site(), &always, &mut rng), 32);
        assert_eq!(plant_garden(&mut world(), garden, &site(), &never, &mut rng), 0);
    }

    #[test]
    fn flora_rate_is_roughly_one_in_five() {
        let config = GenConfig::default();
        let garden = Area::new(0, 0, 40, 40);
        let mut rng = GenRng::new(2024);
        let planted = plant_garden(&mut world(), garden, &site(), &config, &mut rng);
        // 1600 cells at p = 0.2: mean 320, sd 16.
        assert!((240..400).contains(&planted), "planted {planted}");
    }

    #[test]
    fn single_flora_palette_always_used() {
        let mut config = GenConfig {
            flora_chance: 1.0,
            ..GenConfig::default()
        };
        config.materials.flora_palette = Palette::of(&["allium"]);
        let mut w = world();
        plant_garden(&mut w, Area::new(2, 2, 4, 4), &site(), &config, &mut GenRng::new(3));
        assert_eq!(w.count_of("allium"), 4);
    }

    #[test]
    fn empty_garden_consumes_no_randomness() {
        let config = GenConfig::default();
        let mut rng = GenRng::new(8);
        let before = rng.clone();
        let planted = plant_garden(&mut world(), Area::new(3, 3, 3, 9), &site(), &config, &mut rng);
        assert_eq!(planted, 0);
        assert_eq!(rng, before);
    }

    #[test]
    fn tree_trunk_and_canopy() {
        let config = GenConfig::default();
        let plan = plan_regions(
            &site(),
            Dimensions { width: 14, depth: 12 },
            &config,
            Area::new(0, 0, 50, 50),
        );
        let mut w = world();
        assert!(plant_tree(&mut w, &plan, &site(), &config));

        let (tx, tz) = plan.tree_anchor.unwrap();
        assert_eq!((tx, tz), (26, 14));
        for y in 65..70 {
            assert_eq!(w.id_at(VoxelCoord::new(tx, y, tz)), Some("stripped_spruce_log"));
        }
        assert_eq!(w.count_of("stripped_spruce_log"), 5);
        assert_eq!(w.count_of("oak_leaves"), 9);
        for c in w.cells_with_id("oak_leaves") {
            assert_eq!(c.y, 70);
            assert!((c.x - tx).abs() <= 1 && (c.z - tz).abs() <= 1);
        }
    }

    #[test]
    fn no_anchor_no_tree() {
        let config = GenConfig::default();
        let plan = plan_regions(
            &site(),
            Dimensions { width: 14, depth: 12 },
            &config,
            Area::new(500, 500, 501, 501),
        );
        let mut w = world();
        assert!(!plant_tree(&mut w, &plan, &site(), &config));
        assert_eq!(w.count_of("stripped_spruce_log"), 0);
    }
}
