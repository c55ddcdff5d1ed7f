// Homestead generation pipeline.
//
// Drives one run end to end:
//   1. validate the config
//   2. select the site                          (rng: x, z)
//   3. roll width and depth                     (rng: width, depth)
//   4. plan every region (pure)
//   5. pick the floor material                  (rng: one palette draw)
//   6. clear the property, build the shell
//   7. roof, interior
//   8. fence and gate, path
//   9. garden flora, tree                       (rng: per garden cell)
//
// Steps 1-3 can fail; nothing is written until all three succeed. Later
// stages never fail: degenerate regions just draw nothing.
//
// `generate_homestead()` runs everything. `build_homestead()` starts at
// step 4 with a caller-chosen site and dimensions, which is what tests use
// to pin the layout.
//
// **Critical constraint: determinism.** The random draws above happen in
// exactly that order and nowhere else. Given the same seed, config, terrain
// and target area, two runs issue byte-identical write sequences.

use crate::area::Area;
use crate::config::GenConfig;
use crate::error::GenError;
use crate::interior::furnish;
use crate::landscape::{plant_garden, plant_tree};
use crate::path::build_path;
use crate::perimeter::build_perimeter;
use crate::plan::{Dimensions, RegionPlan, plan_regions};
use crate::prng::GenRng;
use crate::roof::build_gabled_roof;
use crate::shell::{build_shell, clear_property};
use crate::site::{Site, select_site};
use crate::terrain::TerrainQuery;
use crate::types::BlockSpec;
use crate::world::VoxelWriter;
use serde::{Deserialize, Serialize};
use tracing::info;

/// What a run built and where.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub site: Site,
    pub dimensions: Dimensions,
    pub floor: BlockSpec,
    pub plan: RegionPlan,
    pub door: Area,
    pub roof_rows: usize,
    pub paved_cells: usize,
    pub flowers_planted: usize,
    pub tree_planted: bool,
}

/// Select a site, roll dimensions and build a homestead inside `outer`.
pub fn generate_homestead<W, T>(
    writer: &mut W,
    terrain: &T,
    outer: Area,
    config: &GenConfig,
    rng: &mut GenRng,
) -> Result<GenerationReport, GenError>
where
    W: VoxelWriter + ?Sized,
    T: TerrainQuery + ?Sized,
{
    config.validate()?;
    let site = select_site(outer, terrain, config, rng)?;
    let dims = Dimensions::roll(config, rng);
    build_homestead(writer, site, dims, outer, config, rng)
}

/// Build a homestead at a known site with known dimensions.
pub fn build_homestead<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    site: Site,
    dims: Dimensions,
    outer: Area,
    config: &GenConfig,
    rng: &mut GenRng,
) -> Result<GenerationReport, GenError> {
    let plan = plan_regions(&site, dims, config, outer);
    let floor = config
        .materials
        .floor_palette
        .pick(rng)
        .cloned()
        .ok_or_else(|| GenError::InvalidConfig("floor palette is empty".into()))?;

    clear_property(writer, &plan, &site, config);
    let door = build_shell(writer, &plan, &site, &floor, config);
    let roof_base = site.y + config.wall_height + 1;
    let roof_rows = build_gabled_roof(writer, plan.footprint, roof_base, &config.materials);
    furnish(writer, plan.footprint, &site, &floor, config);
    build_perimeter(writer, &plan, &site, config);
    let paved_cells = build_path(writer, &plan, &site, config);
    let flowers_planted = plant_garden(writer, plan.garden, &site, config, rng);
    let tree_planted = plant_tree(writer, &plan, &site, config);

    info!(
        x = site.x,
        y = site.y,
        z = site.z,
        width = dims.width,
        depth = dims.depth,
        floor = %floor,
        roof_rows,
        flowers_planted,
        "homestead generated"
    );

    Ok(GenerationReport {
        site,
        dimensions: dims,
        floor,
        plan,
        door,
        roof_rows,
        paved_cells,
        flowers_planted,
        tree_planted,
    })
}
