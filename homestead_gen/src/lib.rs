// homestead_gen: procedural furnished-homestead generator for voxel worlds.
//
// Given a target area, a terrain height source and a seed, this crate picks
// a building site and places a complete homestead through an abstract voxel
// writer: a walled single-room dwelling with a gabled roof and furniture,
// a fenced yard with a gated entrance, an access path, a flower garden and
// a tree. It has no knowledge of any particular game or world format; the
// host supplies a `TerrainQuery` and a `VoxelWriter`.
//
// Module overview:
// - `generate.rs`:  Pipeline: `generate_homestead()` / `build_homestead()` + `GenerationReport`.
// - `site.rs`:      Site selection inside the target area.
// - `plan.rs`:      Region planner: footprint, property, yard, garden, entrance, path, tree.
// - `shell.rs`:     Site clearing, floor, walls, ceiling, front door.
// - `roof.rs`:      Gabled roof row plan and writer.
// - `interior.rs`:  Furniture and ceiling lights.
// - `perimeter.rs`: Two-course fence and the gated entrance.
// - `path.rs`:      Access path paving.
// - `landscape.rs`: Garden flora and the decorative tree.
// - `config.rs`:    GenConfig + Materials: every tunable constant and block.
// - `area.rs`:      Half-open horizontal rectangles and clipping.
// - `world.rs`:     VoxelWriter seam + VoxelWorld dense grid.
// - `terrain.rs`:   TerrainQuery seam + HeightMap.
// - `record.rs`:    WriteLog recorder and Tee.
// - `error.rs`:     GenError.
// - `prng`:         Re-exported from `homestead_prng`: xoshiro256++ PRNG with SplitMix64 seeding.
// - `types.rs`:     VoxelCoord, Facing, BlockSpec.
//
// The `homestead` binary (`main.rs`) wraps the library for the command line.
//
// **Critical constraint: determinism.** Generation is a pure function of
// `(config, terrain, target area, seed)`. All randomness comes from a
// `GenRng` passed down explicitly. No `HashMap` iteration order, no system
// time, no OS entropy reach the output.

pub mod area;
pub mod config;
pub mod error;
pub mod generate;
pub mod interior;
pub mod landscape;
pub mod path;
pub mod perimeter;
pub mod plan;
pub use homestead_prng as prng;
pub mod record;
pub mod roof;
pub mod shell;
pub mod site;
pub mod terrain;
pub mod types;
pub mod world;
