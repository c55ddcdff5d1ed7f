// Gabled roof generation.
//
// The roof covers the footprint's full width and is built row by row from
// the south and north eaves toward the ridge. Row `i` from the south eave
// (z + i) and row `i` from the north eave (z + d - 1 - i) both sit at
// `base + i` and get stairs sloping outward. For an odd depth the two walks
// meet on a single middle row; that row gets a bottom slab at the ridge
// elevation instead of a stair, so no cell receives two roof writes and
// exactly `2 * (d / 2) + d % 2` rows are emitted.
//
// `roof_rows()` is the pure row plan; `build_gabled_roof()` writes it.

use crate::area::Area;
use crate::config::Materials;
use crate::types::Facing;
use crate::world::VoxelWriter;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofRowKind {
    /// Stair facing south, on the south slope.
    SouthSlope,
    /// Stair facing north, on the north slope.
    NorthSlope,
    /// Flat slab on the middle row of an odd-depth roof.
    Ridge,
}

/// One full-width row of roof blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoofRow {
    pub z: i32,
    pub y: i32,
    pub kind: RoofRowKind,
}

/// Plan the rows of a gabled roof over rows `z0 .. z0 + depth`.
pub fn roof_rows(z0: i32, depth: i32, base_y: i32) -> Vec<RoofRow> {
    let mut rows = Vec::with_capacity(depth.max(0) as usize);
    for i in 0..(depth + 1) / 2 {
        let south = z0 + i;
        let north = z0 + depth - 1 - i;
        let y = base_y + i;
        if north > south {
            rows.push(RoofRow {
                z: south,
                y,
                kind: RoofRowKind::SouthSlope,
            });
            rows.push(RoofRow {
                z: north,
                y,
                kind: RoofRowKind::NorthSlope,
            });
        } else {
            rows.push(RoofRow {
                z: south,
                y,
                kind: RoofRowKind::Ridge,
            });
        }
    }
    rows
}

/// Write a gabled roof over `footprint` starting at `base_y`. Returns the
/// number of rows written.
pub fn build_gabled_roof<W: VoxelWriter + ?Sized>(
    writer: &mut W,
    footprint: Area,
    base_y: i32,
    materials: &Materials,
) -> usize {
    if footprint.is_empty() {
        return 0;
    }
    let south_stair = materials.roof_stair.clone().facing(Facing::South);
    let north_stair = materials.roof_stair.clone().facing(Facing::North);

    let rows = roof_rows(footprint.min_z, footprint.depth(), base_y);
    for row in &rows {
        let block = match row.kind {
            RoofRowKind::SouthSlope => &south_stair,
            RoofRowKind::NorthSlope => &north_stair,
            RoofRowKind::Ridge => &materials.roof_slab,
        };
        let strip = Area::new(footprint.min_x, row.z, footprint.max_x, row.z + 1);
        writer.fill_area(strip, row.y..row.y + 1, block);
    }
    debug!(rows = rows.len(), base_y, "roof built");
    rows.len()
}
