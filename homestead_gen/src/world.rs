// Voxel write primitives and the in-memory voxel world.
//
// `VoxelWriter` is the seam between the generator and whatever stores the
// voxels. It has two primitives: an unconditional single-cell overwrite and
// a box fill. The box is half-open (min inclusive, max exclusive) after the
// two corners are normalized per axis, so corners may be passed in any
// order and a box with zero extent on any axis writes nothing. Writes are
// idempotent and the last write to a cell wins; the fence entrance relies
// on overwriting.
//
// `VoxelWorld` is a dense grid implementation with a world-space origin.
// The flat storage is indexed by `x + z * size_x + y * size_x * size_z`
// (relative to the origin) and holds indices into an interned block table,
// so repeated `BlockSpec`s are stored once. Out-of-bounds writes are no-ops
// and reads of never-written cells return `None`.
//
// See also: `record.rs` for `WriteLog`, a writer that records operations
// instead of applying them, and `terrain.rs` for the read-side seam.

use crate::area::Area;
use crate::types::{BlockSpec, VoxelCoord};
use rustc_hash::FxHashMap;
use std::ops::Range;

/// Destination for generated voxels.
pub trait VoxelWriter {
    /// Overwrite one voxel.
    fn write_cell(&mut self, pos: VoxelCoord, block: &BlockSpec);

    /// Fill the half-open box spanned by `a` and `b` with `block`.
    fn write_box(&mut self, a: VoxelCoord, b: VoxelCoord, block: &BlockSpec) {
        let (min, max) = normalize_box(a, b);
        for y in min.y..max.y {
            for z in min.z..max.z {
                for x in min.x..max.x {
                    self.write_cell(VoxelCoord::new(x, y, z), block);
                }
            }
        }
    }

    /// Extrude `area` over the layers `ys` and fill it. Empty areas and
    /// empty layer ranges are skipped without touching the backend.
    fn fill_area(&mut self, area: Area, ys: Range<i32>, block: &BlockSpec) {
        if area.is_empty() || ys.is_empty() {
            return;
        }
        self.write_box(
            VoxelCoord::new(area.min_x, ys.start, area.min_z),
            VoxelCoord::new(area.max_x, ys.end, area.max_z),
            block,
        );
    }
}

impl<W: VoxelWriter + ?Sized> VoxelWriter for &mut W {
    fn write_cell(&mut self, pos: VoxelCoord, block: &BlockSpec) {
        (**self).write_cell(pos, block);
    }

    fn write_box(&mut self, a: VoxelCoord, b: VoxelCoord, block: &BlockSpec) {
        (**self).write_box(a, b, block);
    }
}

/// Sort two box corners per axis into `(min, max)`.
pub fn normalize_box(a: VoxelCoord, b: VoxelCoord) -> (VoxelCoord, VoxelCoord) {
    (
        VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
        VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
    )
}

/// Dense 3D voxel grid anchored at `origin`.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    /// 0 = never written, otherwise 1 + index into `blocks`.
    voxels: Vec<u32>,
    blocks: Vec<BlockSpec>,
    lookup: FxHashMap<BlockSpec, u32>,
    pub origin: VoxelCoord,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl VoxelWorld {
    /// Create an unwritten world covering `origin .. origin + size`.
    pub fn new(origin: VoxelCoord, size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            voxels: vec![0; total],
            blocks: Vec::new(),
            lookup: FxHashMap::default(),
            origin,
            size_x,
            size_y,
            size_z,
        }
    }

    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        let x = i64::from(coord.x) - i64::from(self.origin.x);
        let y = i64::from(coord.y) - i64::from(self.origin.y);
        let z = i64::from(coord.z) - i64::from(self.origin.z);
        if x < 0
            || y < 0
            || z < 0
            || x >= i64::from(self.size_x)
            || y >= i64::from(self.size_y)
            || z >= i64::from(self.size_z)
        {
            return None;
        }
        let sx = self.size_x as usize;
        let sz = self.size_z as usize;
        Some(x as usize + z as usize * sx + y as usize * sx * sz)
    }

    /// Read a voxel. `None` for out-of-bounds or never-written cells.
    pub fn get(&self, coord: VoxelCoord) -> Option<&BlockSpec> {
        let slot = *self.voxels.get(self.index(coord)?)?;
        if slot == 0 {
            None
        } else {
            self.blocks.get(slot as usize - 1)
        }
    }

    /// Block id at `coord`, or `None` if nothing has been written there.
    pub fn id_at(&self, coord: VoxelCoord) -> Option<&str> {
        self.get(coord).map(|b| b.id.as_str())
    }

    /// Write a voxel. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: VoxelCoord, block: &BlockSpec) {
        let Some(i) = self.index(coord) else {
            return;
        };
        let slot = match self.lookup.get(block) {
            Some(&slot) => slot,
            None => {
                self.blocks.push(block.clone());
                let slot = self.blocks.len() as u32;
                self.lookup.insert(block.clone(), slot);
                slot
            }
        };
        self.voxels[i] = slot;
    }

    /// Number of cells currently holding a block with this id.
    pub fn count_of(&self, id: &str) -> usize {
        self.cells_with_id(id).len()
    }

    /// All cells currently holding a block with this id, in storage order.
    pub fn cells_with_id(&self, id: &str) -> Vec<VoxelCoord> {
        let slots: Vec<u32> = self
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.id == id)
            .map(|(i, _)| i as u32 + 1)
            .collect();
        if slots.is_empty() {
            return Vec::new();
        }
        let sx = self.size_x as usize;
        let sz = self.size_z as usize;
        self.voxels
            .iter()
            .enumerate()
            .filter(|(_, v)| slots.contains(v))
            .map(|(i, _)| {
                let x = (i % sx) as i32;
                let z = ((i / sx) % sz) as i32;
                let y = (i / (sx * sz)) as i32;
                self.origin.offset(x, y, z)
            })
            .collect()
    }

    /// Highest written, non-air cell of column `(x, z)`.
    pub fn column_top(&self, x: i32, z: i32) -> Option<i32> {
        let bottom = self.origin.y;
        let top = bottom + self.size_y as i32;
        (bottom..top)
            .rev()
            .find(|&y| self.get(VoxelCoord::new(x, y, z)).is_some_and(|b| !b.is_air()))
    }
}

impl VoxelWriter for VoxelWorld {
    fn write_cell(&mut self, pos: VoxelCoord, block: &BlockSpec) {
        self.set(pos, block);
    }
}
