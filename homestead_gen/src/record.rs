// Recording voxel writers.
//
// `WriteLog` implements `VoxelWriter` by appending every operation, in issue
// order, instead of applying it. Two generation runs are identical exactly
// when their logs are equal, which is what the determinism tests compare.
// A log can be replayed into any other writer and serialized to JSON (the
// CLI's `--dump-writes`).
//
// `Tee` forwards each write to two writers, so a run can be recorded and
// applied to a `VoxelWorld` at the same time.

use std::path::Path;

use crate::error::GenError;
use crate::types::{BlockSpec, VoxelCoord};
use crate::world::{VoxelWriter, normalize_box};
use serde::{Deserialize, Serialize};

/// One recorded write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteOp {
    Cell {
        pos: VoxelCoord,
        block: BlockSpec,
    },
    /// Half-open box with already-normalized corners.
    Box {
        min: VoxelCoord,
        max: VoxelCoord,
        block: BlockSpec,
    },
}

impl WriteOp {
    pub fn block(&self) -> &BlockSpec {
        match self {
            WriteOp::Cell { block, .. } | WriteOp::Box { block, .. } => block,
        }
    }
}

/// Ordered record of every write issued by a generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteLog {
    pub ops: Vec<WriteOp>,
}

impl WriteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply every recorded operation, in order, to `target`.
    pub fn replay<W: VoxelWriter + ?Sized>(&self, target: &mut W) {
        for op in &self.ops {
            match op {
                WriteOp::Cell { pos, block } => target.write_cell(*pos, block),
                WriteOp::Box { min, max, block } => target.write_box(*min, *max, block),
            }
        }
    }

    /// Write the log to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), GenError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Operations whose block has the given id.
    pub fn ops_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a WriteOp> + 'a {
        self.ops.iter().filter(move |op| op.block().id == id)
    }

    /// Number of individual voxels touched by the log, counting overwrites.
    pub fn voxel_writes(&self) -> u64 {
        self.ops
            .iter()
            .map(|op| match op {
                WriteOp::Cell { .. } => 1,
                WriteOp::Box { min, max, .. } => {
                    let dx = u64::from((max.x - min.x).unsigned_abs());
                    let dy = u64::from((max.y - min.y).unsigned_abs());
                    let dz = u64::from((max.z - min.z).unsigned_abs());
                    dx * dy * dz
                }
            })
            .sum()
    }
}

impl VoxelWriter for WriteLog {
    fn write_cell(&mut self, pos: VoxelCoord, block: &BlockSpec) {
        self.ops.push(WriteOp::Cell {
            pos,
            block: block.clone(),
        });
    }

    fn write_box(&mut self, a: VoxelCoord, b: VoxelCoord, block: &BlockSpec) {
        let (min, max) = normalize_box(a, b);
        self.ops.push(WriteOp::Box {
            min,
            max,
            block: block.clone(),
        });
    }
}

/// Forwards every write to both `first` and `second`, in that order.
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: VoxelWriter, B: VoxelWriter> VoxelWriter for Tee<A, B> {
    fn write_cell(&mut self, pos: VoxelCoord, block: &BlockSpec) {
        self.first.write_cell(pos, block);
        self.second.write_cell(pos, block);
    }

    fn write_box(&mut self, a: VoxelCoord, b: VoxelCoord, block: &BlockSpec) {
        self.first.write_box(a, b, block);
        self.second.write_box(a, b, block);
    }
}
