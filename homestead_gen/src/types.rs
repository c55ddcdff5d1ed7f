// Core types shared across the generator.
//
// Defines the spatial coordinate (`VoxelCoord`), horizontal facings, and the
// symbolic block description (`BlockSpec`) that every stage hands to the
// voxel writer. All types derive `Serialize` and `Deserialize` so configs
// and write logs can be stored as JSON.
//
// The generator never interprets a `BlockSpec` beyond comparing it: the id
// and state strings are passed through to whatever backend consumes them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in voxel units.
///
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: north (positive) / south (negative)
///
/// The dwelling's front door, the fence entrance and the access path all
/// sit on the low-Z (south) side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Horizontal facing of an oriented block (stairs, doors, gates, beds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::South => "south",
            Facing::East => "east",
            Facing::West => "west",
        }
    }
}

// ---------------------------------------------------------------------------
// Block descriptions
// ---------------------------------------------------------------------------

/// A symbolic voxel type plus optional state attributes.
///
/// States are kept in a `BTreeMap` so equality, hashing and the JSON form
/// do not depend on insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<String, String>,
}

impl BlockSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            states: BTreeMap::new(),
        }
    }

    /// The empty block. Clearing a volume writes this.
    pub fn air() -> Self {
        Self::new("air")
    }

    pub fn is_air(&self) -> bool {
        self.id == "air"
    }

    /// Return a copy with `key` set to `value`, replacing any previous value.
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.states.insert(key.into(), value.into());
        self
    }

    /// Return a copy oriented toward `facing`.
    pub fn facing(self, facing: Facing) -> Self {
        self.with_state("facing", facing.as_str())
    }

    pub fn state(&self, key: &str) -> Option<&str> {
        self.states.get(key).map(String::as_str)
    }
}

impl fmt::Display for BlockSpec {
    /// Formats as `id` or `id[key=value,...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.states.is_empty() {
            write!(f, "[")?;
            for (i, (k, v)) in self.states.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_offset() {
        let c = VoxelCoord::new(1, 64, -3);
        assert_eq!(c.offset(2, 1, -1), VoxelCoord::new(3, 65, -4));
    }

    #[test]
    fn coord_ordering_is_total() {
        // Needed for BTreeMap keys.
        let a = VoxelCoord::new(0, 0, 0);
        let b = VoxelCoord::new(1, 0, 0);
        assert!(a < b);
    }

    #[test]
    fn block_states_ignore_insertion_order() {
        let a = BlockSpec::new("oak_door")
            .with_state("half", "lower")
            .facing(Facing::South);
        let b = BlockSpec::new("oak_door")
            .facing(Facing::South)
            .with_state("half", "lower");
        assert_eq!(a, b);
        assert_eq!(a.state("facing"), Some("south"));
        assert_eq!(a.state("half"), Some("lower"));
        assert_eq!(a.state("axis"), None);
    }

    #[test]
    fn block_display() {
        assert_eq!(BlockSpec::new("glowstone").to_string(), "glowstone");
        let stair = BlockSpec::new("spruce_stairs").facing(Facing::North);
        assert_eq!(stair.to_string(), "spruce_stairs[facing=north]");
    }

    #[test]
    fn plain_block_json_omits_states() {
        let json = serde_json::to_string(&BlockSpec::new("cobblestone")).unwrap();
        assert_eq!(json, r#"{"id":"cobblestone"}"#);
        let restored: BlockSpec = serde_json::from_str(r#"{"id":"cobblestone"}"#).unwrap();
        assert_eq!(restored, BlockSpec::new("cobblestone"));
    }

    #[test]
    fn air_is_air() {
        assert!(BlockSpec::air().is_air());
        assert!(!BlockSpec::new("grass_block").is_air());
    }
}
