// Data-driven generator configuration.
//
// All tunable layout constants and every material live in `GenConfig`,
// which can be loaded from JSON. The stages never use magic numbers for
// anything a user might want to change; they read from the config.
// `Default` carries the canonical homestead: a 14..=16 by 12..=14
// footprint, a 6-cell margin, 4-high mossy cobblestone walls, a spruce
// roof and an oak fence.
//
// Materials are grouped into `Materials`, with the furniture set split out
// into `Furniture`. A `Palette` is an ordered list of alternatives; the
// floor palette is sampled once per run, the flora palette once per planted
// cell.
//
// `validate()` enforces the documented preconditions of the layout: the
// interior furniture offsets assume width >= 14 and depth >= 12, palettes
// must be non-empty and the flora chance must be a probability.
//
// See also: `generate.rs`, which validates the config before a run, and
// `main.rs`, which loads it from `--config`.

use crate::error::GenError;
use crate::prng::GenRng;
use crate::types::BlockSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest footprint width the interior layout supports.
pub const MIN_WIDTH: i32 = 14;
/// Smallest footprint depth the interior layout supports.
pub const MIN_DEPTH: i32 = 12;

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

/// Ordered set of interchangeable blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<BlockSpec>);

impl Palette {
    pub fn of(ids: &[&str]) -> Self {
        Self(ids.iter().map(|id| BlockSpec::new(*id)).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pick one entry uniformly. `None` only for an empty palette.
    pub fn pick(&self, rng: &mut GenRng) -> Option<&BlockSpec> {
        rng.choose(&self.0)
    }
}

/// Furniture blocks placed by the interior composer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Furniture {
    pub sofa_seat: BlockSpec,
    pub sofa_back: BlockSpec,
    pub display: BlockSpec,
    pub bench: BlockSpec,
    pub crafting: BlockSpec,
    pub furnace: BlockSpec,
    pub smoker: BlockSpec,
    pub barrel: BlockSpec,
    pub bed: BlockSpec,
}

impl Default for Furniture {
    fn default() -> Self {
        Self {
            sofa_seat: BlockSpec::new("dark_oak_stairs"),
            sofa_back: BlockSpec::new("red_wool"),
            display: BlockSpec::new("black_concrete"),
            bench: BlockSpec::new("oak_stairs"),
            crafting: BlockSpec::new("crafting_table"),
            furnace: BlockSpec::new("furnace"),
            smoker: BlockSpec::new("smoker"),
            barrel: BlockSpec::new("barrel"),
            bed: BlockSpec::new("orange_bed"),
        }
    }
}

/// Every block the generator places. Oriented blocks are stored without
/// their facing; the stages add it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Materials {
    pub floor_palette: Palette,
    pub wall: BlockSpec,
    pub ground_cover: BlockSpec,
    pub light: BlockSpec,
    pub door: BlockSpec,
    pub roof_stair: BlockSpec,
    pub roof_slab: BlockSpec,
    pub fence: BlockSpec,
    pub gate: BlockSpec,
    pub path: BlockSpec,
    pub trunk: BlockSpec,
    pub leaves: BlockSpec,
    pub flora_palette: Palette,
    pub furniture: Furniture,
}

impl Default for Materials {
    fn default() -> Self {
        Self {
            floor_palette: Palette::of(&["quartz_block", "polished_andesite", "smooth_stone"]),
            wall: BlockSpec::new("mossy_cobblestone"),
            ground_cover: BlockSpec::new("grass_block"),
            light: BlockSpec::new("glowstone"),
            door: BlockSpec::new("oak_door"),
            roof_stair: BlockSpec::new("spruce_stairs"),
            roof_slab: BlockSpec::new("spruce_slab").with_state("type", "bottom"),
            fence: BlockSpec::new("oak_fence"),
            gate: BlockSpec::new("oak_fence_gate"),
            path: BlockSpec::new("cobblestone"),
            trunk: BlockSpec::new("stripped_spruce_log"),
            leaves: BlockSpec::new("oak_leaves"),
            flora_palette: Palette::of(&["poppy", "dandelion", "blue_orchid", "flower_pot"]),
            furniture: Furniture::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level generator configuration. Loaded once, never mutated by a run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenConfig {
    /// Cells of yard between the footprint and the fence on every side.
    pub margin: i32,

    /// Inclusive range the footprint width (X) is drawn from.
    pub width_range: (i32, i32),

    /// Inclusive range the footprint depth (Z) is drawn from.
    pub depth_range: (i32, i32),

    /// Number of wall layers, counting the floor layer. The ceiling cap sits
    /// directly above the walls and the roof one layer above the cap.
    pub wall_height: i32,

    /// Layers cleared to air over the property, starting at ground level.
    pub clear_height: i32,

    /// How far the access path runs south of the fence line.
    pub path_reach: i32,

    /// Empty columns between the garden's east edge and the west wall.
    pub garden_gap: i32,

    /// Garden extent in X.
    pub garden_width: i32,

    /// Inset of the garden from the footprint's south and north walls.
    pub garden_inset: i32,

    /// Probability that a garden cell gets a flower.
    pub flora_chance: f64,

    /// Offset of the decorative tree from the footprint's east wall (X) and
    /// south wall (Z).
    pub tree_offset: (i32, i32),

    /// Number of log layers in the tree trunk.
    pub tree_trunk_height: i32,

    pub materials: Materials,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            margin: 6,
            width_range: (14, 16),
            depth_range: (12, 14),
            wall_height: 4,
            clear_height: 20,
            path_reach: 5,
            garden_gap: 1,
            garden_width: 4,
            garden_inset: 2,
            flora_chance: 0.2,
            tree_offset: (2, 2),
            tree_trunk_height: 5,
            materials: Materials::default(),
        }
    }
}

impl GenConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Largest property (width, depth) any roll can produce, before
    /// clipping against the target area.
    pub fn max_property_extent(&self) -> (i32, i32) {
        (
            self.width_range.1 + 2 * self.margin,
            self.depth_range.1 + 2 * self.margin,
        )
    }

    /// Check the layout preconditions.
    pub fn validate(&self) -> Result<(), GenError> {
        let invalid = |msg: String| Err(GenError::InvalidConfig(msg));
        let (w_lo, w_hi) = self.width_range;
        let (d_lo, d_hi) = self.depth_range;
        if w_lo > w_hi || d_lo > d_hi {
            return invalid(format!(
                "inverted dimension range: width {w_lo}..={w_hi}, depth {d_lo}..={d_hi}"
            ));
        }
        if w_lo < MIN_WIDTH || d_lo < MIN_DEPTH {
            return invalid(format!(
                "footprint must be at least {MIN_WIDTH}x{MIN_DEPTH}, got {w_lo}x{d_lo}"
            ));
        }
        if self.margin < 1 {
            return invalid(format!("margin must leave room for the fence, got {}", self.margin));
        }
        if self.wall_height < 4 {
            return invalid(format!(
                "wall height must fit a 3-high door under the ceiling, got {}",
                self.wall_height
            ));
        }
        if self.clear_height < 0 || self.path_reach < 0 || self.tree_trunk_height < 0 {
            return invalid("heights and reaches must be non-negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.flora_chance) {
            return invalid(format!(
                "flora chance must be within [0, 1], got {}",
                self.flora_chance
            ));
        }
        if self.materials.floor_palette.is_empty() {
            return invalid("floor palette is empty".to_string());
        }
        if self.materials.flora_palette.is_empty() {
            return invalid("flora palette is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GenConfig::default().validate().unwrap();
    }

    #[test]
    fn default_config_roundtrips_through_json() {
        let config = GenConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored = GenConfig::from_json(&json).unwrap();
        assert_eq!(restored.margin, 6);
        assert_eq!(restored.width_range, (14, 16));
        assert_eq!(restored.depth_range, (12, 14));
        assert_eq!(restored.materials.floor_palette.0.len(), 3);
        assert_eq!(restored.materials.roof_slab.state("type"), Some("bottom"));
    }

    #[test]
    fn palette_serializes_as_plain_list() {
        let json = serde_json::to_string(&Palette::of(&["poppy"])).unwrap();
        assert_eq!(json, r#"[{"id":"poppy"}]"#);
    }

    #[test]
    fn undersized_footprint_is_rejected() {
        let config = GenConfig {
            width_range: (10, 16),
            ..GenConfig::default()
        };
        assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = GenConfig {
            depth_range: (14, 12),
            ..GenConfig::default()
        };
        assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
    }

    #[test]
    fn bad_flora_chance_is_rejected() {
        let config = GenConfig {
            flora_chance: 1.5,
            ..GenConfig::default()
        };
        assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let mut config = GenConfig::default();
        config.materials.flora_palette = Palette(Vec::new());
        assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GenConfig::from_json("{ \"margin\": "),
            Err(GenError::Json(_))
        ));
    }

    #[test]
    fn max_property_extent_uses_upper_bounds() {
        assert_eq!(GenConfig::default().max_property_extent(), (28, 26));
    }

    #[test]
    fn palette_pick_is_deterministic() {
        let palette = GenConfig::default().materials.floor_palette;
        let mut a = GenRng::new(3);
        let mut b = GenRng::new(3);
        for _ in 0..20 {
            assert_eq!(palette.pick(&mut a), palette.pick(&mut b));
        }
    }
}
