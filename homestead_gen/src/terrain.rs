// Terrain height queries.
//
// The generator reads terrain through `TerrainQuery`, which reports the
// elevation of the highest solid block of a column. Lookups outside the
// source's valid index window return `None`; the site selector turns that
// into `GenError::SiteOutOfBounds`.
//
// `HeightMap` is the in-memory source: a dense grid of elevations whose
// first column sits at `(origin_x, origin_z)`. Indexing is
// `(x - origin_x) + (z - origin_z) * size_x`.

use crate::area::Area;
use serde::{Deserialize, Serialize};

/// Per-column ground elevation lookup.
pub trait TerrainQuery {
    /// Elevation of the highest solid block at column `(x, z)`, or `None`
    /// when the column lies outside the data.
    fn ground_height(&self, x: i32, z: i32) -> Option<i32>;
}

/// Dense per-column elevation grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightMap {
    pub origin_x: i32,
    pub origin_z: i32,
    pub size_x: u32,
    pub size_z: u32,
    heights: Vec<i32>,
}

impl HeightMap {
    /// A height map where every column has elevation `ground`.
    pub fn flat(origin_x: i32, origin_z: i32, size_x: u32, size_z: u32, ground: i32) -> Self {
        Self::from_fn(origin_x, origin_z, size_x, size_z, |_, _| ground)
    }

    /// Build a height map by evaluating `f(x, z)` at every world column.
    pub fn from_fn(
        origin_x: i32,
        origin_z: i32,
        size_x: u32,
        size_z: u32,
        f: impl Fn(i32, i32) -> i32,
    ) -> Self {
        let mut heights = Vec::with_capacity(size_x as usize * size_z as usize);
        for dz in 0..size_z as i32 {
            for dx in 0..size_x as i32 {
                heights.push(f(origin_x + dx, origin_z + dz));
            }
        }
        Self {
            origin_x,
            origin_z,
            size_x,
            size_z,
            heights,
        }
    }

    /// The columns this map has data for.
    pub fn area(&self) -> Area {
        Area::from_origin(
            self.origin_x,
            self.origin_z,
            self.size_x as i32,
            self.size_z as i32,
        )
    }
}

impl TerrainQuery for HeightMap {
    fn ground_height(&self, x: i32, z: i32) -> Option<i32> {
        let local_x = i64::from(x) - i64::from(self.origin_x);
        let local_z = i64::from(z) - i64::from(self.origin_z);
        if !(0..i64::from(self.size_x)).contains(&local_x)
            || !(0..i64::from(self.size_z)).contains(&local_z)
        {
            return None;
        }
        let idx = local_x as usize + local_z as usize * self.size_x as usize;
        self.heights.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_map_reports_ground_everywhere_inside() {
        let map = HeightMap::flat(0, 0, 50, 50, 64);
        assert_eq!(map.ground_height(0, 0), Some(64));
        assert_eq!(map.ground_height(49, 49), Some(64));
    }

    #[test]
    fn out_of_window_is_none() {
        let map = HeightMap::flat(100, -20, 10, 10, 64);
        assert_eq!(map.ground_height(99, -20), None);
        assert_eq!(map.ground_height(110, -20), None);
        assert_eq!(map.ground_height(100, -21), None);
        assert_eq!(map.ground_height(100, -10), None);
        assert_eq!(map.ground_height(109, -11), Some(64));
    }

    #[test]
    fn from_fn_uses_world_coordinates() {
        let map = HeightMap::from_fn(10, 20, 4, 4, |x, z| x + z);
        assert_eq!(map.ground_height(10, 20), Some(30));
        assert_eq!(map.ground_height(13, 21), Some(34));
    }

    #[test]
    fn area_matches_window() {
        let map = HeightMap::flat(-5, 7, 3, 2, 0);
        assert_eq!(map.area(), Area::new(-5, 7, -2, 9));
    }
}
