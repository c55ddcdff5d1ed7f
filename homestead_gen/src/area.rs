// Axis-aligned horizontal rectangles used for region planning.
//
// An `Area` covers columns `x in [min_x, max_x)` and `z in [min_z, max_z)`.
// Every sub-region of a homestead (footprint, property, garden, path
// segments, entrance) is an `Area`. Clipping is min/max saturation, never
// rejection: an operation that would invert a rectangle collapses it to an
// empty one instead (`max == min` on the offending axis), and stages skip
// empty areas rather than erroring.
//
// See also: `plan.rs`, which derives every area of a homestead once, and
// `world.rs` for `VoxelWriter::fill_area`, which extrudes an area into a
// box of voxels.

use serde::{Deserialize, Serialize};

/// Half-open horizontal rectangle. Invariant: `min_x <= max_x` and
/// `min_z <= max_z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl Area {
    /// Build an area from its bounds. An inverted axis saturates to empty.
    pub fn new(min_x: i32, min_z: i32, max_x: i32, max_z: i32) -> Self {
        Self {
            min_x,
            min_z,
            max_x: max_x.max(min_x),
            max_z: max_z.max(min_z),
        }
    }

    /// Area of `width` by `depth` columns whose min corner is `(x, z)`.
    pub fn from_origin(x: i32, z: i32, width: i32, depth: i32) -> Self {
        Self::new(x, z, x + width, z + depth)
    }

    /// A single row of `depth` 1 along the south edge of `self`.
    pub fn south_row(&self) -> Self {
        Self::new(self.min_x, self.min_z, self.max_x, self.min_z + 1)
    }

    /// A single row of `depth` 1 along the north edge of `self`.
    pub fn north_row(&self) -> Self {
        Self::new(self.min_x, self.max_z - 1, self.max_x, self.max_z)
    }

    /// A single column of `width` 1 along the west edge of `self`.
    pub fn west_column(&self) -> Self {
        Self::new(self.min_x, self.min_z, self.min_x + 1, self.max_z)
    }

    /// A single column of `width` 1 along the east edge of `self`.
    pub fn east_column(&self) -> Self {
        Self::new(self.max_x - 1, self.min_z, self.max_x, self.max_z)
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_z >= self.max_z
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> i32 {
        self.max_z - self.min_z
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.depth() as usize
        }
    }

    /// X midpoint rounded toward negative infinity.
    pub fn center_x(&self) -> i32 {
        (self.min_x + self.max_x).div_euclid(2)
    }

    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.min_x && x < self.max_x && z >= self.min_z && z < self.max_z
    }

    /// True if every column of `other` is inside `self`. An empty `other`
    /// is contained in anything.
    pub fn contains_area(&self, other: &Area) -> bool {
        other.is_empty()
            || (other.min_x >= self.min_x
                && other.max_x <= self.max_x
                && other.min_z >= self.min_z
                && other.max_z <= self.max_z)
    }

    /// Clip `self` to `other`.
    pub fn intersect(&self, other: &Area) -> Area {
        Area::new(
            self.min_x.max(other.min_x),
            self.min_z.max(other.min_z),
            self.max_x.min(other.max_x),
            self.max_z.min(other.max_z),
        )
    }

    pub fn overlaps(&self, other: &Area) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Grow by `n` columns on all four sides.
    pub fn expand(&self, n: i32) -> Area {
        Area::new(
            self.min_x - n,
            self.min_z - n,
            self.max_x + n,
            self.max_z + n,
        )
    }

    /// Shrink by `n` columns on all four sides, collapsing to empty when the
    /// area is too small.
    pub fn shrink(&self, n: i32) -> Area {
        Area::new(
            self.min_x + n,
            self.min_z + n,
            self.max_x - n,
            self.max_z - n,
        )
    }

    /// Iterate columns as `(x, z)`, x-major then z.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let (min_z, max_z) = (self.min_z, self.max_z);
        (self.min_x..self.max_x).flat_map(move |x| (min_z..max_z).map(move |z| (x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_saturate_to_empty() {
        let a = Area::new(5, 5, 2, 9);
        assert!(a.is_empty());
        assert_eq!(a.width(), 0);
        assert_eq!(a.len(), 0);
        assert_eq!(a.cells().count(), 0);
    }

    #[test]
    fn from_origin_dimensions() {
        let a = Area::from_origin(10, 20, 14, 12);
        assert_eq!(a.width(), 14);
        assert_eq!(a.depth(), 12);
        assert_eq!(a.len(), 168);
        assert!(a.contains(10, 20));
        assert!(a.contains(23, 31));
        assert!(!a.contains(24, 31));
        assert!(!a.contains(23, 32));
    }

    #[test]
    fn intersect_and_overlap() {
        let a = Area::new(0, 0, 10, 10);
        let b = Area::new(5, -5, 15, 3);
        assert_eq!(a.intersect(&b), Area::new(5, 0, 10, 3));
        assert!(a.overlaps(&b));

        // Touching edges do not overlap in a half-open world.
        let c = Area::new(10, 0, 12, 10);
        assert!(!a.overlaps(&c));
        assert!(a.intersect(&c).is_empty());
    }

    #[test]
    fn expand_then_shrink_is_identity() {
        let a = Area::from_origin(3, 4, 14, 12);
        assert_eq!(a.expand(6).shrink(6), a);
        assert_eq!(a.expand(6).width(), 26);
        assert_eq!(a.expand(6).depth(), 24);
    }

    #[test]
    fn shrink_collapses_small_areas() {
        let a = Area::from_origin(0, 0, 2, 8);
        assert!(a.shrink(1).is_empty());
        assert!(a.shrink(5).is_empty());
    }

    #[test]
    fn center_rounds_down_for_negative_coords() {
        assert_eq!(Area::new(-7, 0, 0, 1).center_x(), -4);
        assert_eq!(Area::new(0, 0, 26, 1).center_x(), 13);
        assert_eq!(Area::new(0, 0, 25, 1).center_x(), 12);
    }

    #[test]
    fn edge_strips() {
        let a = Area::from_origin(0, 0, 4, 3);
        assert_eq!(a.south_row(), Area::new(0, 0, 4, 1));
        assert_eq!(a.north_row(), Area::new(0, 2, 4, 3));
        assert_eq!(a.west_column(), Area::new(0, 0, 1, 3));
        assert_eq!(a.east_column(), Area::new(3, 0, 4, 3));
    }

    #[test]
    fn contains_area_handles_empty() {
        let outer = Area::new(0, 0, 50, 50);
        assert!(outer.contains_area(&Area::new(0, 0, 50, 50)));
        assert!(!outer.contains_area(&Area::new(-1, 0, 50, 50)));
        assert!(outer.contains_area(&Area::new(100, 100, 100, 100)));
    }

    #[test]
    fn cells_order_is_x_major() {
        let cells: Vec<_> = Area::from_origin(0, 0, 2, 2).cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
