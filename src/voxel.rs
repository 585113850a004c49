use crate::grid::Grid3;
use crate::heightfield::Heightfield;

/// Occupancy grid produced by extruding a heightfield.
///
/// Each (x, y) column is a solid stack from z = 0 up to the column's
/// terrain height inclusive; no overhangs or caves are representable.
pub type VoxelGrid = Grid3<bool>;

/// Extrude the heightfield into a 3D occupancy grid.
///
/// The z-extent is exactly `max_height + 1`, just enough to hold the
/// tallest column.
pub fn rasterize(field: &Heightfield) -> VoxelGrid {
    let size = field.size();
    let depth = field.max_height as usize + 1;
    let mut voxels = Grid3::new_with(size, depth, false);

    for y in 0..size {
        for x in 0..size {
            let height = field.height(x, y) as usize;
            voxels.column_mut(x, y)[..=height].fill(true);
        }
    }

    voxels
}
