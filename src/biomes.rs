use crate::grid::Grid3;
use crate::heightfield::Heightfield;

/// Color slots for empty cells; the renderer never reads them.
const UNSET: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Elevation band a voxel belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Biome {
    Water,
    Beach,
    Plain,
    Forest,
    Mountain,
    Snow,
}

impl Biome {
    /// RGBA color for this band, components in [0, 1].
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Biome::Water => [0.0, 0.4, 0.8, 0.8],    // Deep blue
            Biome::Beach => [0.9, 0.8, 0.6, 1.0],    // Beige
            Biome::Plain => [0.4, 0.8, 0.4, 1.0],    // Light green
            Biome::Forest => [0.0, 0.5, 0.2, 1.0],   // Dark green
            Biome::Mountain => [0.5, 0.5, 0.5, 1.0], // Gray
            Biome::Snow => [1.0, 1.0, 1.0, 1.0],     // White
        }
    }
}

/// Band boundaries computed once from the global max height.
///
/// All columns share the same absolute thresholds, so a tall column can
/// pass through every band from water to snow.
#[derive(Clone, Copy, Debug)]
pub struct BandThresholds {
    water_height: u32,
    plain: f64,
    forest: f64,
    mountain: f64,
}

impl BandThresholds {
    pub fn new(max_height: u32, water_level: f64) -> Self {
        let max = f64::from(max_height);
        Self {
            water_height: (max * water_level).floor() as u32,
            plain: max * 0.4,
            forest: max * 0.6,
            mountain: max * 0.8,
        }
    }

    /// Classify a z-level by the first matching band.
    ///
    /// The cascade is ordered, not a disjoint range split: the beach band
    /// is exactly one z-level above the water line.
    pub fn classify(&self, z: u32) -> Biome {
        if z <= self.water_height {
            Biome::Water
        } else if z <= self.water_height + 1 {
            Biome::Beach
        } else if f64::from(z) <= self.plain {
            Biome::Plain
        } else if f64::from(z) <= self.forest {
            Biome::Forest
        } else if f64::from(z) <= self.mountain {
            Biome::Mountain
        } else {
            Biome::Snow
        }
    }
}

/// RGBA grid co-shaped with the voxel grid.
pub type ColorGrid = Grid3<[f32; 4]>;

/// Assign a biome color to every occupied cell.
///
/// Pure function of the heightfield and water level; cells above a
/// column's height keep a transparent fill and are don't-care.
pub fn colorize(field: &Heightfield, water_level: f64) -> ColorGrid {
    let size = field.size();
    let depth = field.max_height as usize + 1;
    let thresholds = BandThresholds::new(field.max_height, water_level);

    let mut colors = Grid3::new_with(size, depth, UNSET);
    for y in 0..size {
        for x in 0..size {
            let height = field.height(x, y);
            for z in 0..=height {
                colors.set(x, y, z as usize, thresholds.classify(z).rgba());
            }
        }
    }

    colors
}
