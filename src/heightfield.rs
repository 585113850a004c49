use noise::{NoiseFn, Perlin, Seedable};

use crate::grid::Grid2;

// fBm shaping constants, shared by every octave stack
const PERSISTENCE: f64 = 0.5;
const LACUNARITY: f64 = 2.0;

/// A normalized integer elevation grid.
///
/// Every value lies in `[0, height_factor]`; `max_height` is the tallest
/// cell actually present and defines the z-extent downstream.
pub struct Heightfield {
    pub heights: Grid2<u32>,
    pub max_height: u32,
}

impl Heightfield {
    pub fn size(&self) -> usize {
        self.heights.size
    }

    pub fn height(&self, x: usize, y: usize) -> u32 {
        *self.heights.get(x, y)
    }
}

/// Generate a heightfield from multi-octave Perlin noise.
///
/// Sampling is a two-pass process: raw noise is collected for the whole
/// grid first, then min-max normalized against the observed extremes and
/// scaled to `[0, height_factor]`. Heights therefore depend on the full
/// grid, not just their own cell.
///
/// A perfectly flat noise field (min == max) normalizes to an all-zero
/// heightfield instead of dividing by zero.
pub fn generate_heightfield(
    size: usize,
    height_factor: u32,
    octaves: u32,
    seed: u64,
) -> Heightfield {
    let terrain_noise = Perlin::new(1).set_seed(seed as u32);

    // Pass 1: raw noise samples at normalized coordinates
    let mut raw = Grid2::new_with(size, 0.0f64);
    let mut min_v = f64::MAX;
    let mut max_v = f64::MIN;
    for y in 0..size {
        for x in 0..size {
            let nx = x as f64 / size as f64;
            let ny = y as f64 / size as f64;
            let v = fbm(&terrain_noise, nx, ny, octaves, PERSISTENCE, LACUNARITY);
            debug_assert!(v.is_finite());
            if v < min_v {
                min_v = v;
            }
            if v > max_v {
                max_v = v;
            }
            raw.set(x, y, v);
        }
    }

    // Pass 2: min-max normalize and scale to integer heights
    let range = max_v - min_v;
    let mut heights = Grid2::new_with(size, 0u32);
    let mut max_height = 0u32;
    if range > 0.0 {
        for y in 0..size {
            for x in 0..size {
                let t = (*raw.get(x, y) - min_v) / range;
                let h = (t * f64::from(height_factor)).floor() as u32;
                if h > max_height {
                    max_height = h;
                }
                heights.set(x, y, h);
            }
        }
    }

    Heightfield {
        heights,
        max_height,
    }
}

/// Fractional Brownian Motion noise, normalized to roughly [-1, 1].
fn fbm(
    noise: &impl NoiseFn<f64, 2>,
    x: f64,
    y: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += amplitude * noise.get([x * frequency, y * frequency]);
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total / max_value
}
