//! Isometric voxel renderer.
//!
//! Rasterizes the voxel grid and its color grid into a single static PNG:
//! painter's algorithm back-to-front over columns, three faces per exposed
//! voxel, side faces darkened for depth cueing.

use std::error::Error;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::biomes::ColorGrid;
use crate::voxel::VoxelGrid;

// Projected cube dimensions in pixels
const HALF_W: i32 = 8; // half-width of the top diamond
const HALF_H: i32 = 4; // half-height of the top diamond
const Z_STEP: i32 = 8; // vertical pixel rise per z-level
const MARGIN: i32 = 16;

// Face brightness multipliers
const LEFT_SHADE: f32 = 0.70;
const RIGHT_SHADE: f32 = 0.50;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const EDGE: [f32; 4] = [0.0, 0.0, 0.0, 0.35];

/// Render the voxel grid to an image and write it as PNG.
///
/// The voxel and color grids must be co-shaped. Returns the image
/// dimensions; I/O failures surface to the caller.
pub fn render_to_file(
    voxels: &VoxelGrid,
    colors: &ColorGrid,
    path: &Path,
) -> Result<(u32, u32), Box<dyn Error>> {
    let img = render_image(voxels, colors);
    let dims = img.dimensions();
    img.save(path)?;
    Ok(dims)
}

/// Rasterize the voxel grid into an RGBA image buffer.
pub fn render_image(voxels: &VoxelGrid, colors: &ColorGrid) -> RgbaImage {
    let size = voxels.size as i32;
    let depth = voxels.depth as i32;

    // Projection origin chosen so every cube lands inside the canvas
    let origin_x = size * HALF_W + MARGIN;
    let origin_y = (depth - 1) * Z_STEP + HALF_H + MARGIN;
    let width = (2 * size * HALF_W + 2 * MARGIN) as u32;
    let height = (origin_y + (2 * size - 1) * HALF_H + Z_STEP + MARGIN) as u32;

    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    // Back-to-front: columns by x + y, then bottom-up within each column
    for sum in 0..(2 * size - 1) {
        for x in 0..size {
            let y = sum - x;
            if y < 0 || y >= size {
                continue;
            }
            let (xu, yu) = (x as usize, y as usize);
            for z in 0..depth {
                let zu = z as usize;
                if !*voxels.get(xu, yu, zu) {
                    continue;
                }

                let top_exposed = z + 1 >= depth || !*voxels.get(xu, yu, zu + 1);
                let right_exposed = x + 1 >= size || !*voxels.get(xu + 1, yu, zu);
                let left_exposed = y + 1 >= size || !*voxels.get(xu, yu + 1, zu);
                if !top_exposed && !right_exposed && !left_exposed {
                    continue;
                }

                let color = *colors.get(xu, yu, zu);
                let cx = origin_x + (x - y) * HALF_W;
                let cy = origin_y + (x + y) * HALF_H - z * Z_STEP;
                draw_cube(
                    &mut img,
                    cx,
                    cy,
                    color,
                    top_exposed,
                    right_exposed,
                    left_exposed,
                );
            }
        }
    }

    img
}

/// Draw the visible faces of one cube whose top-face center projects
/// to (cx, cy).
fn draw_cube(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    color: [f32; 4],
    top: bool,
    right: bool,
    left: bool,
) {
    let n = (cx, cy - HALF_H);
    let e = (cx + HALF_W, cy);
    let s = (cx, cy + HALF_H);
    let w = (cx - HALF_W, cy);

    if left {
        let quad = [w, s, (s.0, s.1 + Z_STEP), (w.0, w.1 + Z_STEP)];
        fill_quad(img, &quad, shade(color, LEFT_SHADE));
    }
    if right {
        let quad = [s, e, (e.0, e.1 + Z_STEP), (s.0, s.1 + Z_STEP)];
        fill_quad(img, &quad, shade(color, RIGHT_SHADE));
    }
    if top {
        fill_quad(img, &[n, e, s, w], color);
        // Faint cube edges so adjacent same-color voxels stay distinguishable
        draw_line(img, n, e, EDGE);
        draw_line(img, e, s, EDGE);
        draw_line(img, s, w, EDGE);
        draw_line(img, w, n, EDGE);
    }
}

fn shade(color: [f32; 4], factor: f32) -> [f32; 4] {
    [
        color[0] * factor,
        color[1] * factor,
        color[2] * factor,
        color[3],
    ]
}

/// Scanline-fill a convex quad given in screen coordinates.
fn fill_quad(img: &mut RgbaImage, pts: &[(i32, i32); 4], color: [f32; 4]) {
    let min_y = pts.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = pts.iter().map(|p| p.1).max().unwrap_or(0);

    for y in min_y..=max_y {
        let mut min_x = i32::MAX;
        let mut max_x = i32::MIN;
        for i in 0..4 {
            let (x0, y0) = pts[i];
            let (x1, y1) = pts[(i + 1) % 4];
            if y0 == y1 {
                if y == y0 {
                    min_x = min_x.min(x0.min(x1));
                    max_x = max_x.max(x0.max(x1));
                }
                continue;
            }
            let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
            if y < lo || y > hi {
                continue;
            }
            let t = f64::from(y - y0) / f64::from(y1 - y0);
            let x = f64::from(x0) + t * f64::from(x1 - x0);
            let x = x.round() as i32;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }
        if min_x > max_x {
            continue;
        }
        for x in min_x..=max_x {
            blend_pixel(img, x, y, color);
        }
    }
}

/// Bresenham line with alpha blending.
fn draw_line(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: [f32; 4]) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        blend_pixel(img, x, y, color);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Source-over blend of an [0, 1] RGBA color onto the buffer.
fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: [f32; 4]) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let alpha = color[3].clamp(0.0, 1.0);
    for c in 0..3 {
        let src = color[c].clamp(0.0, 1.0) * 255.0;
        let out = src * alpha + f32::from(dst.0[c]) * (1.0 - alpha);
        dst.0[c] = out.round() as u8;
    }
    dst.0[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::colorize;
    use crate::grid::Grid2;
    use crate::heightfield::Heightfield;
    use crate::voxel::rasterize;

    fn small_world() -> (VoxelGrid, ColorGrid) {
        let mut heights = Grid2::new_with(3, 0u32);
        heights.set(1, 1, 4);
        heights.set(2, 2, 2);
        let field = Heightfield {
            heights,
            max_height: 4,
        };
        (rasterize(&field), colorize(&field, 0.2))
    }

    #[test]
    fn test_render_produces_nonempty_image() {
        let (voxels, colors) = small_world();
        let img = render_image(&voxels, &colors);
        assert!(img.width() > 0 && img.height() > 0);
        // Something other than the background must have been drawn.
        assert!(img.pixels().any(|p| *p != BACKGROUND));
    }

    #[test]
    fn test_render_single_column() {
        let field = Heightfield {
            heights: Grid2::new_with(1, 0u32),
            max_height: 0,
        };
        let voxels = rasterize(&field);
        let colors = colorize(&field, 0.2);
        let img = render_image(&voxels, &colors);
        assert!(img.pixels().any(|p| *p != BACKGROUND));
    }

    #[test]
    fn test_blend_ignores_out_of_bounds() {
        let mut img = RgbaImage::from_pixel(4, 4, BACKGROUND);
        blend_pixel(&mut img, -1, 0, [1.0, 0.0, 0.0, 1.0]);
        blend_pixel(&mut img, 0, 10, [1.0, 0.0, 0.0, 1.0]);
        assert!(img.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_opaque_blend_replaces_pixel() {
        let mut img = RgbaImage::from_pixel(2, 2, BACKGROUND);
        blend_pixel(&mut img, 0, 0, [0.0, 0.5, 0.2, 1.0]);
        let p = img.get_pixel(0, 0);
        assert_eq!(p.0, [0, 128, 51, 255]);
    }
}
