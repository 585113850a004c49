use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod biomes;
mod grid;
mod heightfield;
mod ident;
mod params;
mod render;
mod voxel;

use params::GenParams;

#[derive(Parser, Debug)]
#[command(name = "voxel_landscape")]
#[command(about = "Generate a voxel terrain from Perlin noise and render it to PNG")]
struct Args {
    /// Terrain edge length (the grid is size x size columns)
    #[arg(short = 'n', long, default_value = "100")]
    size: usize,

    /// Maximum terrain height after normalization
    #[arg(short = 'f', long, default_value = "50")]
    height_factor: u32,

    /// Number of noise octaves (more = finer detail)
    #[arg(short, long, default_value = "5")]
    octaves: u32,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Water level as a fraction of the max height (0.0 - 1.0)
    #[arg(short, long, default_value = "0.2")]
    water_level: f64,

    /// Output path (default: voxel_landscape_<id>.png)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Explicit seeded RNG rather than ambient global state; the run seed
    // drives the noise field deterministically.
    let seed = args
        .seed
        .unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());

    let params = GenParams {
        size: args.size,
        height_factor: args.height_factor,
        octaves: args.octaves,
        seed: Some(seed),
        water_level: args.water_level,
    };
    if let Err(e) = params.validate() {
        eprintln!("Invalid parameters: {}", e);
        process::exit(1);
    }

    let output = args.output.unwrap_or_else(|| {
        let unique_id = ident::generate_unique_id(&params);
        PathBuf::from(format!("voxel_landscape_{}.png", unique_id))
    });

    println!("Generating voxel landscape with seed: {}", seed);
    println!(
        "Terrain: {0}x{0}, height factor {1}, {2} octaves",
        params.size, params.height_factor, params.octaves
    );

    println!("Generating heightfield...");
    let field =
        heightfield::generate_heightfield(params.size, params.height_factor, params.octaves, seed);
    println!("Max terrain height: {}", field.max_height);

    println!("Rasterizing voxels...");
    let voxels = voxel::rasterize(&field);
    let total: usize = field
        .heights
        .iter()
        .map(|(_, _, &h)| h as usize + 1)
        .sum();
    println!(
        "Voxel grid: {0}x{0}x{1} ({2} cells filled)",
        voxels.size, voxels.depth, total
    );

    println!("Applying biome colors...");
    let colors = biomes::colorize(&field, params.water_level);
    let water_line = (f64::from(field.max_height) * params.water_level).floor() as u32;
    let submerged = field
        .heights
        .iter()
        .filter(|&(_, _, &h)| h <= water_line)
        .count();
    println!(
        "Water line at z = {} ({:.1}% of columns submerged)",
        water_line,
        100.0 * submerged as f64 / (params.size * params.size) as f64
    );

    println!("Rendering...");
    match render::render_to_file(&voxels, &colors, &output) {
        Ok((width, height)) => {
            println!("Saved {} ({}x{} pixels)", output.display(), width, height);
        }
        Err(e) => {
            eprintln!("Failed to save image: {}", e);
            process::exit(1);
        }
    }
}
