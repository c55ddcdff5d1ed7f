// CLI entry point for the homestead generator.
//
// Builds a flat test terrain, generates one homestead into an in-memory
// voxel world and prints what was built. The write log can be dumped as
// JSON for replay into another backend.
//
// Usage:
//   homestead [OPTIONS]
//     --seed <N>            PRNG seed (default: 0)
//     --size <N>            Side of the square target area 0..N (default: 64)
//     --ground <Y>          Flat terrain elevation (default: 64)
//     --config <PATH>       JSON GenConfig (default: built-in)
//     --dump-writes <PATH>  Write the ordered write log as JSON
//
// Logging goes through `tracing`; set `RUST_LOG=debug` for per-stage detail.

use std::path::PathBuf;

use homestead_gen::config::GenConfig;
use homestead_gen::error::GenError;
use homestead_gen::generate::generate_homestead;
use homestead_gen::prng::GenRng;
use homestead_gen::record::{Tee, WriteLog};
use homestead_gen::terrain::HeightMap;
use homestead_gen::types::VoxelCoord;
use homestead_gen::world::VoxelWorld;
use tracing_subscriber::EnvFilter;

/// Vertical room above the ground for the roof and tree.
const WORLD_HEADROOM: u32 = 32;

struct Args {
    seed: u64,
    size: u32,
    ground: i32,
    config: Option<PathBuf>,
    dump_writes: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: 0,
            size: 64,
            ground: 64,
            config: None,
            dump_writes: None,
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("Generation failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GenError> {
    let config = match &args.config {
        Some(path) => GenConfig::load(path)?,
        None => GenConfig::default(),
    };

    let terrain = HeightMap::flat(0, 0, args.size, args.size, args.ground);
    let outer = terrain.area();
    let world = VoxelWorld::new(
        VoxelCoord::new(0, args.ground - 1, 0),
        args.size,
        WORLD_HEADROOM,
        args.size,
    );
    let mut writer = Tee {
        first: WriteLog::new(),
        second: world,
    };
    let mut rng = GenRng::new(args.seed);

    let report = generate_homestead(&mut writer, &terrain, outer, &config, &mut rng)?;
    let Tee {
        first: log,
        second: world,
    } = writer;

    println!("Homestead (seed {})", args.seed);
    println!("  Site:       {}", report.site.origin());
    println!(
        "  Footprint:  {}x{}",
        report.dimensions.width, report.dimensions.depth
    );
    println!("  Property:   {:?}", report.plan.property);
    println!("  Floor:      {}", report.floor);
    println!("  Roof rows:  {}", report.roof_rows);
    println!("  Path cells: {}", report.paved_cells);
    println!("  Flowers:    {}", report.flowers_planted);
    println!("  Tree:       {}", if report.tree_planted { "yes" } else { "no" });
    println!(
        "  Writes:     {} ops, {} voxels",
        log.len(),
        log.voxel_writes()
    );
    println!(
        "  Roof peak:  y = {}",
        world
            .column_top(report.site.x + 1, report.site.z + report.dimensions.depth / 2)
            .map_or_else(|| "-".to_string(), |y| y.to_string())
    );

    if let Some(path) = &args.dump_writes {
        log.save(path)?;
        println!("Write log saved to {}", path.display());
    }
    Ok(())
}

/// Parse command-line arguments with plain `std::env::args()` matching.
fn parse_args() -> Args {
    let mut parsed = Args::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                parsed.seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires a non-negative integer");
                    std::process::exit(1);
                });
            }
            "--size" => {
                i += 1;
                parsed.size = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .filter(|n: &u32| (1..=4096).contains(n))
                    .unwrap_or_else(|| {
                        eprintln!("--size requires a number in 1..=4096");
                        std::process::exit(1);
                    });
            }
            "--ground" => {
                i += 1;
                parsed.ground = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--ground requires an integer elevation");
                    std::process::exit(1);
                });
            }
            "--config" => {
                i += 1;
                parsed.config = Some(args.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--config requires a path");
                    std::process::exit(1);
                }));
            }
            "--dump-writes" => {
                i += 1;
                parsed.dump_writes = Some(args.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--dump-writes requires a path");
                    std::process::exit(1);
                }));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn print_usage() {
    println!("Usage: homestead [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed <N>            PRNG seed (default: 0)");
    println!("  --size <N>            Side of the square target area (default: 64)");
    println!("  --ground <Y>          Flat terrain elevation (default: 64)");
    println!("  --config <PATH>       JSON config file (default: built-in)");
    println!("  --dump-writes <PATH>  Save the write log as JSON");
    println!("  --help, -h            Show this help");
}
