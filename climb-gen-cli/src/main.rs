use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use climb_gen_core::corpus::load_corpus;
use climb_gen_core::frames::{PlacementTable, decode_frames};
use climb_gen_core::render::{SvgOptions, route_to_svg};
use climb_gen_core::{GenerationConfig, Generator, Route, stats};
use log::{info, warn};
use serde::Serialize;

const DEFAULT_TRAINING_DATA: &str = "data/processed/climb_sequences.json";

#[derive(Parser)]
#[command(name = "climb-gen", version, about = "Generate climbing problems from a corpus of real routes")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train on the corpus and generate routes for a difficulty
    Generate(GenerateArgs),
    /// Print statistics about the training corpus
    Analyze {
        #[arg(long, default_value = DEFAULT_TRAINING_DATA)]
        training_data: PathBuf,
    },
    /// Decode a placement-code string such as p802r5p803r6
    Decode {
        frames: String,
        /// JSON list of {placement, x, y}
        #[arg(long)]
        placements: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Target difficulty, e.g. V3
    difficulty: String,
    #[arg(long, default_value = DEFAULT_TRAINING_DATA)]
    training_data: PathBuf,
    /// JSON generation config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of routes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Base seed; route i uses seed + i. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    min_moves: Option<usize>,
    #[arg(long)]
    max_moves: Option<usize>,
    #[arg(long)]
    max_attempts: Option<usize>,
    /// Where to write the generated routes as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Where to write an SVG per route (index-suffixed when count > 1)
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Background image referenced by the SVG
    #[arg(long)]
    background: Option<String>,
}

#[derive(Serialize)]
struct GeneratedClimb<'a> {
    difficulty: &'a str,
    seed: u64,
    climb: &'a Route,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(args: &GenerateArgs) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
    let mut config: GenerationConfig = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => GenerationConfig::default(),
    };
    if let Some(min_moves) = args.min_moves {
        config.min_moves = min_moves;
    }
    if let Some(max_moves) = args.max_moves {
        config.max_moves = max_moves;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }
    config.validate()?;
    Ok(config)
}

fn svg_path(base: &Path, index: usize, count: usize) -> std::io::Result<PathBuf> {
    if count > 1 {
        climb_gen_core::io::indexed_output_path(base, index)
    } else {
        Ok(base.to_path_buf())
    }
}

fn generate(args: GenerateArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = load_config(&args)?;
    let generator = Generator::from_corpus(&args.training_data, config)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating {} route(s) for {} from seed {}", args.count, args.difficulty, seed);

    let batch = generator.generate_batch(&args.difficulty, args.count, seed)?;

    let svg_options = SvgOptions { background_image: args.background.clone(), ..SvgOptions::default() };
    let mut climbs = Vec::new();
    for generated in &batch {
        let Some(route) = &generated.route else {
            println!("Route {} (seed {}): no valid route found", generated.index + 1, generated.seed);
            continue;
        };

        println!("Route {} (seed {}), {} moves:", generated.index + 1, generated.seed, route.len());
        for (i, hold) in route.holds().iter().enumerate() {
            println!("  {}. ({}, {}) - {}", i + 1, hold.x, hold.y, hold.role);
        }

        if let Some(base) = &args.svg {
            let path = svg_path(base, generated.index, args.count)?;
            climb_gen_core::io::write_text(&path, &route_to_svg(route, &svg_options))?;
            println!("  SVG saved to: {}", path.display());
        }

        climbs.push(GeneratedClimb { difficulty: &args.difficulty, seed: generated.seed, climb: route });
    }

    if let Some(output) = &args.output {
        climb_gen_core::io::write_json(output, &climbs)?;
        println!("Routes saved to: {}", output.display());
    }

    if climbs.is_empty() {
        warn!("No valid route within {} attempts; try looser bounds", generator.config().max_attempts);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn analyze(training_data: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let records = load_corpus(training_data)?;
    let summary = stats::analyze(&records);

    println!("Dataset Analysis:");
    println!("Total climbs: {}", summary.total_climbs);
    println!();
    println!("Sequence Length Statistics:");
    println!("Average length: {:.1} moves (std {:.1})", summary.sequence_lengths.mean, summary.sequence_lengths.std);
    println!("Length range: {} - {} moves", summary.sequence_lengths.min, summary.sequence_lengths.max);
    println!();
    println!("Grade Distribution:");
    for (grade, count) in &summary.grade_distribution {
        println!("{}: {} climbs", grade, count);
    }
    if let (Some(x), Some(y)) = (summary.x_range, summary.y_range) {
        println!();
        println!("Coordinate Ranges:");
        println!("X: {} to {}", x.min, x.max);
        println!("Y: {} to {}", y.min, y.max);
    }
    Ok(ExitCode::SUCCESS)
}

fn decode(frames: &str, placements: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let table = PlacementTable::from_json(placements)?;
    let holds = decode_frames(frames, &table)?;
    println!("Sequence: {}", frames);
    for hold in &holds {
        println!("x: {}, y: {}, color: {}", hold.x, hold.y, hold.role);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Analyze { training_data } => analyze(&training_data),
        Command::Decode { frames, placements } => decode(&frames, &placements),
    }
}
