//! Tiled Life CLI - Run Game of Life streams from arguments or JSON configuration.

use std::time::Instant;

use tiled_life::{
    compute::{Grid, Simulation, run_batch},
    schema::SimulationConfig,
};

/// Boards wider than this are summarized instead of printed.
const PRINT_LIMIT: usize = 80;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "--example" => print_example_config(),
        "--config" => {
            let config = load_config(args.get(2));
            run_single(config);
        }
        "--batch" => {
            let runs: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                eprintln!("--batch expects a run count");
                std::process::exit(1);
            });
            let config = load_config(args.get(3));
            run_many(config, runs);
        }
        size => {
            if args.len() < 4 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            let max_generations = args.get(4).map(|s| {
                s.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid `max_generations` value '{}'", s);
                    std::process::exit(1);
                })
            });
            let config = SimulationConfig::from_params(size, &args[2], &args[3], max_generations)
                .unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    std::process::exit(1);
                });
            run_single(config);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <size> <boundary> <pattern> [max_generations]", program);
    eprintln!("       {} --config <config.json>", program);
    eprintln!("       {} --batch <runs> <config.json>", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Run Conway's Game of Life until it settles or the budget runs out.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  size             Side length (64) or rows x cols (48x64)");
    eprintln!("  boundary         fixed | periodic");
    eprintln!("  pattern          tiles | noise");
    eprintln!("  max_generations  Generation budget (default: 1000)");
}

fn load_config(path: Option<&String>) -> SimulationConfig {
    let Some(path) = path else {
        eprintln!("Missing config file path");
        std::process::exit(1);
    };
    SimulationConfig::load(path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    })
}

fn run_single(config: SimulationConfig) {
    let simulation = Simulation::new(config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    println!("Tiled Life");
    println!("==========");
    println!("Run: {}", simulation.label());
    println!();

    let start = Instant::now();
    let mut stream = simulation.start().unwrap_or_else(|e| {
        eprintln!("Error creating seed: {}", e);
        std::process::exit(1);
    });

    let mut first: Option<Grid> = None;
    let mut last: Option<Grid> = None;
    let mut frames = 0usize;
    for frame in stream.by_ref() {
        if first.is_none() {
            first = Some(frame.clone());
        }
        frames += 1;
        last = Some(frame);
    }
    let elapsed = start.elapsed();

    if let Some(seed) = &first {
        print_grid("Seed", seed);
    }
    if let Some(last) = &last {
        print_grid("Final frame", last);
    }

    println!("Frames: {}", frames);
    println!("Generations: {}", stream.generation());
    println!("Exit: {:?}", stream.exit_code());
    println!(
        "Time: {:.3}s ({:.1} generations/s)",
        elapsed.as_secs_f32(),
        stream.generation() as f32 / elapsed.as_secs_f32().max(f32::EPSILON)
    );
}

fn run_many(config: SimulationConfig, runs: usize) {
    let summaries = run_batch(&config, runs).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    match serde_json::to_string_pretty(&summaries) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding summaries: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_grid(title: &str, grid: &Grid) {
    println!("{} (population {}):", title, grid.population());
    if grid.cols() <= PRINT_LIMIT {
        print!("{}", grid);
    } else {
        println!("  {}x{} board not shown", grid.rows(), grid.cols());
    }
    println!();
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error encoding config: {}", e),
    }
}
