//! Lineage CLI - Run a text-matching search from JSON configuration.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use lineage::{Search, SearchConfig, StopReason};

/// Demo problem: evolve a genome of characters toward a target text,
/// scored by the count of matching positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DemoConfig {
    /// Symbols genomes may draw from.
    alphabet: String,
    /// Text the scoring function rewards matching position-by-position.
    target_text: String,
    /// Engine settings; `genome_length` must equal the target text length.
    search: SearchConfig,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json>", args[0]);
        eprintln!();
        eprintln!("Run a single-lineage search that evolves a random genome");
        eprintln!("into the configured target text.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to search configuration file");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: DemoConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let alphabet: Vec<char> = config.alphabet.chars().collect();
    let want: Vec<char> = config.target_text.chars().collect();
    let target = want.len();

    if config.search.genome_length != target {
        eprintln!(
            "Error: genome_length {} does not match target text length {}",
            config.search.genome_length, target
        );
        std::process::exit(1);
    }
    if let Some(missing) = want.iter().find(|w| !alphabet.contains(w)) {
        eprintln!(
            "Error: target text symbol {:?} is not in the alphabet",
            missing
        );
        std::process::exit(1);
    }

    let score = move |genes: &[char]| genes.iter().zip(&want).filter(|(g, w)| g == w).count();

    let search =
        Search::new(alphabet, score, target, config.search.clone()).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!("Lineage Search");
    println!("==============");
    println!("Alphabet: {} symbols", config.alphabet.chars().count());
    println!("Target: {:?} ({} loci)", config.target_text, target);
    println!("Mutation: {:?}", config.search.mutation);
    println!("Max age: {:?}", config.search.max_age);
    println!();

    let result = search.run_with_callback(|improvement| {
        let genome: String = improvement.candidate.genes.iter().collect();
        println!(
            "{}\t{}\t{:.3}s",
            genome,
            improvement.candidate.fitness,
            improvement.elapsed.as_secs_f64()
        );
    });

    let genome: String = result.best.genes.iter().collect();
    println!();
    println!("Result: {:?}", genome);
    println!("  Fitness: {}/{}", result.best.fitness, target);
    println!("  Improvements: {}", result.stats.improvements);
    println!("  Evaluations: {}", result.stats.evaluations);
    println!("  Time: {:.2}s", result.stats.elapsed_seconds);
    if result.stats.stop_reason != StopReason::TargetReached {
        println!("  Stopped early: {:?}", result.stats.stop_reason);
    }
}

fn print_example_config() {
    let config = DemoConfig {
        alphabet: " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        target_text: "Hello World".to_string(),
        search: SearchConfig {
            genome_length: 11,
            max_age: Some(50),
            random_seed: 42,
            ..Default::default()
        },
    };

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
