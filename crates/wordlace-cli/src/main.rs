//! Command-line word-search puzzle generator.
//!
//! Reads a two-column word list, generates a puzzle, and prints it as
//! text. The seed is always printed so any puzzle can be reproduced
//! with `--seed`.

use std::{path::PathBuf, process, str::FromStr as _};

use clap::Parser;
use wordlace_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

mod render;
mod wordlist;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the word-list file (one `WORD,PRIORITY` entry per line).
    #[arg(value_name = "WORD_LIST")]
    word_list: PathBuf,

    /// Grid side length.
    #[arg(long, value_name = "SIZE", default_value_t = 15)]
    size: usize,

    /// Fixed seed (64 hex characters) to reproduce a previous puzzle.
    #[arg(long, value_name = "SEED", conflicts_with = "name")]
    seed: Option<String>,

    /// Puzzle name; the seed is derived from it, so the same name
    /// always yields the same puzzle.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Print the solution view instead of the puzzle view.
    #[arg(long)]
    solution: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let words = match wordlist::load(&args.word_list) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("{}: {err}", args.word_list.display());
            process::exit(2);
        }
    };

    let seed = match seed_from_args(&args) {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("Invalid seed: {err}");
            process::exit(2);
        }
    };

    let generator = PuzzleGenerator::with_config(GeneratorConfig::default().grid_size(args.size));
    let puzzle = match generator.generate_with_seed(&words, seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    for word in &puzzle.unplaced {
        log::warn!("could not place {word}");
    }

    println!("Seed: {}", puzzle.seed);
    println!();
    if args.solution {
        print!("{}", render::solution(&puzzle, &words));
    } else {
        print!("{}", render::puzzle(&puzzle, &words));
    }
}

fn seed_from_args(args: &Args) -> Result<PuzzleSeed, wordlace_generator::ParseSeedError> {
    if let Some(seed) = &args.seed {
        return PuzzleSeed::from_str(seed);
    }
    if let Some(name) = &args.name {
        return Ok(PuzzleSeed::from_phrase(name));
    }
    Ok(PuzzleSeed::random())
}
