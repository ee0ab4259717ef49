//! Example demonstrating basic word-search puzzle generation.
//!
//! This example shows how to:
//! - Build a `WordList` with priority words
//! - Generate a puzzle from a random or fixed seed
//! - Display the grid, the words to find, and the seed
//! - Sample many seeds in parallel and keep the best-filled puzzle
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Supply your own words (`--find` marks priority words):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --find compass --find lantern --word trail
//! ```
//!
//! Reproduce a puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Sample seeds and keep the puzzle that places the most words
//! (priority placements count double):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 1000
//! ```

use std::{process, str::FromStr as _};

use clap::Parser;
use rayon::prelude::*;
use wordlace_core::{Word, WordList};
use wordlace_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Priority word that must appear in the puzzle. Repeatable.
    #[arg(short, long = "find", value_name = "WORD", num_args = 1..)]
    find: Vec<String>,

    /// Best-effort filler word. Repeatable.
    #[arg(short, long = "word", value_name = "WORD", num_args = 1..)]
    words: Vec<String>,

    /// Grid side length.
    #[arg(long, value_name = "SIZE", default_value_t = 15)]
    size: usize,

    /// Fixed seed (64 hex characters); incompatible with sampling.
    #[arg(long, value_name = "SEED", conflicts_with = "max_tries")]
    seed: Option<String>,

    /// Seeds to sample when looking for a well-filled puzzle.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

const DEFAULT_FIND: [&str; 4] = ["compass", "lantern", "summit", "ridge"];
const DEFAULT_WORDS: [&str; 6] = ["trail", "cairn", "forest", "river", "meadow", "valley"];

fn main() {
    let args = Args::parse();
    let words = build_word_list(&args);
    let generator = PuzzleGenerator::with_config(GeneratorConfig::default().grid_size(args.size));

    if let Some(seed) = &args.seed {
        let seed = match PuzzleSeed::from_str(seed) {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        let puzzle = generate_or_exit(&generator, &words, Some(seed));
        print_puzzle(&puzzle, &words, None);
        return;
    }

    let Some(max_tries) = args.max_tries else {
        let puzzle = generate_or_exit(&generator, &words, None);
        print_puzzle(&puzzle, &words, None);
        return;
    };
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| {
            let puzzle = generate_or_exit(&generator, &words, None);
            let score = puzzle_score(&puzzle, &words);
            (puzzle, score)
        })
        .max_by_key(|(_, score)| *score);

    if let Some((puzzle, score)) = best {
        print_puzzle(&puzzle, &words, Some((max_tries, score)));
        return;
    }

    eprintln!("No puzzle generated.");
    process::exit(1);
}

fn build_word_list(args: &Args) -> WordList {
    let (find, fill): (Vec<&str>, Vec<&str>) = if args.find.is_empty() && args.words.is_empty() {
        (DEFAULT_FIND.to_vec(), DEFAULT_WORDS.to_vec())
    } else {
        (
            args.find.iter().map(String::as_str).collect(),
            args.words.iter().map(String::as_str).collect(),
        )
    };

    let mut words = WordList::new();
    for (raw, priority) in find
        .iter()
        .map(|w| (w, true))
        .chain(fill.iter().map(|w| (w, false)))
    {
        match Word::new(raw) {
            Ok(word) => {
                words.insert(word, priority);
            }
            Err(err) => {
                eprintln!("Invalid word {raw:?}: {err}");
                process::exit(2);
            }
        }
    }
    words
}

fn generate_or_exit(
    generator: &PuzzleGenerator,
    words: &WordList,
    seed: Option<PuzzleSeed>,
) -> GeneratedPuzzle {
    let result = match seed {
        Some(seed) => generator.generate_with_seed(words, seed),
        None => generator.generate(words),
    };
    match result {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

/// Placed words score one point each, priority words two.
fn puzzle_score(puzzle: &GeneratedPuzzle, words: &WordList) -> usize {
    puzzle.placements.len() + puzzle.priority_placements(words).count()
}

fn print_puzzle(puzzle: &GeneratedPuzzle, words: &WordList, selection: Option<(usize, usize)>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some((max_tries, best_score)) = selection {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Best score: {best_score}");
        println!();
    }

    println!("Puzzle:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Find these words:");
    for word in puzzle.words_to_find(words) {
        println!("  {word}");
    }

    if !puzzle.unplaced.is_empty() {
        println!();
        println!("Unplaced:");
        for word in &puzzle.unplaced {
            println!("  {word}");
        }
    }
}
