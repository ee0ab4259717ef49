//! Text rendering of generated puzzles.

use std::collections::HashSet;

use wordlace_core::{Position, WordList};
use wordlace_generator::GeneratedPuzzle;

/// Number of columns in the rendered word list.
const WORD_COLUMNS: usize = 3;

/// Renders the puzzle view: the full grid and the words to find.
#[must_use]
pub fn puzzle(puzzle: &GeneratedPuzzle, words: &WordList) -> String {
    let mut out = String::new();
    out.push_str(&puzzle.grid.to_string());
    out.push('\n');
    out.push_str("Find these words:\n");
    out.push_str(&word_columns(puzzle, words));
    out
}

/// Renders the solution view.
///
/// Cells covered by a priority placement show their letter; every other
/// cell is masked, so the sought words stand out the way the highlight
/// overlay does in a graphical rendering.
#[must_use]
pub fn solution(puzzle: &GeneratedPuzzle, words: &WordList) -> String {
    let solution_cells: HashSet<Position> = puzzle
        .priority_placements(words)
        .flat_map(|placement| placement.cells().iter().copied())
        .collect();

    let mut out = String::new();
    for (row, cells) in puzzle.grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            match cell {
                Some(letter) if solution_cells.contains(&Position::new(row, col)) => {
                    out.push(letter.to_char());
                }
                _ => out.push('·'),
            }
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str("Words found:\n");
    for placement in puzzle.priority_placements(words) {
        out.push_str(&format!(
            "  {} at {} going {}\n",
            placement.word(),
            placement.start(),
            placement.direction()
        ));
    }
    out
}

/// Lays the words to find out in columns, row-major like the original
/// puzzle sheets.
fn word_columns(puzzle: &GeneratedPuzzle, words: &WordList) -> String {
    let to_find = puzzle.words_to_find(words);
    if to_find.is_empty() {
        return String::new();
    }
    let width = to_find.iter().map(|word| word.len()).max().unwrap_or(0) + 2;
    let rows = to_find.len().div_ceil(WORD_COLUMNS);

    let mut out = String::new();
    for row in 0..rows {
        out.push_str("  ");
        for col in 0..WORD_COLUMNS {
            if let Some(word) = to_find.get(col * rows + row) {
                out.push_str(&format!("{:<width$}", word.as_str()));
            }
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use wordlace_core::Word;
    use wordlace_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

    use super::*;

    const SEED_HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn generate() -> (GeneratedPuzzle, WordList) {
        let words: WordList = [
            (Word::new("cat").unwrap(), true),
            (Word::new("dog").unwrap(), false),
        ]
        .into_iter()
        .collect();
        let generator = PuzzleGenerator::with_config(GeneratorConfig::default().grid_size(8));
        let puzzle = generator
            .generate_with_seed(&words, PuzzleSeed::from_str(SEED_HEX).unwrap())
            .unwrap();
        (puzzle, words)
    }

    #[test]
    fn test_puzzle_view_shows_grid_and_word_list() {
        let (generated, words) = generate();
        let rendered = puzzle(&generated, &words);

        // 8 grid rows, then the word list
        assert_eq!(
            rendered.lines().take_while(|line| !line.is_empty()).count(),
            8
        );
        assert!(rendered.contains("Find these words:"));
        for word in generated.words_to_find(&words) {
            assert!(rendered.contains(word.as_str()));
        }
    }

    #[test]
    fn test_solution_view_masks_non_priority_cells() {
        let (generated, words) = generate();
        let rendered = solution(&generated, &words);

        // Every priority letter cell is visible
        let lines: Vec<&str> = rendered.lines().collect();
        for placement in generated.priority_placements(&words) {
            for (pos, letter) in placement.cells().iter().zip(placement.word().letters()) {
                let row: Vec<char> = lines[pos.row()]
                    .split(' ')
                    .map(|cell| cell.chars().next().unwrap())
                    .collect();
                assert_eq!(row[pos.col()], letter.to_char());
            }
        }

        // Non-priority words are masked: the solution grid contains at
        // most the priority letters
        let visible = rendered
            .lines()
            .take(8)
            .flat_map(|line| line.chars())
            .filter(char::is_ascii_uppercase)
            .count();
        let priority_cells: usize = generated
            .priority_placements(&words)
            .map(|placement| placement.cells().len())
            .sum();
        assert_eq!(visible, priority_cells);
    }

    #[test]
    fn test_solution_lists_placements() {
        let (generated, words) = generate();
        let rendered = solution(&generated, &words);
        assert!(rendered.contains("Words found:"));
        for placement in generated.priority_placements(&words) {
            assert!(rendered.contains(placement.word().as_str()));
        }
    }
}
