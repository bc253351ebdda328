use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::{Cell, WordFound};
use crate::core::grid::LetterGrid;
use crate::renderer::palette::{Color, Palette};

/// A full row or column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardLine {
    Row(usize),
    Column(usize),
}

impl GuardLine {
    pub fn contains(&self, cell: Cell) -> bool {
        match *self {
            GuardLine::Row(r) => cell.row == r,
            GuardLine::Column(c) => cell.col == c,
        }
    }
}

/// Rejects a match for `word` when every selected cell lies on `line`.
///
/// Used when a short target word also reads as a run inside a longer
/// target word's placement: the line reserved for the longer word must not
/// credit the shorter one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguityGuard {
    pub word: String,
    pub line: GuardLine,
}

impl AmbiguityGuard {
    pub fn new(word: impl Into<String>, line: GuardLine) -> Self {
        Self { word: word.into(), line }
    }

    fn rejects(&self, path: &[Cell]) -> bool {
        path.iter().all(|&cell| self.line.contains(cell))
    }
}

/// Checks released selections against the target words and records
/// which words have been found and how their cells are coloured.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    words: Vec<String>,
    guards: Vec<AmbiguityGuard>,
    palette: Palette,
    /// Indices into `words`, in discovery order.
    found: Vec<usize>,
    cell_colors: HashMap<Cell, Color>,
}

impl MatchEngine {
    /// `words` is the priority order used when more than one word could match.
    pub fn new(words: Vec<String>, guards: Vec<AmbiguityGuard>, palette: Palette) -> Self {
        Self {
            words,
            guards,
            palette,
            found: Vec::new(),
            cell_colors: HashMap::new(),
        }
    }

    /// Match the letters along `path` (read forwards or backwards) against
    /// the words not yet found. The first eligible word in priority order wins
    /// and its cells are coloured. Returns `None` when nothing new matched.
    pub fn check(&mut self, grid: &LetterGrid, path: &[Cell]) -> Option<WordFound> {
        if path.is_empty() {
            return None;
        }

        let forward = grid.read(path);
        if forward.chars().count() != path.len() {
            return None;
        }
        let reverse: String = forward.chars().rev().collect();

        let index = (0..self.words.len()).find(|&i| {
            let word = &self.words[i];
            (*word == forward || *word == reverse)
                && !self.found.contains(&i)
                && !self.guarded(word, path)
        })?;

        Some(self.commit(index, path))
    }

    fn guarded(&self, word: &str, path: &[Cell]) -> bool {
        self.guards
            .iter()
            .any(|guard| guard.word == word && guard.rejects(path))
    }

    fn commit(&mut self, index: usize, path: &[Cell]) -> WordFound {
        self.found.push(index);
        let total_found = self.found.len();
        let color = self.palette.color_for(total_found);
        for &cell in path {
            self.cell_colors.insert(cell, color);
        }

        let word = self.words[index].clone();
        log::info!("found {} ({}/{})", word, total_found, self.words.len());
        WordFound { word, index, total_found, color }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn target_count(&self) -> usize {
        self.words.len()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Found words in discovery order.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(|&i| self.words[i].as_str())
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|&i| self.words[i] == word)
    }

    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.found.len() == self.words.len()
    }

    pub fn cell_color(&self, cell: Cell) -> Option<Color> {
        self.cell_colors.get(&cell).copied()
    }

    /// Every coloured cell, in row-major order.
    pub fn found_cells(&self) -> Vec<(Cell, Color)> {
        let mut cells: Vec<(Cell, Color)> =
            self.cell_colors.iter().map(|(&c, &color)| (c, color)).collect();
        cells.sort_by_key(|&(cell, _)| cell);
        cells
    }
}
