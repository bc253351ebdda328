use crate::api::types::Cell;
use crate::assets::error::ConfigError;

/// The eight straight-line step directions as (row delta, col delta).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// A straight-line occurrence of a word in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: Cell,
    /// Step per letter, each component in -1..=1.
    pub step: (i32, i32),
    pub len: usize,
}

impl Placement {
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len as i32).map(move |i| {
            Cell::new(
                (self.start.row as i32 + i * self.step.0) as usize,
                (self.start.col as i32 + i * self.step.1) as usize,
            )
        })
    }

    pub fn end(&self) -> Cell {
        let last = self.len.saturating_sub(1) as i32;
        Cell::new(
            (self.start.row as i32 + last * self.step.0) as usize,
            (self.start.col as i32 + last * self.step.1) as usize,
        )
    }
}

/// Immutable row-major letter matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    letters: Vec<char>,
}

impl LetterGrid {
    /// Build a grid from one string per row. Letters are uppercased;
    /// every row must have the same number of characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let mut letters = Vec::with_capacity(rows.len() * cols);
        for (row, text) in rows.iter().enumerate() {
            let before = letters.len();
            letters.extend(text.as_ref().chars().flat_map(char::to_uppercase));
            let found = letters.len() - before;
            if found != cols {
                return Err(ConfigError::RaggedRow { row, expected: cols, found });
            }
        }

        Ok(Self { rows: rows.len(), cols, letters })
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn char_at(&self, cell: Cell) -> Result<char, GridError> {
        if cell.row < self.rows && cell.col < self.cols {
            Ok(self.letters[cell.row * self.cols + cell.col])
        } else {
            Err(GridError::OutOfBounds { row: cell.row, col: cell.col })
        }
    }

    /// Letters along `path`, in path order. Cells outside the grid are skipped.
    pub fn read(&self, path: &[Cell]) -> String {
        path.iter().filter_map(|&c| self.char_at(c).ok()).collect()
    }

    /// Iterate all cells in row-major order with their letter.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (Cell::new(i / self.cols, i % self.cols), ch))
    }

    /// Every straight-line occurrence of `word`, in any of the eight directions.
    /// A palindrome is reported once per direction it reads in.
    pub fn find(&self, word: &str) -> Vec<Placement> {
        let target: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();
        let mut placements = Vec::new();
        let Some(&first) = target.first() else {
            return placements;
        };
        let len = target.len() as i32;

        for (start, ch) in self.iter() {
            if ch != first {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                if target.len() == 1 && (dr, dc) != DIRECTIONS[0] {
                    break;
                }
                let (r0, c0) = (start.row as i32, start.col as i32);
                if !self.contains(r0 + (len - 1) * dr, c0 + (len - 1) * dc) {
                    continue;
                }
                let hit = target.iter().enumerate().all(|(i, &want)| {
                    let i = i as i32;
                    let cell = Cell::new((r0 + i * dr) as usize, (c0 + i * dc) as usize);
                    self.char_at(cell) == Ok(want)
                });
                if hit {
                    placements.push(Placement { start, step: (dr, dc), len: target.len() });
                }
            }
        }
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> LetterGrid {
        LetterGrid::from_rows(&["cat", "oxo", "wed"]).unwrap()
    }

    #[test]
    fn dimensions_and_uppercase() {
        let grid = small();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.char_at(Cell::new(0, 0)), Ok('C'));
        assert_eq!(grid.char_at(Cell::new(2, 2)), Ok('D'));
    }

    #[test]
    fn char_at_out_of_bounds() {
        let grid = small();
        assert_eq!(
            grid.char_at(Cell::new(3, 0)),
            Err(GridError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(grid.char_at(Cell::new(0, 3)).is_err());
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = LetterGrid::from_rows(&["ABC", "AB"]).unwrap_err();
        assert!(matches!(err, ConfigError::RaggedRow { row: 1, expected: 3, found: 2 }));
    }

    #[test]
    fn empty_grid_rejected() {
        let rows: [&str; 0] = [];
        assert!(matches!(LetterGrid::from_rows(&rows), Err(ConfigError::EmptyGrid)));
        assert!(matches!(LetterGrid::from_rows(&[""]), Err(ConfigError::EmptyGrid)));
    }

    #[test]
    fn read_follows_path_order() {
        let grid = small();
        let path = [Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)];
        assert_eq!(grid.read(&path), "TAC");
    }

    #[test]
    fn find_all_directions() {
        let grid = small();
        // Row 0 forward.
        let cat = grid.find("cat");
        assert_eq!(cat.len(), 1);
        assert_eq!(cat[0].start, Cell::new(0, 0));
        assert_eq!(cat[0].step, (0, 1));

        // Column 0 downwards.
        let cow = grid.find("COW");
        assert_eq!(cow.len(), 1);
        assert_eq!(cow[0].end(), Cell::new(2, 0));

        // Anti-diagonal read upwards.
        let wxt = grid.find("WXT");
        assert_eq!(wxt.len(), 1);
        assert_eq!(wxt[0].step, (-1, 1));
        let cells: Vec<Cell> = wxt[0].cells().collect();
        assert_eq!(cells, vec![Cell::new(2, 0), Cell::new(1, 1), Cell::new(0, 2)]);

        assert!(grid.find("DOG").is_empty());
    }

    #[test]
    fn find_palindrome_both_ways() {
        let grid = small();
        // "OXO" in row 1 reads the same in both horizontal directions.
        assert_eq!(grid.find("OXO").len(), 2);
    }
}
