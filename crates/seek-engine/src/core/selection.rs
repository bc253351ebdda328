//! Turns a drag from a start cell to the cell under the pointer into a
//! straight run of cells (horizontal, vertical or 45° diagonal).

use serde::{Deserialize, Serialize};

use crate::api::types::Cell;

/// How a freeform drag is snapped onto one of the eight grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Step each axis by the sign of its delta for `max(|dr|, |dc|)` steps.
    /// Off-angle drags snap to the nearest 8-way ray from the start cell.
    AxisLock,
    /// Pick the dominant axis first, then go diagonal only when the minor
    /// delta is at least half the major one. Near-axis drags stay straight.
    #[default]
    DominantAxis,
}

impl SelectionStrategy {
    /// Resolve the path from `start` towards `current` on a `rows × cols` grid.
    ///
    /// The first cell is always `start`. Cells that would fall outside the
    /// grid end the path early instead of being clamped.
    pub fn resolve(self, start: Cell, current: Cell, rows: usize, cols: usize) -> Vec<Cell> {
        let dr = current.row as i32 - start.row as i32;
        let dc = current.col as i32 - start.col as i32;

        let (step, steps) = match self {
            Self::AxisLock => ((dr.signum(), dc.signum()), dr.abs().max(dc.abs())),
            Self::DominantAxis => dominant_axis_step(dr, dc),
        };

        let (r0, c0) = (start.row as i32, start.col as i32);
        (0..=steps)
            .map(|i| (r0 + i * step.0, c0 + i * step.1))
            .take_while(|&(r, c)| r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols)
            .map(|(r, c)| Cell::new(r as usize, c as usize))
            .collect()
    }
}

/// Step direction and step count for the dominant-axis strategy.
fn dominant_axis_step(dr: i32, dc: i32) -> ((i32, i32), i32) {
    let (ar, ac) = (dr.abs(), dc.abs());
    if ar >= ac {
        // Vertical gesture; the column is the minor axis.
        if 2 * ac < ar {
            ((dr.signum(), 0), ar)
        } else {
            ((dr.signum(), dc.signum()), ar)
        }
    } else if 2 * ar < ac {
        ((0, dc.signum()), ac)
    } else {
        ((dr.signum(), dc.signum()), ac)
    }
}

/// Live drag state. Only the start and current cells are kept; the path is
/// re-derived from them on every update.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    strategy: SelectionStrategy,
    anchor: Option<(Cell, Cell)>,
    path: Vec<Cell>,
}

impl Selection {
    pub fn new(strategy: SelectionStrategy) -> Self {
        Self {
            strategy,
            anchor: None,
            path: Vec::new(),
        }
    }

    /// Start a new gesture at `cell`, discarding any previous path.
    pub fn begin(&mut self, cell: Cell, rows: usize, cols: usize) {
        self.anchor = Some((cell, cell));
        self.path = self.strategy.resolve(cell, cell, rows, cols);
    }

    /// Move the pointer end of the gesture. Returns true if the path changed.
    pub fn update(&mut self, cell: Cell, rows: usize, cols: usize) -> bool {
        let Some((start, current)) = self.anchor else {
            return false;
        };
        if current == cell {
            return false;
        }
        self.anchor = Some((start, cell));
        let path = self.strategy.resolve(start, cell, rows, cols);
        let changed = path != self.path;
        self.path = path;
        changed
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.path.clear();
    }

    /// Take the path out of the selection and end the gesture.
    pub fn finish(&mut self) -> Vec<Cell> {
        self.anchor = None;
        std::mem::take(&mut self.path)
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }
}
