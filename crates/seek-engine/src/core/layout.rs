use glam::Vec2;

use crate::api::types::Cell;

/// Axis-aligned rectangle in host pixel coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Maps between host pixels and grid cells.
/// Cells are square; the grid is centred inside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    rows: usize,
    cols: usize,
    cell_size: f32,
    origin: Vec2,
}

impl BoardLayout {
    /// An unconfigured layout for a `rows × cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cell_size: 0.0,
            origin: Vec2::ZERO,
        }
    }

    /// Fit the grid into `bounds`. Non-positive (or NaN) sizes leave the
    /// layout unconfigured until a usable size arrives.
    pub fn configure(&mut self, bounds: Rect) {
        let usable = bounds.width > 0.0 && bounds.height > 0.0 && self.rows > 0 && self.cols > 0;
        if !usable {
            log::debug!("layout: ignoring bounds {:?}", bounds);
            self.cell_size = 0.0;
            self.origin = Vec2::ZERO;
            return;
        }

        let cell = (bounds.width / self.cols as f32).min(bounds.height / self.rows as f32);
        let grid = Vec2::new(cell * self.cols as f32, cell * self.rows as f32);
        self.cell_size = cell;
        self.origin = bounds.min() + (Vec2::new(bounds.width, bounds.height) - grid) * 0.5;
    }

    pub fn is_configured(&self) -> bool {
        self.cell_size > 0.0 && self.cell_size.is_finite()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Top-left corner of the grid.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn grid_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.cell_size * self.cols as f32,
            self.cell_size * self.rows as f32,
        )
    }

    /// Cell under a host point, or `None` if unconfigured or off the grid.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        if !self.is_configured() {
            return None;
        }
        let col = ((x - self.origin.x) / self.cell_size).floor();
        let row = ((y - self.origin.y) / self.cell_size).floor();
        if row >= 0.0 && col >= 0.0 && (row as usize) < self.rows && (col as usize) < self.cols {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.origin.x + cell.col as f32 * self.cell_size,
            self.origin.y + cell.row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        self.cell_rect(cell).center()
    }
}
