use glam::Vec2;

use crate::api::types::Cell;
use crate::core::grid::LetterGrid;
use crate::core::layout::{BoardLayout, Rect};
use crate::core::matcher::MatchEngine;
use crate::renderer::palette::{Color, RenderStyle};

/// A filled cell-sized rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellQuad {
    pub cell: Cell,
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// One letter, centred in its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub cell: Cell,
    pub ch: char,
    pub center: Vec2,
    /// Suggested font size in pixels.
    pub size: f32,
    pub color: Color,
}

/// Everything the host needs to draw one frame, in back-to-front order:
/// found highlights, live selection, grid lines, glyphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    pub cell_size: f32,
    pub highlights: Vec<CellQuad>,
    pub selection: Vec<CellQuad>,
    pub grid_lines: Vec<LineSegment>,
    pub glyphs: Vec<Glyph>,
}

impl RenderState {
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
            && self.selection.is_empty()
            && self.grid_lines.is_empty()
            && self.glyphs.is_empty()
    }
}

/// Glyph size as a fraction of the cell size.
const GLYPH_SCALE: f32 = 0.6;

/// Project the current puzzle state into draw instructions.
/// Pure; returns an empty state until the layout has a usable size.
pub fn project(
    grid: &LetterGrid,
    layout: &BoardLayout,
    matcher: &MatchEngine,
    selection: &[Cell],
    style: &RenderStyle,
) -> RenderState {
    if !layout.is_configured() {
        return RenderState::default();
    }
    let (rows, cols) = grid.dimensions();
    let size = layout.cell_size();

    let highlights = matcher
        .found_cells()
        .into_iter()
        .map(|(cell, color)| CellQuad { cell, rect: layout.cell_rect(cell), color })
        .collect();

    let selection = selection
        .iter()
        .map(|&cell| CellQuad {
            cell,
            rect: layout.cell_rect(cell),
            color: style.selection_color,
        })
        .collect();

    let bounds = layout.grid_rect();
    let mut grid_lines = Vec::with_capacity(rows + cols + 2);
    for r in 0..=rows {
        let y = bounds.y + r as f32 * size;
        grid_lines.push(LineSegment {
            from: Vec2::new(bounds.x, y),
            to: Vec2::new(bounds.x + bounds.width, y),
            color: style.line_color,
        });
    }
    for c in 0..=cols {
        let x = bounds.x + c as f32 * size;
        grid_lines.push(LineSegment {
            from: Vec2::new(x, bounds.y),
            to: Vec2::new(x, bounds.y + bounds.height),
            color: style.line_color,
        });
    }

    let glyphs = grid
        .iter()
        .map(|(cell, ch)| Glyph {
            cell,
            ch,
            center: layout.cell_center(cell),
            size: size * GLYPH_SCALE,
            color: style.glyph_color,
        })
        .collect();

    RenderState { cell_size: size, highlights, selection, grid_lines, glyphs }
}
