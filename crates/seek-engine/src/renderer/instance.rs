use bytemuck::{Pod, Zeroable};

use crate::systems::render::{CellQuad, RenderState};

/// A filled rectangle as read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Top-left corner.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl QuadInstance {
    pub const FLOATS: usize = 8;
}

impl From<&CellQuad> for QuadInstance {
    fn from(quad: &CellQuad) -> Self {
        Self {
            x: quad.rect.x,
            y: quad.rect.y,
            width: quad.rect.width,
            height: quad.rect.height,
            r: quad.color.r,
            g: quad.color.g,
            b: quad.color.b,
            a: quad.color.a,
        }
    }
}

/// A grid line segment: 4 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl LineInstance {
    pub const FLOATS: usize = 4;
}

/// A centred glyph: 4 floats. `code` is the Unicode scalar value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub code: f32,
}

impl GlyphInstance {
    pub const FLOATS: usize = 4;
}

/// Flat per-frame buffers for pointer-based reads from the host.
///
/// Quads are ordered found highlights first, then the live selection;
/// `selection_start` marks the boundary.
pub struct RenderBuffers {
    pub quads: Vec<QuadInstance>,
    pub selection_start: u32,
    pub lines: Vec<LineInstance>,
    pub glyphs: Vec<GlyphInstance>,
    /// Colour shared by all lines and glyphs, in that order.
    pub line_color: [f32; 4],
    pub glyph_color: [f32; 4],
}

impl RenderBuffers {
    pub fn new() -> Self {
        Self {
            quads: Vec::with_capacity(256),
            selection_start: 0,
            lines: Vec::with_capacity(32),
            glyphs: Vec::with_capacity(256),
            line_color: [0.0; 4],
            glyph_color: [0.0; 4],
        }
    }

    pub fn clear(&mut self) {
        self.quads.clear();
        self.selection_start = 0;
        self.lines.clear();
        self.glyphs.clear();
    }

    /// Rebuild all buffers from a render state.
    pub fn fill(&mut self, state: &RenderState) {
        self.clear();

        self.quads.extend(state.highlights.iter().map(QuadInstance::from));
        self.selection_start = self.quads.len() as u32;
        self.quads.extend(state.selection.iter().map(QuadInstance::from));

        self.lines.extend(state.grid_lines.iter().map(|l| LineInstance {
            x0: l.from.x,
            y0: l.from.y,
            x1: l.to.x,
            y1: l.to.y,
        }));
        if let Some(line) = state.grid_lines.first() {
            self.line_color = bytemuck::cast(line.color);
        }

        self.glyphs.extend(state.glyphs.iter().map(|g| GlyphInstance {
            x: g.center.x,
            y: g.center.y,
            size: g.size,
            code: g.ch as u32 as f32,
        }));
        if let Some(glyph) = state.glyphs.first() {
            self.glyph_color = bytemuck::cast(glyph.color);
        }
    }

    pub fn quad_count(&self) -> u32 {
        self.quads.len() as u32
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn glyph_count(&self) -> u32 {
        self.glyphs.len() as u32
    }

    /// Raw pointer to quad data for host reads.
    pub fn quads_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<QuadInstance, f32>(&self.quads).as_ptr()
    }

    pub fn lines_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<LineInstance, f32>(&self.lines).as_ptr()
    }

    pub fn glyphs_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<GlyphInstance, f32>(&self.glyphs).as_ptr()
    }
}

impl Default for RenderBuffers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Cell;
    use crate::core::layout::Rect;
    use crate::renderer::palette::Color;
    use crate::systems::render::{Glyph, LineSegment};
    use glam::Vec2;

    #[test]
    fn instance_strides() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), QuadInstance::FLOATS * 4);
        assert_eq!(std::mem::size_of::<LineInstance>(), LineInstance::FLOATS * 4);
        assert_eq!(std::mem::size_of::<GlyphInstance>(), GlyphInstance::FLOATS * 4);
    }

    #[test]
    fn fill_splits_highlights_from_selection() {
        let quad = |row, color| CellQuad {
            cell: Cell::new(row, 0),
            rect: Rect::new(0.0, row as f32 * 10.0, 10.0, 10.0),
            color,
        };
        let state = RenderState {
            cell_size: 10.0,
            highlights: vec![quad(0, Color::WHITE), quad(1, Color::WHITE)],
            selection: vec![quad(2, Color::BLACK.with_alpha(0.5))],
            grid_lines: vec![LineSegment {
                from: Vec2::ZERO,
                to: Vec2::new(10.0, 0.0),
                color: Color::BLACK,
            }],
            glyphs: vec![Glyph {
                cell: Cell::new(0, 0),
                ch: 'Ñ',
                center: Vec2::new(5.0, 5.0),
                size: 6.0,
                color: Color::BLACK,
            }],
        };

        let mut buffers = RenderBuffers::new();
        buffers.fill(&state);
        assert_eq!(buffers.quad_count(), 3);
        assert_eq!(buffers.selection_start, 2);
        assert_eq!(buffers.quads[2].a, 0.5);
        assert_eq!(buffers.quads[1].y, 10.0);
        assert_eq!(buffers.line_count(), 1);
        assert_eq!(buffers.line_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(buffers.glyphs[0].code, 'Ñ' as u32 as f32);

        buffers.fill(&RenderState::default());
        assert_eq!(buffers.quad_count(), 0);
        assert_eq!(buffers.glyph_count(), 0);
    }
}
