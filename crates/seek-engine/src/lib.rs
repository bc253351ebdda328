pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::search::{WordSearch, WordFoundHandler};
pub use api::types::{Cell, WordFound, PuzzleEvent, EVENT_WORD_FOUND, EVENT_PUZZLE_COMPLETE};
pub use assets::error::ConfigError;
pub use assets::puzzle::{Puzzle, PuzzleConfig, StyleConfig};
pub use core::grid::{LetterGrid, GridError, Placement};
pub use core::layout::{BoardLayout, Rect};
pub use core::matcher::{MatchEngine, AmbiguityGuard, GuardLine};
pub use core::selection::{Selection, SelectionStrategy};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{QuadInstance, LineInstance, GlyphInstance, RenderBuffers};
pub use renderer::palette::{Color, Palette, RenderStyle};
pub use systems::render::{project, RenderState, CellQuad, LineSegment, Glyph};
