pub mod instance;
pub mod palette;

// Re-export key types for convenient access
pub use instance::{GlyphInstance, LineInstance, QuadInstance, RenderBuffers};
pub use palette::{Color, Palette, RenderStyle};
