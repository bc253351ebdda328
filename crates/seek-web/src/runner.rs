use seek_engine::{
    ConfigError, InputEvent, InputQueue, PuzzleConfig, PuzzleEvent, Rect, RenderBuffers,
    WordSearch,
};

/// Wires a [`WordSearch`] to the browser frame loop.
///
/// Each puzzle crate keeps one runner in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]` (see [`crate::export_puzzle!`]).
/// Pointer events are queued as they arrive and applied once per `tick`.
pub struct PuzzleRunner {
    search: WordSearch,
    input: InputQueue,
    buffers: RenderBuffers,
    /// Events produced by the most recent tick.
    events: Vec<PuzzleEvent>,
}

impl PuzzleRunner {
    pub fn new(search: WordSearch) -> Self {
        Self {
            search,
            input: InputQueue::new(),
            buffers: RenderBuffers::new(),
            events: Vec::with_capacity(8),
        }
    }

    /// Build a runner from puzzle JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = PuzzleConfig::from_json(json)?;
        Ok(Self::new(WordSearch::new(&config)?))
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Fit the grid into the canvas area. Applied immediately so the
    /// next queued pointer event is hit-tested against the new layout.
    pub fn resize(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.search.configure(Rect::new(x, y, width, height));
        self.buffers.fill(&self.search.render_state());
    }

    /// Apply queued input, then rebuild the render buffers.
    pub fn tick(&mut self) {
        self.events.clear();

        let palette_len = self.search.matcher().palette().len();
        let target_count = self.search.matcher().target_count();
        for found in self.search.process(&mut self.input) {
            self.events.push(PuzzleEvent::word_found(&found, palette_len));
            if found.total_found == target_count {
                log::info!("{}: all {} words found", self.search.name(), found.total_found);
                self.events.push(PuzzleEvent::complete(found.total_found));
            }
        }

        self.buffers.fill(&self.search.render_state());
    }

    pub fn search(&self) -> &WordSearch {
        &self.search
    }

    pub fn events(&self) -> &[PuzzleEvent] {
        &self.events
    }

    pub fn buffers(&self) -> &RenderBuffers {
        &self.buffers
    }

    // ---- Pointer accessors for host reads ----

    pub fn quads_ptr(&self) -> *const f32 {
        self.buffers.quads_ptr()
    }

    pub fn quad_count(&self) -> u32 {
        self.buffers.quad_count()
    }

    pub fn selection_start(&self) -> u32 {
        self.buffers.selection_start
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.buffers.lines_ptr()
    }

    pub fn line_count(&self) -> u32 {
        self.buffers.line_count()
    }

    pub fn glyphs_ptr(&self) -> *const f32 {
        self.buffers.glyphs_ptr()
    }

    pub fn glyph_count(&self) -> u32 {
        self.buffers.glyph_count()
    }

    pub fn line_color_ptr(&self) -> *const f32 {
        self.buffers.line_color.as_ptr()
    }

    pub fn glyph_color_ptr(&self) -> *const f32 {
        self.buffers.glyph_color.as_ptr()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    // ---- Puzzle queries ----

    pub fn found_count(&self) -> u32 {
        self.search.found_count() as u32
    }

    pub fn word_count(&self) -> u32 {
        self.search.matcher().target_count() as u32
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.search.matcher().words().get(index).map(String::as_str)
    }

    pub fn is_found(&self, index: usize) -> bool {
        self.word(index)
            .map(|w| self.search.matcher().is_found(w))
            .unwrap_or(false)
    }
}
