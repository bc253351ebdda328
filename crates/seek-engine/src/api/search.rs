use crate::api::types::{Cell, WordFound};
use crate::assets::error::ConfigError;
use crate::assets::puzzle::{Puzzle, PuzzleConfig};
use crate::core::grid::LetterGrid;
use crate::core::layout::{BoardLayout, Rect};
use crate::core::matcher::MatchEngine;
use crate::core::selection::Selection;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::palette::RenderStyle;
use crate::systems::render::{project, RenderState};

/// Handler invoked once per newly found word.
pub type WordFoundHandler = Box<dyn FnMut(&WordFound)>;

/// One interactive word-search board.
///
/// Owns the letter grid, the live drag selection and the found-word state.
/// All mutation goes through the pointer methods; everything else is
/// read-only. Not thread-aware: the host serialises input and render calls.
pub struct WordSearch {
    name: String,
    grid: LetterGrid,
    layout: BoardLayout,
    selection: Selection,
    matcher: MatchEngine,
    style: RenderStyle,
    check_on_cancel: bool,
    handler: Option<WordFoundHandler>,
}

impl WordSearch {
    pub fn new(config: &PuzzleConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_puzzle(config.build()?))
    }

    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        let (rows, cols) = puzzle.grid.dimensions();
        Self {
            name: puzzle.name,
            grid: puzzle.grid,
            layout: BoardLayout::new(rows, cols),
            selection: Selection::new(puzzle.strategy),
            matcher: puzzle.matcher,
            style: puzzle.style,
            check_on_cancel: puzzle.check_on_cancel,
            handler: None,
        }
    }

    /// Register the found-word handler, replacing any previous one.
    /// Called synchronously from `pointer_up`/`pointer_cancel`.
    pub fn set_word_found_handler(&mut self, handler: impl FnMut(&WordFound) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Fit the grid into `bounds`. Call again on every resize.
    pub fn configure(&mut self, bounds: Rect) {
        self.layout.configure(bounds);
    }

    /// Start a gesture. Ignored when the point is off the grid.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.selection.clear();
        if let Some(cell) = self.layout.cell_at(x, y) {
            let (rows, cols) = self.grid.dimensions();
            self.selection.begin(cell, rows, cols);
            log::debug!("{}: gesture starts at {:?}", self.name, cell);
        }
    }

    /// Extend the gesture to the cell under (x, y). Off-grid points keep
    /// the previous selection.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.selection.is_active() {
            return;
        }
        if let Some(cell) = self.layout.cell_at(x, y) {
            let (rows, cols) = self.grid.dimensions();
            self.selection.update(cell, rows, cols);
        }
    }

    /// End the gesture at (x, y) and check the selection for a word.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<WordFound> {
        self.pointer_move(x, y);
        self.release(true)
    }

    /// Abort the gesture. The selection is checked only when the puzzle
    /// was configured with `check_on_cancel`.
    pub fn pointer_cancel(&mut self) -> Option<WordFound> {
        self.release(self.check_on_cancel)
    }

    fn release(&mut self, check: bool) -> Option<WordFound> {
        if !self.selection.is_active() {
            return None;
        }
        let path = self.selection.finish();
        log::debug!("{}: gesture ends with {} cells", self.name, path.len());
        if !check {
            return None;
        }

        let found = self.matcher.check(&self.grid, &path)?;
        if let Some(handler) = self.handler.as_mut() {
            handler(&found);
        }
        Some(found)
    }

    /// Dispatch a single queued event.
    pub fn handle(&mut self, event: InputEvent) -> Option<WordFound> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down(x, y);
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(x, y);
                None
            }
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::PointerCancel => self.pointer_cancel(),
        }
    }

    /// Drain and dispatch every queued event, collecting newly found words.
    pub fn process(&mut self, input: &mut InputQueue) -> Vec<WordFound> {
        let layout = &self.layout;
        input.coalesce_moves(|x, y| layout.cell_at(x, y).is_some());
        input
            .drain()
            .into_iter()
            .filter_map(|event| self.handle(event))
            .collect()
    }

    /// Draw instructions for the current state.
    pub fn render_state(&self) -> RenderState {
        project(
            &self.grid,
            &self.layout,
            &self.matcher,
            self.selection.path(),
            &self.style,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn matcher(&self) -> &MatchEngine {
        &self.matcher
    }

    /// Cells of the live drag, empty between gestures.
    pub fn selection(&self) -> &[Cell] {
        self.selection.path()
    }

    pub fn is_dragging(&self) -> bool {
        self.selection.is_active()
    }

    pub fn found_count(&self) -> usize {
        self.matcher.found_count()
    }

    pub fn is_complete(&self) -> bool {
        self.matcher.is_complete()
    }
}
