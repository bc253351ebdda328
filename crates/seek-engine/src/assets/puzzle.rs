use serde::{Deserialize, Serialize};

use crate::assets::error::ConfigError;
use crate::core::grid::LetterGrid;
use crate::core::matcher::{AmbiguityGuard, GuardLine, MatchEngine};
use crate::core::selection::SelectionStrategy;
use crate::renderer::palette::{Color, Palette, RenderStyle};

/// An authored word-search puzzle. Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Human-readable name, used in log messages.
    #[serde(default)]
    pub name: String,
    /// One string per grid row; all rows the same length.
    pub grid: Vec<String>,
    /// Target words in priority order.
    pub words: Vec<String>,
    /// Highlight colours as `#RRGGBB[AA]`. Absent = built-in palette.
    #[serde(default)]
    pub palette: Option<Vec<String>>,
    #[serde(default)]
    pub strategy: SelectionStrategy,
    #[serde(default)]
    pub guards: Vec<AmbiguityGuard>,
    /// Whether a cancelled gesture is still checked for a word.
    #[serde(default)]
    pub check_on_cancel: bool,
    #[serde(default)]
    pub style: StyleConfig,
}

/// Optional overrides for [`RenderStyle`], as hex colours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub selection: Option<String>,
    #[serde(default)]
    pub lines: Option<String>,
    #[serde(default)]
    pub glyphs: Option<String>,
}

/// A validated puzzle, ready to drive a [`crate::WordSearch`].
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: String,
    pub grid: LetterGrid,
    pub matcher: MatchEngine,
    pub strategy: SelectionStrategy,
    pub check_on_cancel: bool,
    pub style: RenderStyle,
}

impl PuzzleConfig {
    /// Parse a puzzle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A config with default palette, strategy and style.
    pub fn new<S: Into<String>>(grid: impl IntoIterator<Item = S>, words: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: String::new(),
            grid: grid.into_iter().map(Into::into).collect(),
            words: words.into_iter().map(Into::into).collect(),
            palette: None,
            strategy: SelectionStrategy::default(),
            guards: Vec::new(),
            check_on_cancel: false,
            style: StyleConfig::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_guard(mut self, word: &str, line: GuardLine) -> Self {
        self.guards.push(AmbiguityGuard::new(word, line));
        self
    }

    pub fn with_check_on_cancel(mut self, check: bool) -> Self {
        self.check_on_cancel = check;
        self
    }

    /// Validate and assemble the puzzle.
    pub fn build(&self) -> Result<Puzzle, ConfigError> {
        let grid = LetterGrid::from_rows(self.grid.as_slice())?;
        let (rows, cols) = grid.dimensions();

        let mut words: Vec<String> = Vec::with_capacity(self.words.len());
        for raw in &self.words {
            let word = raw.trim().to_uppercase();
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                return Err(ConfigError::InvalidWord { word: raw.clone() });
            }
            if words.contains(&word) {
                return Err(ConfigError::DuplicateWord { word });
            }
            if grid.find(&word).is_empty() {
                log::warn!("puzzle {:?}: {} does not appear in the grid", self.name, word);
            }
            words.push(word);
        }

        let mut guards = Vec::with_capacity(self.guards.len());
        for guard in &self.guards {
            let word = guard.word.trim().to_uppercase();
            if !words.contains(&word) {
                return Err(ConfigError::UnknownGuardWord { word: guard.word.clone() });
            }
            let (index, limit) = match guard.line {
                GuardLine::Row(r) => (r, rows),
                GuardLine::Column(c) => (c, cols),
            };
            if index >= limit {
                return Err(ConfigError::GuardOutOfBounds { word, index, limit });
            }
            guards.push(AmbiguityGuard::new(word, guard.line));
        }

        let palette = match &self.palette {
            None => Palette::default(),
            Some(hexes) => {
                let colors = hexes.iter().map(|h| parse_color(h)).collect::<Result<Vec<_>, _>>()?;
                Palette::new(colors).ok_or(ConfigError::EmptyPalette)?
            }
        };

        let style = self.style.resolve()?;

        log::info!(
            "puzzle {:?}: {}x{} grid, {} words, {:?}",
            self.name,
            rows,
            cols,
            words.len(),
            self.strategy
        );

        Ok(Puzzle {
            name: self.name.clone(),
            grid,
            matcher: MatchEngine::new(words, guards, palette),
            strategy: self.strategy,
            check_on_cancel: self.check_on_cancel,
            style,
        })
    }
}

impl StyleConfig {
    fn resolve(&self) -> Result<RenderStyle, ConfigError> {
        let mut style = RenderStyle::default();
        if let Some(hex) = &self.selection {
            style.selection_color = parse_color(hex)?;
        }
        if let Some(hex) = &self.lines {
            style.line_color = parse_color(hex)?;
        }
        if let Some(hex) = &self.glyphs {
            style.glyph_color = parse_color(hex)?;
        }
        Ok(style)
    }
}

fn parse_color(hex: &str) -> Result<Color, ConfigError> {
    Color::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor { value: hex.to_string() })
}
