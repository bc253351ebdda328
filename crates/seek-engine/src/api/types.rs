use bytemuck::{Pod, Zeroable};

use crate::renderer::palette::Color;

/// A grid coordinate. Cells carry no identity beyond their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Result of a release that completed a target word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFound {
    /// The target word, as authored.
    pub word: String,
    /// Position of the word in the target list.
    pub index: usize,
    /// Number of distinct words found so far, including this one.
    pub total_found: usize,
    /// Highlight colour assigned to the word's cells.
    pub color: Color,
}

/// Event kind: a word was found. `a` = word index, `b` = total found, `c` = palette slot.
pub const EVENT_WORD_FOUND: f32 = 1.0;
/// Event kind: every target word has been found. `a` = total found.
pub const EVENT_PUZZLE_COMPLETE: f32 = 2.0;

/// A puzzle event handed to the host as four floats.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PuzzleEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl PuzzleEvent {
    pub const FLOATS: usize = 4;

    pub fn word_found(found: &WordFound, palette_len: usize) -> Self {
        let slot = (found.total_found - 1) % palette_len.max(1);
        Self {
            kind: EVENT_WORD_FOUND,
            a: found.index as f32,
            b: found.total_found as f32,
            c: slot as f32,
        }
    }

    pub fn complete(total_found: usize) -> Self {
        Self {
            kind: EVENT_PUZZLE_COMPLETE,
            a: total_found as f32,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<PuzzleEvent>(), 16);
        assert_eq!(PuzzleEvent::FLOATS, 4);
    }

    #[test]
    fn word_found_event_carries_palette_slot() {
        let found = WordFound {
            word: "SOMERA".into(),
            index: 0,
            total_found: 9,
            color: Color::WHITE,
        };
        let event = PuzzleEvent::word_found(&found, 7);
        assert_eq!(event.kind, EVENT_WORD_FOUND);
        assert_eq!(event.b, 9.0);
        assert_eq!(event.c, 1.0); // (9 - 1) % 7
    }
}
