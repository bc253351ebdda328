/// Pointer events the puzzle understands, in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The host aborted the gesture (e.g. the touch left the view).
    PointerCancel,
}

/// A queue of input events.
/// The host pushes events as they arrive; the puzzle drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Drop every move that is immediately followed by a move that `lands`.
    ///
    /// `lands(x, y)` must be true only for points that replace the earlier
    /// pointer position outright (for a word search: points on the grid).
    /// A following move that does not land is ignored by the consumer, so
    /// the move before it is kept.
    pub fn coalesce_moves(&mut self, lands: impl Fn(f32, f32) -> bool) {
        let mut kept: Vec<InputEvent> = Vec::with_capacity(self.events.len());
        for event in self.events.drain(..) {
            let after_move = matches!(kept.last(), Some(InputEvent::PointerMove { .. }));
            if let InputEvent::PointerMove { x, y } = event {
                if after_move && lands(x, y) {
                    kept.pop();
                }
            }
            kept.push(event);
        }
        self.events = kept;
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerCancel);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn coalesce_keeps_last_move_of_each_run() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 1.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 3.0, y: 0.0 });
        q.push(InputEvent::PointerUp { x: 3.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 9.0, y: 9.0 });

        q.coalesce_moves(|_, _| true);
        let events = q.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { x: 0.0, y: 0.0 },
                InputEvent::PointerMove { x: 3.0, y: 0.0 },
                InputEvent::PointerUp { x: 3.0, y: 0.0 },
                InputEvent::PointerMove { x: 9.0, y: 9.0 },
            ]
        );
    }

    #[test]
    fn coalesce_keeps_move_before_one_that_misses() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 1.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: -5.0, y: 0.0 });
        q.push(InputEvent::PointerUp { x: -5.0, y: 0.0 });

        q.coalesce_moves(|x, _| x >= 0.0);
        let events = q.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { x: 0.0, y: 0.0 },
                InputEvent::PointerMove { x: 2.0, y: 0.0 },
                InputEvent::PointerMove { x: -5.0, y: 0.0 },
                InputEvent::PointerUp { x: -5.0, y: 0.0 },
            ]
        );
    }
}
