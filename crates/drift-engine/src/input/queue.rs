/// Input event types the backdrop understands.
/// Raw DOM measurements — aggregation into control signals happens when
/// the queue is folded at the start of a frame.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved to client coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The page scrolled to absolute offset `y`.
    Scroll { y: f32 },
    /// The viewport was resized to (width, height) CSS pixels.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and clears them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Clear pending events, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
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
    fn push_and_clear() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::Scroll { y: 140.0 });
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Scroll { y: 10.0 });
        q.push(InputEvent::Scroll { y: 30.0 });
        let ys: Vec<f32> = q
            .iter()
            .map(|e| match e {
                InputEvent::Scroll { y } => *y,
                _ => panic!("expected scroll"),
            })
            .collect();
        assert_eq!(ys, vec![10.0, 30.0]);
    }
}
