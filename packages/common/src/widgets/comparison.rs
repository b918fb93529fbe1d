/// Before/after comparison slider.
///
/// `position` is the percentage of the width showing the "before" image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSlider {
    position: f64,
    dragging: bool,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self {
            position: 50.0,
            dragging: false,
        }
    }
}

impl ComparisonSlider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mouse down or touch start.
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// Mouse up, touch end, or the pointer leaving the container.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved to `client_x` over a container spanning
    /// `[left, left + width)`. Ignored unless dragging.
    pub fn pointer_moved(&mut self, client_x: f64, left: f64, width: f64) {
        if !self.dragging || width <= 0.0 {
            return;
        }
        self.position = ((client_x - left) / width * 100.0).clamp(0.0, 100.0);
    }
}
