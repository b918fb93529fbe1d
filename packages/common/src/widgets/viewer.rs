/// Lightbox state over a list of `len` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Input that can drive the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A thumbnail at this position was clicked.
    Select(usize),
    Previous,
    Next,
    /// Escape key, backdrop click, or the close button.
    Close,
}

impl ViewerEvent {
    /// Keyboard mapping used while the viewer is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerEvent::Close),
            "ArrowLeft" => Some(ViewerEvent::Previous),
            "ArrowRight" => Some(ViewerEvent::Next),
            _ => None,
        }
    }
}

/// Page-level side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEffect {
    /// Viewer opened: suspend background scrolling.
    Suspend,
    /// Viewer closed: give scrolling back.
    Release,
}

/// Image lightbox with circular navigation.
#[derive(Debug, Clone, Default)]
pub struct ImageViewer {
    state: ViewerState,
    len: usize,
}

impl ImageViewer {
    pub fn new(len: usize) -> Self {
        Self {
            state: ViewerState::Closed,
            len,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Background scrolling is suspended exactly while the viewer is open.
    pub fn scroll_suspended(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// `"3 / 12"` while open.
    pub fn position_label(&self) -> Option<String> {
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }

    /// Index that `Previous` would move to from `index`.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len - 1) % self.len
    }

    /// Index that `Next` would move to from `index`.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len
    }

    /// Apply an event, returning the scroll effect of the transition, if any.
    ///
    /// Navigation events are ignored while closed; selecting an index outside
    /// the list is ignored.
    pub fn handle(&mut self, event: ViewerEvent) -> Option<ScrollEffect> {
        let (next, effect) = match (self.state, event) {
            (ViewerState::Closed, ViewerEvent::Select(index)) if index < self.len => {
                (ViewerState::Open { index }, Some(ScrollEffect::Suspend))
            }
            (ViewerState::Open { .. }, ViewerEvent::Select(index)) if index < self.len => {
                (ViewerState::Open { index }, None)
            }
            (ViewerState::Open { index }, ViewerEvent::Previous) => (
                ViewerState::Open {
                    index: self.previous_index(index),
                },
                None,
            ),
            (ViewerState::Open { index }, ViewerEvent::Next) => (
                ViewerState::Open {
                    index: self.next_index(index),
                },
                None,
            ),
            (ViewerState::Open { .. }, ViewerEvent::Close) => {
                (ViewerState::Closed, Some(ScrollEffect::Release))
            }
            (state, _) => (state, None),
        };
        self.state = next;
        effect
    }
}
