/// Mobile navigation menu toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the menu.
    pub fn navigate(&mut self) {
        self.open = false;
    }
}
