/// Loading overlay state: a spinner while the hand tracker loads, then an
/// enter button that dismisses the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayState {
    loading: bool,
    visible: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            loading: true,
            visible: true,
        }
    }
}

impl OverlayState {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn spinner_visible(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn enter_visible(&self) -> bool {
        !self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Enter button pressed. Ignored while still loading; returns whether
    /// the overlay was dismissed.
    pub fn enter(&mut self) -> bool {
        if self.loading || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
