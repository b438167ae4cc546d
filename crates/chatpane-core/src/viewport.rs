//! Device detection for layout decisions
//!
//! A device counts as mobile when it reports touch input or its viewport is
//! narrower than the breakpoint. Only the delete dialog layout depends on it.

/// Viewport width (logical pixels) below which the layout goes mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether to use the mobile layout.
pub fn is_mobile(touch_capable: bool, width: f64, breakpoint: f64) -> bool {
    touch_capable || width < breakpoint
}

/// Button arrangement in dialog footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogLayout {
    /// Side by side
    #[default]
    Inline,
    /// Full-width, one per row
    Stacked,
}

impl DialogLayout {
    pub fn for_device(mobile: bool) -> Self {
        if mobile {
            DialogLayout::Stacked
        } else {
            DialogLayout::Inline
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            DialogLayout::Inline => "dialog-footer-inline",
            DialogLayout::Stacked => "dialog-footer-stacked",
        }
    }
}

/// Tracks the mobile flag across resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    touch_capable: bool,
    breakpoint: f64,
    mobile: bool,
}

impl Viewport {
    pub fn new(touch_capable: bool, breakpoint: f64) -> Self {
        Self {
            touch_capable,
            breakpoint,
            mobile: touch_capable,
        }
    }

    /// Recompute after a resize. Returns whether the flag flipped.
    pub fn resize(&mut self, width: f64) -> bool {
        let mobile = is_mobile(self.touch_capable, width, self.breakpoint);
        let changed = mobile != self.mobile;
        self.mobile = mobile;
        changed
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn dialog_layout(&self) -> DialogLayout {
        DialogLayout::for_device(self.mobile)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(false, MOBILE_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        assert!(is_mobile(false, 767.9, MOBILE_BREAKPOINT));
        assert!(!is_mobile(false, 768.0, MOBILE_BREAKPOINT));
        assert!(is_mobile(true, 1920.0, MOBILE_BREAKPOINT));
    }

    #[test]
    fn test_shrinking_window_goes_mobile() {
        let mut viewport = Viewport::default();
        viewport.resize(1024.0);
        assert!(!viewport.is_mobile());
        assert_eq!(viewport.dialog_layout(), DialogLayout::Inline);

        assert!(viewport.resize(500.0));
        assert!(viewport.is_mobile());
        assert_eq!(viewport.dialog_layout(), DialogLayout::Stacked);

        assert!(!viewport.resize(400.0));
    }

    #[test]
    fn test_touch_device_stays_mobile() {
        let mut viewport = Viewport::new(true, MOBILE_BREAKPOINT);
        assert!(viewport.is_mobile());
        assert!(!viewport.resize(2000.0));
        assert!(viewport.is_mobile());
    }
}
