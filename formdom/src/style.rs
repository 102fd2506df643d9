/// Inline style overrides.
///
/// `None` means "not set inline", so whatever the stylesheet says applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub display: Option<String>,
    pub color: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True when no inline override is present.
    pub fn is_empty(&self) -> bool {
        self.display.is_none() && self.color.is_none()
    }
}
