//! Widget shell visibility.
//!
//! DESIGN
//! ======
//! Kept apart from conversation and lead-form state so the launcher/panel
//! switch can be driven without touching domain data.

/// Whether the widget shows the launcher button or the expanded panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only the launcher is rendered.
    #[default]
    Closed,
    /// The chat panel (or lead form) is rendered.
    Open,
}

impl Visibility {
    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Shell chrome state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub visibility: Visibility,
}

impl UiState {
    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Set visibility directly. Returns whether it changed.
    pub fn set_visibility(&mut self, visibility: Visibility) -> bool {
        let changed = self.visibility != visibility;
        self.visibility = visibility;
        changed
    }
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;
