//! Display theme preference.
//!
//! # Responsibility
//! - Define the two-valued display flag and its persisted wire form.
//!
//! # Invariants
//! - Wire form is exactly `"dark"` or `"light"`.
//! - Any other persisted value decodes to the default (`Light`).

/// Global display preference applied by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Theme {
    /// Returns the persisted wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decodes an exact wire string; unknown values return `None`.
    ///
    /// Matching is exact and case-sensitive: only `"dark"` selects `Dark`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Convenience flag for view layers that key off "dark mode on".
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
