//! Tab bar selection shared by the project gallery and the recruit explainer.

use std::fmt;

/// Returned when a tab outside the bar is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab {
    pub got: String,
}

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab '{}' is not in this tab bar", self.got)
    }
}

impl std::error::Error for UnknownTab {}

/// An ordered, non-empty list of tabs plus the currently selected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection<T> {
    tabs: Vec<T>,
    current: usize,
}

impl<T: Clone + PartialEq + fmt::Debug> TabSelection<T> {
    /// Build a tab bar with the first tab selected.
    ///
    /// Returns `None` when `tabs` is empty.
    pub fn new(tabs: impl IntoIterator<Item = T>) -> Option<Self> {
        let tabs: Vec<T> = tabs.into_iter().collect();
        if tabs.is_empty() {
            return None;
        }
        Some(Self { tabs, current: 0 })
    }

    /// Build a tab bar from a fixed, non-empty array. An empty array is a
    /// compile error.
    #[must_use]
    pub fn from_array<const N: usize>(tabs: [T; N]) -> Self {
        const { assert!(N > 0, "a tab bar needs at least one tab") };
        Self {
            tabs: tabs.into(),
            current: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.tabs[self.current]
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    #[must_use]
    pub fn is_current(&self, tab: &T) -> bool {
        self.current() == tab
    }

    /// Select `tab`. Unknown tabs leave the current selection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTab`] if `tab` is not part of this bar.
    pub fn select(&mut self, tab: &T) -> Result<(), UnknownTab> {
        let Some(idx) = self.tabs.iter().position(|t| t == tab) else {
            return Err(UnknownTab {
                got: format!("{tab:?}"),
            });
        };
        self.current = idx;
        Ok(())
    }

    /// Select the tab at `position`, clamped to the last tab.
    pub fn select_position(&mut self, position: usize) {
        let last = self.tabs.len().saturating_sub(1);
        self.current = position.min(last);
    }
}
