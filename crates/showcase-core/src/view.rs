//! Selection/reveal state for one gallery view, and the gallery that pairs it
//! with its records.
//!
//! State changes only happen through [`ViewState::select_category`] and
//! [`ViewState::reveal_more`]. Each transition hands back a [`ViewCommand`]
//! for the rendering layer to run once it has redrawn; nothing here schedules
//! anything.

use crate::listing::{self, PageWindow};
use crate::model::{Category, ProjectRecord};
use crate::tabs::TabSelection;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// Cards shown on mount and after every category change.
pub const INITIAL_COUNT: usize = 9;
/// Cards added per "show more".
pub const REVEAL_INCREMENT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    pub initial: usize,
    pub increment: usize,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            initial: INITIAL_COUNT,
            increment: REVEAL_INCREMENT,
        }
    }
}

/// Where a scroll command aligns its target in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    Start,
    End,
}

impl ScrollAlign {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Post-render notification emitted by a transition.
///
/// Serializes as `{ "kind", "align", "after_render" }` so a renderer knows
/// both where to scroll and whether to wait for the next paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Bring the category bar to the top of the viewport.
    ScrollToCategories,
    /// Bring the bottom of the card grid into view once the new cards render.
    ScrollToListEnd,
}

impl ViewCommand {
    #[must_use]
    pub const fn align(self) -> ScrollAlign {
        match self {
            Self::ScrollToCategories => ScrollAlign::Start,
            Self::ScrollToListEnd => ScrollAlign::End,
        }
    }

    /// True when the command must wait for the next render to finish.
    #[must_use]
    pub const fn after_render(self) -> bool {
        matches!(self, Self::ScrollToListEnd)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScrollToCategories => "scroll_to_categories",
            Self::ScrollToListEnd => "scroll_to_list_end",
        }
    }

    /// `"after_render"` or `"immediate"`.
    #[must_use]
    pub const fn timing(self) -> &'static str {
        if self.after_render() {
            "after_render"
        } else {
            "immediate"
        }
    }
}

impl Serialize for ViewCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewCommand", 3)?;
        state.serialize_field("kind", self.as_str())?;
        state.serialize_field("align", &self.align())?;
        state.serialize_field("after_render", &self.after_render())?;
        state.end()
    }
}

/// Selected category and visible card count for one mounted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    categories: TabSelection<Category>,
    visible_count: usize,
    page_size: PageSize,
}

impl ViewState {
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            categories: TabSelection::from_array(Category::TABS),
            visible_count: page_size.initial,
            page_size,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        *self.categories.current()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.categories.tabs()
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Switch category and reset the visible count, even if `category` is
    /// already selected.
    pub fn select_category(&mut self, category: Category) -> ViewCommand {
        self.categories.select_position(category.tab_index());
        self.visible_count = self.page_size.initial;
        debug!(%category, visible_count = self.visible_count, "category selected");
        ViewCommand::ScrollToCategories
    }

    /// Grow the window by one increment when the current list has more to show.
    ///
    /// Returns `None`, leaving the state untouched, when `has_more` is false.
    pub fn reveal_more(&mut self, has_more: bool) -> Option<ViewCommand> {
        if !has_more {
            return None;
        }
        self.visible_count = self.visible_count.saturating_add(self.page_size.increment);
        debug!(visible_count = self.visible_count, "revealed more");
        Some(ViewCommand::ScrollToListEnd)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}


/// Per-category record counts for the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
    pub selected: bool,
}

/// A mounted project gallery: the loaded records and their view state.
#[derive(Debug, Clone)]
pub struct Gallery {
    records: Vec<ProjectRecord>,
    state: ViewState,
}

impl Gallery {
    #[must_use]
    pub fn new(records: Vec<ProjectRecord>, page_size: PageSize) -> Self {
        Self {
            records,
            state: ViewState::new(page_size),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The cards currently visible and whether "show more" applies.
    #[must_use]
    pub fn page(&self) -> PageWindow<'_> {
        listing::list_projects(
            &self.records,
            self.state.category(),
            self.state.visible_count(),
        )
    }

    pub fn on_category_selected(&mut self, category: Category) -> ViewCommand {
        self.state.select_category(category)
    }

    pub fn on_reveal_more_requested(&mut self) -> Option<ViewCommand> {
        let has_more = self.page().has_more;
        self.state.reveal_more(has_more)
    }

    #[must_use]
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let tabs = &self.state.categories;
        tabs.tabs()
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self
                    .records
                    .iter()
                    .filter(|record| listing::matches_category(record, category))
                    .count(),
                selected: tabs.is_current(&category),
            })
            .collect()
    }
}
