//! Category filter, generation sorter and page window.
//!
//! All three are pure: they borrow records and return new vectors of
//! references, leaving the caller's collection untouched.

use crate::model::{Category, ProjectRecord};
use serde::Serialize;
use tracing::debug;

/// The visible slice of a filtered and sorted listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow<'a> {
    /// First `min(visible_count, total)` records.
    pub shown: Vec<&'a ProjectRecord>,
    /// True when records remain past the window.
    pub has_more: bool,
    /// Length of the list the window was taken from.
    pub total: usize,
}

impl PageWindow<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.shown.len()
    }
}

/// Returns true if `record` belongs under `category`.
#[must_use]
pub fn matches_category(record: &ProjectRecord, category: Category) -> bool {
    category.is_wildcard() || record.field().contains(category)
}

/// Keep records whose field tags contain `category`, in input order.
///
/// `Category::All` keeps everything.
pub fn filter_by_category<'a, I>(records: I, category: Category) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_category(record, category))
        .collect()
}

/// Order by generation, newest first. Equal generations keep input order.
pub fn sort_by_generation_desc<'a, I>(records: I) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut sorted: Vec<&'a ProjectRecord> = records.into_iter().collect();
    // slice::sort_by_key is stable.
    sorted.sort_by_key(|record| std::cmp::Reverse(record.generation()));
    sorted
}

/// Take the first `visible_count` records and report whether any remain.
pub fn window<'a, I>(records: I, visible_count: usize) -> PageWindow<'a>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut shown: Vec<&'a ProjectRecord> = records.into_iter().collect();
    let total = shown.len();
    shown.truncate(visible_count);
    PageWindow {
        shown,
        has_more: total > visible_count,
        total,
    }
}

/// Map a possibly negative count to a window size. Negative means zero.
#[must_use]
pub fn clamp_visible_count(raw: i64) -> usize {
    usize::try_from(raw.max(0)).unwrap_or(usize::MAX)
}

/// Filter, sort and window in one pass.
#[must_use]
pub fn list_projects(
    records: &[ProjectRecord],
    category: Category,
    visible_count: usize,
) -> PageWindow<'_> {
    let filtered = filter_by_category(records, category);
    let sorted = sort_by_generation_desc(filtered);
    let page = window(sorted, visible_count);
    debug!(
        %category,
        visible_count,
        total = page.total,
        shown = page.shown.len(),
        has_more = page.has_more,
        "listed projects"
    );
    page
}
