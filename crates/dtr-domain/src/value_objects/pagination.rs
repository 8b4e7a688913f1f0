//! Cursor based pagination
//!
//! The cursor is the identifier of the last item handed out on the previous
//! page. Resuming scans the ordered collection for that identifier and
//! continues right after it. There is no snapshot: a page reflects the
//! collection as it is when the page is requested.
//!
//! Edge policies:
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | empty collection | empty page, no cursor, whatever cursor was sent |
//! | cursor item was removed | [`Error::CursorNotFound`] |
//! | page reached the end | no cursor |
//! | more items follow | cursor = id of the last item on the page |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A page request
///
/// `limit == 0` means no limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Maximum number of items on the page
    pub limit: u32,
    /// Opaque resume marker from the previous page
    pub cursor: Option<String>,
}

impl PaginationRequest {
    /// Create a request from its parts
    pub fn new(limit: u32, cursor: Option<String>) -> Self {
        Self { limit, cursor }
    }

    /// First page with the given limit
    pub fn first(limit: u32) -> Self {
        Self {
            limit,
            cursor: None,
        }
    }

    /// Everything from the start
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Same limit, resuming at `cursor`
    #[must_use]
    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Limit as a page size, `None` when unlimited
    pub fn page_size(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit as usize)
    }
}

/// A page of items plus the marker to fetch the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationResult<T> {
    /// Items in collection order
    pub items: Vec<T>,
    /// Resume marker, `None` once the collection is exhausted
    pub cursor: Option<String>,
}

impl<T> PaginationResult<T> {
    /// Create a page from its parts
    pub fn new(items: Vec<T>, cursor: Option<String>) -> Self {
        Self { items, cursor }
    }

    /// Empty, exhausted page
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
        }
    }

    /// True when there is no next page
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Transform the cursor, keeping the items
    pub fn map_cursor<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        Self {
            items: self.items,
            cursor: self.cursor.map(f),
        }
    }
}

/// Cut one page out of an ordered collection
///
/// `key` extracts the identifier the cursor refers to. `matches` is the
/// listing filter; it is applied after the cursor has been located in the
/// full collection, so a cursor stays valid while its item exists even if
/// the item would not pass the filter.
pub fn paginate<'a, T, I, K, F>(
    items: I,
    request: &PaginationRequest,
    key: K,
    mut matches: F,
) -> Result<PaginationResult<T>>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    K: Fn(&T) -> &str,
    F: FnMut(&T) -> bool,
{
    let mut iter = items.into_iter().peekable();
    if iter.peek().is_none() {
        return Ok(PaginationResult::empty());
    }

    if let Some(cursor) = request.cursor.as_deref() {
        if !iter.by_ref().any(|item| key(item) == cursor) {
            return Err(Error::cursor_not_found(cursor));
        }
    }

    let page_size = request.page_size();
    let mut page: Vec<T> = Vec::new();
    for item in iter {
        if !matches(item) {
            continue;
        }
        if page_size.is_some_and(|size| page.len() == size) {
            let cursor = page.last().map(|last| key(last).to_string());
            return Ok(PaginationResult::new(page, cursor));
        }
        page.push(item.clone());
    }

    Ok(PaginationResult::new(page, None))
}
