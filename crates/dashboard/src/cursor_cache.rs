//! Page-indexed cache of pagination cursors.
//!
//! Slot `i` holds the cursor needed to fetch page `i + 1`; slot 0 is the
//! `None` sentinel for the start of the collection. Slots are only ever
//! appended at the tail, so the cache has no gaps.

use wifi_dash_core::Cursor;

use crate::error::CursorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorCache {
    slots: Vec<Option<Cursor>>,
}

impl Default for CursorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorCache {
    #[must_use]
    pub fn new() -> Self {
        Self { slots: vec![None] }
    }

    /// Drops every cursor except the start-of-collection sentinel.
    pub fn reset(&mut self) {
        self.slots.truncate(1);
        if let Some(first) = self.slots.first_mut() {
            *first = None;
        }
    }

    /// Cursor for requesting the 0-indexed page `page_index`.
    pub fn get(&self, page_index: usize) -> Result<Option<&Cursor>, CursorError> {
        self.slots
            .get(page_index)
            .map(Option::as_ref)
            .ok_or(CursorError::IndexOutOfRange { index: page_index, len: self.slots.len() })
    }

    /// Records the continuation cursor revealed by fetching `page_index`.
    ///
    /// Returns `true` when the cache grew. A slot that already exists is left
    /// untouched.
    pub fn append(&mut self, page_index: usize, cursor: Cursor) -> Result<bool, CursorError> {
        let slot = page_index.saturating_add(1);
        match slot.cmp(&self.slots.len()) {
            std::cmp::Ordering::Equal => {
                tracing::debug!(page = page_index + 1, %cursor, "cursor cached");
                self.slots.push(Some(cursor));
                Ok(true)
            },
            std::cmp::Ordering::Less => {
                if self.slots.get(slot).and_then(Option::as_ref) != Some(&cursor) {
                    tracing::debug!(
                        page = page_index + 1,
                        %cursor,
                        "server returned a different cursor for a cached page, keeping cached one"
                    );
                }
                Ok(false)
            },
            std::cmp::Ordering::Greater => {
                Err(CursorError::IndexOutOfRange { index: page_index, len: self.slots.len() })
            },
        }
    }

    /// Number of slots, sentinel included. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
