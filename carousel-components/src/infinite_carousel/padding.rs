//! Padded page addressing for the infinite loop.
//!
//! The caller's `n` pages are laid out as `n + 4` slots: the last two pages are
//! repeated in front and the first two behind, so a four-page carousel reads
//! `3 4 | 1 2 3 4 | 1 2`. Slots `2..=n + 1` are canonical; the rest are
//! boundary duplicates. No page list is ever concatenated, the mapping below
//! is the only place slot indices are interpreted.

use super::ConfigurationError;

/// Number of duplicate slots on each side of the canonical run.
pub const DUPLICATES_PER_SIDE: usize = 2;

/// Minimum page count the duplication scheme can pad from.
pub const MIN_PAGE_COUNT: usize = DUPLICATES_PER_SIDE;

/// Maps between canonical page indices and padded slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PagePadding {
    page_count: usize,
}

/// One slot of the padded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddedSlot {
    /// Index in the padded sequence.
    pub padded: usize,
    /// Index of the caller's page rendered in this slot.
    pub canonical: usize,
    /// Whether this slot is a boundary duplicate.
    pub duplicate: bool,
}

impl PagePadding {
    /// Creates the mapping for `page_count` caller pages.
    pub fn new(page_count: usize) -> Result<Self, ConfigurationError> {
        if page_count < MIN_PAGE_COUNT {
            return Err(ConfigurationError::TooFewPages { count: page_count });
        }
        Ok(Self { page_count })
    }

    /// Number of caller pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of padded slots, always `page_count + 4`.
    pub fn padded_len(&self) -> usize {
        self.page_count + 2 * DUPLICATES_PER_SIDE
    }

    /// Padded slot of the first caller page.
    pub fn first_canonical(&self) -> usize {
        DUPLICATES_PER_SIDE
    }

    /// Padded slot of the last caller page.
    pub fn last_canonical(&self) -> usize {
        self.page_count + DUPLICATES_PER_SIDE - 1
    }

    /// Padded slot holding the canonical copy of caller page `canonical`.
    ///
    /// # Panics
    ///
    /// Panics if `canonical` is not a valid caller page index.
    pub fn canonical_to_padded(&self, canonical: usize) -> usize {
        assert!(
            canonical < self.page_count,
            "canonical page {canonical} out of range for {} pages",
            self.page_count
        );
        canonical + DUPLICATES_PER_SIDE
    }

    /// Caller page rendered in padded slot `padded`.
    ///
    /// # Panics
    ///
    /// Panics if `padded` is outside the padded sequence.
    pub fn padded_to_canonical(&self, padded: usize) -> usize {
        assert!(
            padded < self.padded_len(),
            "padded slot {padded} out of range for {} slots",
            self.padded_len()
        );
        (padded + self.page_count - DUPLICATES_PER_SIDE) % self.page_count
    }

    /// Whether `padded` is a boundary duplicate.
    pub fn is_duplicate(&self, padded: usize) -> bool {
        padded < self.first_canonical() || padded > self.last_canonical()
    }

    /// Canonical slot that renders the same page as the duplicate `padded`.
    ///
    /// Returns `None` for canonical slots. Leading duplicates map forward by
    /// `page_count`, trailing duplicates map back by `page_count`.
    pub fn critical_target(&self, padded: usize) -> Option<usize> {
        if padded < self.first_canonical() {
            Some(padded + self.page_count)
        } else if padded > self.last_canonical() {
            Some(padded - self.page_count)
        } else {
            None
        }
    }

    /// Iterates over every padded slot in order.
    pub fn slots(&self) -> impl Iterator<Item = PaddedSlot> + '_ {
        (0..self.padded_len()).map(|padded| PaddedSlot {
            padded,
            canonical: self.padded_to_canonical(padded),
            duplicate: self.is_duplicate(padded),
        })
    }
}

/// Scroll offset that centers padded slot `padded` in the container.
///
/// `-(round((padded - 1) * page_width + page_width / 2))`, which assumes a page
/// is half the container wide.
pub fn page_center_offset(padded: usize, page_width: f32) -> f32 {
    -((padded as f32 - 1.0) * page_width + page_width / 2.0).round()
}
