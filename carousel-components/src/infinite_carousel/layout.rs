//! Container and content size tracking.

use carousel_ui::PxSize;
use tracing::debug;

/// Fraction of the container width a single page occupies.
pub const PAGE_RATIO: f32 = 0.5;

/// What a layout report changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LayoutChange {
    /// Same size as before; nothing to do.
    Unchanged,
    /// Sizes changed but the carousel still cannot scroll.
    NotReady,
    /// Both widths are known for the first time.
    FirstReady,
    /// A dimension changed after the carousel became ready.
    Resized,
}

#[derive(Debug, Default)]
pub(crate) struct LayoutCoordinator {
    container: PxSize,
    content: PxSize,
    anchored: bool,
}

impl LayoutCoordinator {
    pub(crate) fn container(&self) -> PxSize {
        self.container
    }

    pub(crate) fn content(&self) -> PxSize {
        self.content
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.container.width.is_positive() && self.content.width.is_positive()
    }

    pub(crate) fn page_width(&self) -> f32 {
        self.container.width.to_f32() * PAGE_RATIO
    }

    pub(crate) fn on_container(&mut self, size: PxSize) -> LayoutChange {
        if self.container == size {
            return LayoutChange::Unchanged;
        }
        debug!(width = size.width.raw(), height = size.height.raw(), "container resized");
        self.container = size;
        self.classify()
    }

    pub(crate) fn on_content(&mut self, size: PxSize) -> LayoutChange {
        if self.content == size {
            return LayoutChange::Unchanged;
        }
        debug!(width = size.width.raw(), height = size.height.raw(), "content resized");
        self.content = size;
        self.classify()
    }

    fn classify(&mut self) -> LayoutChange {
        if !self.is_ready() {
            LayoutChange::NotReady
        } else if !self.anchored {
            self.anchored = true;
            LayoutChange::FirstReady
        } else {
            LayoutChange::Resized
        }
    }
}
