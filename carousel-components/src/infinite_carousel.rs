//! Infinite carousel that loops through its pages in both directions.
//!
//! ## Usage
//!
//! Show a small, fixed set of cards the user can drag through endlessly,
//! such as featured items or a profile picker.
//!
//! The carousel is headless: the host reports container and content sizes,
//! feeds touch events, calls [`InfiniteCarousel::tick`] once per frame, and
//! draws the [`CarouselScene`] it gets back.
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use carousel_ui::{
    Easing, Gesture, Motion, MoveOutcome, PxSize, ScrollPosition, TouchEvent, TouchTracker,
    scroll::DEFAULT_ANIMATION_DURATION,
};
use derive_setters::Setters;
use tracing::{debug, trace};

mod gesture;
mod layout;
mod padding;
mod rounding;

pub use gesture::GesturePhase;
pub use layout::PAGE_RATIO;
pub use padding::{DUPLICATES_PER_SIDE, MIN_PAGE_COUNT, PaddedSlot, PagePadding, page_center_offset};

use gesture::DragMachine;
use layout::{LayoutChange, LayoutCoordinator};

const DEFAULT_DRAG_SENSITIVITY: f32 = 0.75;

/// Errors raised while configuring a carousel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// The duplication scheme needs at least two pages to pad from.
    #[error("an infinite carousel needs at least 2 pages, got {count}")]
    TooFewPages {
        /// Number of pages supplied.
        count: usize,
    },
    /// Drag sensitivity must be a positive, finite factor.
    #[error("drag sensitivity must be positive and finite, got {0}")]
    InvalidDragSensitivity(f32),
}

/// Configuration arguments for [`InfiniteCarousel`].
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct CarouselArgs {
    /// Factor applied to the finger's travel before it moves the content.
    pub drag_sensitivity: f32,
    /// Duration of the snap animation after a release.
    pub animation_duration: Duration,
    /// Easing curve of the snap animation.
    pub easing: Easing,
    /// Caller page shown once the layout is first ready.
    pub initial_page: usize,
    /// Whether touch input moves the carousel.
    pub user_scroll_enabled: bool,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::default(),
            initial_page: 0,
            user_scroll_enabled: true,
        }
    }
}

impl CarouselArgs {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(ConfigurationError::InvalidDragSensitivity(
                self.drag_sensitivity,
            ));
        }
        Ok(())
    }
}

/// Everything a page render function gets to see.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFrame {
    /// Current rendered scroll offset.
    pub animated_position: f32,
    /// Width of one page.
    pub page_width: f32,
    /// Scroll offset at which this page sits in the center.
    pub page_offset: f32,
    /// Slot in the padded sequence.
    pub padded_index: usize,
    /// Index of the caller's page.
    pub canonical_index: usize,
    /// Whether the slot is a boundary duplicate.
    pub duplicate: bool,
}

/// A page render function.
pub type Page<R> = Arc<dyn Fn(&PageFrame) -> R + Send + Sync>;

/// Wraps a closure as a [`Page`].
pub fn page<R>(render: impl Fn(&PageFrame) -> R + Send + Sync + 'static) -> Page<R> {
    Arc::new(render)
}

/// One rendered slot of the padded sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlot<R> {
    /// Inputs the page was rendered with.
    pub frame: PageFrame,
    /// Box the page is laid out in: `[page_width, container_height]`.
    pub size: [f32; 2],
    /// Output of the page render function.
    pub content: R,
}

/// Render output: a horizontal strip translated by `translate_x`.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselScene<R> {
    /// Horizontal translation applied to the whole strip.
    pub translate_x: f32,
    /// Every padded slot, left to right.
    pub slots: Vec<PageSlot<R>>,
}

/// Controller and state for an infinite carousel.
pub struct InfiniteCarousel<R> {
    args: CarouselArgs,
    pages: Vec<Page<R>>,
    padding: PagePadding,
    layout: LayoutCoordinator,
    scroll: ScrollPosition,
    current_page: usize,
    initial_page: usize,
    drag: DragMachine,
    touches: TouchTracker,
}

impl<R> std::fmt::Debug for InfiniteCarousel<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteCarousel")
            .field("args", &self.args)
            .field("page_count", &self.pages.len())
            .field("layout", &self.layout)
            .field("scroll", &self.scroll)
            .field("current_page", &self.current_page)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl<R> InfiniteCarousel<R> {
    /// Creates a carousel over `pages`.
    ///
    /// The carousel stays inert until both the container and content widths
    /// have been reported.
    ///
    /// ```
    /// use carousel_components::infinite_carousel::{CarouselArgs, InfiniteCarousel, page};
    ///
    /// let pages = ["Leon", "Cat", "Elephant", "Unicorn"]
    ///     .map(|name| page(move |_| name.to_string()))
    ///     .to_vec();
    /// let carousel = InfiniteCarousel::new(CarouselArgs::default(), pages).unwrap();
    /// assert!(!carousel.is_ready());
    /// assert_eq!(carousel.page_count(), 4);
    /// ```
    pub fn new(args: CarouselArgs, pages: Vec<Page<R>>) -> Result<Self, ConfigurationError> {
        args.validate()?;
        let padding = PagePadding::new(pages.len())?;
        let scroll = ScrollPosition::new(args.animation_duration, args.easing);
        let initial_page = args.initial_page.min(padding.page_count() - 1);
        Ok(Self {
            args,
            pages,
            padding,
            layout: LayoutCoordinator::default(),
            scroll,
            current_page: 0,
            initial_page,
            drag: DragMachine::default(),
            touches: TouchTracker::default(),
        })
    }

    /// Configuration the carousel was built with.
    pub fn args(&self) -> &CarouselArgs {
        &self.args
    }

    /// Number of caller pages.
    pub fn page_count(&self) -> usize {
        self.padding.page_count()
    }

    /// Padded index mapping in use.
    pub fn padding(&self) -> &PagePadding {
        &self.padding
    }

    /// Current page as a padded slot index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current page as an index into the caller's pages.
    pub fn current_canonical_page(&self) -> usize {
        self.padding.padded_to_canonical(self.current_page)
    }

    /// Logical scroll offset.
    pub fn scroll_position(&self) -> f32 {
        self.scroll.position()
    }

    /// Rendered scroll offset.
    pub fn animated_position(&self) -> f32 {
        self.scroll.animated_position()
    }

    /// Lower bound of the scroll range.
    pub fn min_offset(&self) -> f32 {
        self.scroll.min_offset()
    }

    /// Width of one page; `0.0` until the container has been measured.
    pub fn page_width(&self) -> f32 {
        self.layout.page_width()
    }

    /// Width of the full padded strip at the current page width.
    ///
    /// Hosts that do not measure the content can report this as the content
    /// width.
    pub fn strip_width(&self) -> f32 {
        self.padding.padded_len() as f32 * self.page_width()
    }

    /// Last reported container size.
    pub fn container_size(&self) -> PxSize {
        self.layout.container()
    }

    /// Last reported content size.
    pub fn content_size(&self) -> PxSize {
        self.layout.content()
    }

    /// Whether both widths are known and the carousel responds to input.
    pub fn is_ready(&self) -> bool {
        self.layout.is_ready()
    }

    /// Current drag phase.
    pub fn phase(&self) -> GesturePhase {
        self.drag.phase()
    }

    /// Whether a snap or programmatic scroll animation is running.
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Reports a new container size. Returns `false` if nothing changed.
    pub fn on_container_layout(&mut self, size: PxSize) -> bool {
        let change = self.layout.on_container(size);
        self.apply_layout_change(change)
    }

    /// Reports a new content size. Returns `false` if nothing changed.
    pub fn on_content_layout(&mut self, size: PxSize) -> bool {
        let change = self.layout.on_content(size);
        self.apply_layout_change(change)
    }

    /// Feeds a raw touch event.
    pub fn handle_touch(&mut self, event: TouchEvent, now: Instant) {
        if let Some(gesture) = self.touches.handle(event) {
            self.handle_gesture(gesture, now);
        }
    }

    /// Feeds a normalized gesture signal.
    ///
    /// Grants and moves are ignored while the layout is not ready; everything
    /// is ignored when user scrolling is disabled.
    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) {
        if !self.args.user_scroll_enabled {
            return;
        }
        match gesture {
            Gesture::Grant { .. } | Gesture::Move { .. } if !self.is_ready() => {
                trace!(?gesture, "gesture ignored before layout");
            }
            Gesture::Grant { .. } => self.drag.grant(self.scroll.position()),
            Gesture::Move { dx } => {
                if let Some(target) = self.drag.drag_target(dx, self.args.drag_sensitivity) {
                    self.scroll.jump_to(target);
                }
            }
            Gesture::Release { .. } => {
                if self.drag.release() {
                    self.round_to_nearest_page(now);
                }
            }
            Gesture::Terminate => self.drag.terminate(),
        }
    }

    /// Advances animations to `now`; call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.scroll.tick(now).is_some() {
            self.complete();
        }
    }

    /// Snaps to the page whose center is nearest the current offset.
    ///
    /// Does nothing while the layout is not ready.
    pub fn round_to_nearest_page(&mut self, now: Instant) {
        if !self.is_ready() {
            self.drag.settle();
            return;
        }
        let Some(page) = rounding::nearest_page(
            self.scroll.position(),
            self.layout.container().width.to_f32(),
            self.page_width(),
            &self.padding,
        ) else {
            self.drag.settle();
            return;
        };
        debug!(
            from = self.current_page,
            to = page,
            position = self.scroll.position(),
            "snapping to nearest page"
        );
        self.move_to_page(page, Motion::Animated, now);
    }

    /// Jumps to caller page `page` without animation.
    ///
    /// Out-of-range pages are clamped to the last page. Before the layout is
    /// ready this only changes the page shown first.
    pub fn jump_to_page(&mut self, page: usize) {
        let page = self.clamp_page(page);
        if !self.is_ready() {
            self.initial_page = page;
            return;
        }
        self.reanchor(self.padding.canonical_to_padded(page));
    }

    /// Animates to caller page `page`.
    ///
    /// Out-of-range pages are clamped to the last page. Before the layout is
    /// ready this behaves like [`jump_to_page`](Self::jump_to_page).
    pub fn scroll_to_page(&mut self, page: usize, now: Instant) {
        if !self.is_ready() {
            self.jump_to_page(page);
            return;
        }
        let padded = self.padding.canonical_to_padded(self.clamp_page(page));
        self.drag.begin_settling();
        self.move_to_page(padded, Motion::Animated, now);
    }

    /// Replaces the page list, keeping the current caller page when it still
    /// exists.
    pub fn set_pages(&mut self, pages: Vec<Page<R>>) -> Result<(), ConfigurationError> {
        let padding = PagePadding::new(pages.len())?;
        let last = padding.page_count() - 1;
        let canonical = self.current_canonical_page().min(last);
        debug!(
            from = self.padding.page_count(),
            to = padding.page_count(),
            "page list replaced"
        );
        self.pages = pages;
        self.padding = padding;
        self.initial_page = self.initial_page.min(last);
        if self.is_ready() {
            self.sync_bounds();
            self.reanchor(self.padding.canonical_to_padded(canonical));
        } else {
            self.current_page = 0;
        }
        Ok(())
    }

    /// Renders every padded slot.
    pub fn scene(&self) -> CarouselScene<R> {
        let page_width = self.page_width();
        let height = self.layout.container().height.to_f32();
        let animated_position = self.scroll.animated_position();
        let slots = self
            .padding
            .slots()
            .map(|slot| {
                let frame = PageFrame {
                    animated_position,
                    page_width,
                    page_offset: page_center_offset(slot.padded, page_width),
                    padded_index: slot.padded,
                    canonical_index: slot.canonical,
                    duplicate: slot.duplicate,
                };
                let content = (self.pages[slot.canonical])(&frame);
                PageSlot {
                    frame,
                    size: [page_width, height],
                    content,
                }
            })
            .collect();
        CarouselScene {
            translate_x: animated_position,
            slots,
        }
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.padding.page_count() - 1)
    }

    fn apply_layout_change(&mut self, change: LayoutChange) -> bool {
        match change {
            LayoutChange::Unchanged => return false,
            LayoutChange::NotReady => {
                // A drag anchored to the old layout has nothing to snap to.
                self.drag.terminate();
            }
            LayoutChange::FirstReady => {
                self.sync_bounds();
                let first = self.padding.canonical_to_padded(self.initial_page);
                debug!(page = first, page_width = self.page_width(), "carousel ready");
                self.reanchor(first);
            }
            LayoutChange::Resized => {
                self.sync_bounds();
                self.reanchor(self.current_page);
                self.check_critical_page();
            }
        }
        true
    }

    fn sync_bounds(&mut self) {
        // Never scroll past the padded strip, whatever the host measured.
        let content = self
            .layout
            .content()
            .width
            .to_f32()
            .min(self.strip_width());
        self.scroll
            .set_bounds(self.layout.container().width.to_f32(), content);
    }

    fn move_to_page(&mut self, page: usize, motion: Motion, now: Instant) {
        self.current_page = page;
        let target = page_center_offset(page, self.page_width());
        if let MoveOutcome::Settled(()) = self.scroll.move_to(target, motion, now, ()) {
            self.complete();
        }
    }

    /// Silent, non-animated move to `page`. A drag in progress keeps its
    /// finger-to-content offset; a snap in progress is finished.
    fn reanchor(&mut self, page: usize) {
        let before = self.scroll.position();
        self.current_page = page;
        self.scroll
            .jump_to(page_center_offset(page, self.page_width()));
        self.drag.shift_anchor(self.scroll.position() - before);
        self.drag.settle();
    }

    fn complete(&mut self) {
        self.drag.settle();
        self.check_critical_page();
    }

    fn check_critical_page(&mut self) {
        if let Some(target) = self.padding.critical_target(self.current_page) {
            debug!(
                from = self.current_page,
                to = target,
                page = self.padding.padded_to_canonical(target),
                "re-anchoring from duplicate page"
            );
            self.reanchor(target);
        }
    }
}
