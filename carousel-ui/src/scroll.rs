//! Clamped horizontal scroll position with immediate and animated moves.
//!
//! [`ScrollPosition`] owns two values:
//!
//! - the *logical* position, which jumps to the clamped target as soon as a
//!   move is issued and is what gesture and paging arithmetic read;
//! - the *animated* position, which follows the running tween and is what
//!   renderers translate content by.
//!
//! Each [`ScrollPosition::move_to`] call carries a completion token of type
//! `T`. Immediate moves hand the token straight back. Animated moves yield it
//! from [`ScrollPosition::tick`] once the tween settles, exactly once, and only
//! if no later move superseded the animation.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use carousel_ui::scroll::{Motion, MoveOutcome, ScrollPosition};
//!
//! let mut scroll = ScrollPosition::<&str>::default();
//! scroll.set_bounds(300.0, 1200.0);
//!
//! let now = Instant::now();
//! let outcome = scroll.move_to(-450.0, Motion::Animated, now, "settled");
//! assert!(matches!(outcome, MoveOutcome::Animating(_)));
//! assert_eq!(scroll.position(), -450.0);
//!
//! assert_eq!(scroll.tick(now + Duration::from_millis(50)), None);
//! assert_eq!(scroll.tick(now + Duration::from_millis(100)), Some("settled"));
//! assert_eq!(scroll.animated_position(), -450.0);
//! ```

use std::time::{Duration, Instant};

use tracing::trace;

use crate::animation::{Easing, Tween};

/// Default duration of an animated move.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(100);

/// How a move reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump to the target in one step.
    Immediate,
    /// Ease towards the target over the configured duration.
    Animated,
}

/// Identifies one [`ScrollPosition::move_to`] call.
///
/// A handle stays pending until its animation settles or a later move
/// supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveHandle {
    generation: u64,
}

impl MoveHandle {
    /// Monotonic sequence number of the move.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Result of issuing a move.
#[derive(Debug, PartialEq)]
pub enum MoveOutcome<T> {
    /// The move finished synchronously; here is its completion token.
    Settled(T),
    /// The move is animating; its token will come out of `tick`.
    Animating(MoveHandle),
}

impl<T> MoveOutcome<T> {
    /// Returns the completion token if the move settled synchronously.
    pub fn settled(self) -> Option<T> {
        match self {
            Self::Settled(token) => Some(token),
            Self::Animating(_) => None,
        }
    }
}

#[derive(Debug)]
struct Transition<T> {
    handle: MoveHandle,
    tween: Tween,
    on_complete: T,
}

/// Single authoritative horizontal scroll offset.
///
/// Offsets are `0` or negative: a position of `p` shifts content left by
/// `-p`. The valid range is `[min_offset, 0]`, where `min_offset` is derived
/// from the container and content widths.
#[derive(Debug)]
pub struct ScrollPosition<T = ()> {
    position: f32,
    animated: f32,
    min_offset: f32,
    duration: Duration,
    easing: Easing,
    generation: u64,
    transition: Option<Transition<T>>,
}

impl<T> Default for ScrollPosition<T> {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_DURATION, Easing::default())
    }
}

impl<T> ScrollPosition<T> {
    /// Creates a position at offset 0 with the given animation settings.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            position: 0.0,
            animated: 0.0,
            min_offset: 0.0,
            duration,
            easing,
            generation: 0,
            transition: None,
        }
    }

    /// Logical position: the clamped target of the latest move.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Rendered position: follows the running animation, if any.
    pub fn animated_position(&self) -> f32 {
        self.animated
    }

    /// Lower clamp bound. Always `<= 0`.
    pub fn min_offset(&self) -> f32 {
        self.min_offset
    }

    /// Returns `true` while an animated move is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Returns `true` if `handle` belongs to the running animation.
    pub fn is_pending(&self, handle: MoveHandle) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| transition.handle == handle)
    }

    /// Updates the clamp range from the container and content widths and
    /// re-clamps the current position.
    pub fn set_bounds(&mut self, container_width: f32, content_width: f32) {
        self.min_offset = (container_width - content_width).min(0.0);
        self.position = self.clamp(self.position);
        self.animated = self.clamp(self.animated);
    }

    /// Clamps an offset into `[min_offset, 0]`.
    pub fn clamp(&self, offset: f32) -> f32 {
        if offset > 0.0 {
            0.0
        } else if offset < self.min_offset {
            self.min_offset
        } else {
            offset
        }
    }

    /// Moves to `target`, clamped.
    ///
    /// Any running animation is superseded and its completion token dropped.
    /// An animated move with a zero duration behaves like an immediate one.
    pub fn move_to(
        &mut self,
        target: f32,
        motion: Motion,
        now: Instant,
        on_complete: T,
    ) -> MoveOutcome<T> {
        let handle = self.begin_move(target);
        if motion == Motion::Immediate || self.duration.is_zero() {
            self.animated = self.position;
            return MoveOutcome::Settled(on_complete);
        }

        self.transition = Some(Transition {
            handle,
            tween: Tween::new(self.animated, self.position, now, self.duration, self.easing),
            on_complete,
        });
        MoveOutcome::Animating(handle)
    }

    /// Jumps to `target`, clamped, without a completion token.
    ///
    /// Supersedes any running animation like [`move_to`](Self::move_to).
    pub fn jump_to(&mut self, target: f32) -> MoveHandle {
        let handle = self.begin_move(target);
        self.animated = self.position;
        handle
    }

    fn begin_move(&mut self, target: f32) -> MoveHandle {
        self.generation += 1;
        let handle = MoveHandle {
            generation: self.generation,
        };
        if let Some(previous) = self.transition.take() {
            trace!(
                superseded = previous.handle.generation,
                by = handle.generation,
                "scroll animation superseded"
            );
        }
        self.position = self.clamp(target);
        handle
    }

    /// Advances the running animation to `now`.
    ///
    /// Returns the completion token when the animation settles during this
    /// call.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        let transition = self.transition.as_ref()?;
        self.animated = transition.tween.sample(now);
        if !transition.tween.is_done(now) {
            return None;
        }
        let transition = self.transition.take()?;
        self.animated = transition.tween.target();
        trace!(
            generation = transition.handle.generation,
            position = self.animated,
            "scroll animation settled"
        );
        Some(transition.on_complete)
    }
}
