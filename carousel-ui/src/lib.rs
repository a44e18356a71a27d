//! carousel-ui holds the headless primitives the carousel components are built
//! from.
//!
//! # Modules
//!
//! - [`px`]: whole-pixel values reported by layout passes and touch input.
//! - [`cursor`]: raw touch events and the [`TouchTracker`] that turns them
//!   into grant / move / release / terminate gestures.
//! - [`animation`]: easing curves, fixed-duration tweens and value
//!   interpolation for page renderers.
//! - [`scroll`]: the clamped [`ScrollPosition`] with immediate and animated
//!   moves and supersedable completions.
//! - [`state`]: a cloneable [`State`] handle for sharing controllers.
//!
//! Nothing in this crate reads a clock. Every time-dependent call takes the
//! current [`Instant`](std::time::Instant) from the host, which keeps frame
//! pacing in the host's hands and makes the primitives deterministic under
//! test.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use carousel_ui::{Motion, ScrollPosition};
//!
//! let mut scroll = ScrollPosition::<()>::default();
//! scroll.set_bounds(300.0, 1200.0);
//!
//! let start = Instant::now();
//! scroll.move_to(-225.0, Motion::Animated, start, ());
//! let frame = start + Duration::from_millis(16);
//! assert_eq!(scroll.tick(frame), None);
//! assert!(scroll.animated_position() < 0.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod cursor;
pub mod px;
pub mod scroll;
pub mod state;

pub use crate::{
    animation::{Easing, Tween, interpolate},
    cursor::{Gesture, TouchEvent, TouchPhase, TouchTracker},
    px::{Px, PxPosition, PxSize},
    scroll::{DEFAULT_ANIMATION_DURATION, Motion, MoveHandle, MoveOutcome, ScrollPosition},
    state::State,
};
