//! Touch tracking and gesture normalization.
//!
//! The host delivers raw [`TouchEvent`]s (one per touch phase change). A
//! [`TouchTracker`] follows the primary touch and turns its lifecycle into a
//! stream of [`Gesture`] signals carrying the accumulated horizontal drag
//! distance since the touch started.
//!
//! # Usage
//!
//! ```
//! use carousel_ui::cursor::{Gesture, TouchEvent, TouchTracker};
//! use carousel_ui::px::{Px, PxPosition};
//!
//! let mut tracker = TouchTracker::default();
//!
//! let start = PxPosition::new(Px::new(200), Px::new(100));
//! assert!(matches!(
//!     tracker.handle(TouchEvent::started(0, start)),
//!     Some(Gesture::Grant { .. })
//! ));
//!
//! let moved = start.offset(Px::new(-40), Px::ZERO);
//! assert_eq!(
//!     tracker.handle(TouchEvent::moved(0, moved)),
//!     Some(Gesture::Move { dx: Px::new(-40) })
//! );
//!
//! assert_eq!(
//!     tracker.handle(TouchEvent::ended(0, moved)),
//!     Some(Gesture::Release { dx: Px::new(-40) })
//! );
//! ```
//!
//! # Thread Safety
//!
//! `TouchTracker` is meant to be driven from the single UI thread that
//! receives input events.

use tracing::trace;

use crate::PxPosition;
use crate::px::Px;

/// Phase of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The finger went down.
    Started,
    /// The finger moved while down.
    Moved,
    /// The finger was lifted.
    Ended,
    /// The host handed the touch to another responder.
    Cancelled,
}

/// A raw touch event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    /// Host-assigned identifier, stable for the lifetime of one touch.
    pub id: u64,
    /// Which phase of the touch this event reports.
    pub phase: TouchPhase,
    /// Position of the touch in physical pixels.
    pub position: PxPosition,
}

impl TouchEvent {
    /// A [`TouchPhase::Started`] event.
    pub fn started(id: u64, position: PxPosition) -> Self {
        Self {
            id,
            phase: TouchPhase::Started,
            position,
        }
    }

    /// A [`TouchPhase::Moved`] event.
    pub fn moved(id: u64, position: PxPosition) -> Self {
        Self {
            id,
            phase: TouchPhase::Moved,
            position,
        }
    }

    /// A [`TouchPhase::Ended`] event.
    pub fn ended(id: u64, position: PxPosition) -> Self {
        Self {
            id,
            phase: TouchPhase::Ended,
            position,
        }
    }

    /// A [`TouchPhase::Cancelled`] event.
    pub fn cancelled(id: u64, position: PxPosition) -> Self {
        Self {
            id,
            phase: TouchPhase::Cancelled,
            position,
        }
    }
}

/// Normalized gesture signal.
///
/// `dx` is always the horizontal distance travelled since the grant, never a
/// per-event increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The gesture was claimed; the drag starts at `start`.
    Grant {
        /// Where the touch went down.
        start: PxPosition,
    },
    /// The touch moved.
    Move {
        /// Accumulated horizontal distance since the grant.
        dx: Px,
    },
    /// The touch was lifted; the gesture succeeded.
    Release {
        /// Accumulated horizontal distance at the moment of release.
        dx: Px,
    },
    /// Another responder took over; the gesture is abandoned.
    Terminate,
}

#[derive(Debug, Clone, Copy)]
struct PrimaryTouch {
    id: u64,
    start: PxPosition,
    last: PxPosition,
}

impl PrimaryTouch {
    fn dx(&self) -> Px {
        self.last.x - self.start.x
    }
}

/// Follows the primary touch and emits [`Gesture`] signals for it.
///
/// Only the first touch that goes down is tracked; additional fingers are
/// ignored until the primary one ends or is cancelled.
#[derive(Debug, Default)]
pub struct TouchTracker {
    primary: Option<PrimaryTouch>,
}

impl TouchTracker {
    /// Every touch start is claimed, no matter where it lands.
    pub fn should_claim(&self, _event: &TouchEvent) -> bool {
        true
    }

    /// Native ancestors are never allowed to steal an active gesture.
    pub fn blocks_native_responder(&self) -> bool {
        true
    }

    /// Returns `true` while a primary touch is down.
    pub fn is_tracking(&self) -> bool {
        self.primary.is_some()
    }

    /// Feeds one raw event and returns the gesture signal it produces, if any.
    pub fn handle(&mut self, event: TouchEvent) -> Option<Gesture> {
        match event.phase {
            TouchPhase::Started => {
                if self.primary.is_some() || !self.should_claim(&event) {
                    return None;
                }
                self.primary = Some(PrimaryTouch {
                    id: event.id,
                    start: event.position,
                    last: event.position,
                });
                trace!(touch_id = event.id, "touch granted");
                Some(Gesture::Grant {
                    start: event.position,
                })
            }
            TouchPhase::Moved => {
                let touch = self.primary.as_mut().filter(|t| t.id == event.id)?;
                touch.last = event.position;
                Some(Gesture::Move { dx: touch.dx() })
            }
            TouchPhase::Ended => {
                let mut touch = self.take_primary(event.id)?;
                touch.last = event.position;
                trace!(touch_id = event.id, dx = touch.dx().raw(), "touch released");
                Some(Gesture::Release { dx: touch.dx() })
            }
            TouchPhase::Cancelled => {
                self.take_primary(event.id)?;
                trace!(touch_id = event.id, "touch terminated");
                Some(Gesture::Terminate)
            }
        }
    }

    fn take_primary(&mut self, id: u64) -> Option<PrimaryTouch> {
        match self.primary {
            Some(touch) if touch.id == id => self.primary.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32) -> PxPosition {
        PxPosition::new(Px(x), Px(50))
    }

    #[test]
    fn drag_reports_accumulated_distance() {
        let mut tracker = TouchTracker::default();
        assert_eq!(
            tracker.handle(TouchEvent::started(7, at(300))),
            Some(Gesture::Grant { start: at(300) })
        );
        assert_eq!(
            tracker.handle(TouchEvent::moved(7, at(250))),
            Some(Gesture::Move { dx: Px(-50) })
        );
        assert_eq!(
            tracker.handle(TouchEvent::moved(7, at(100))),
            Some(Gesture::Move { dx: Px(-200) })
        );
        assert_eq!(
            tracker.handle(TouchEvent::ended(7, at(110))),
            Some(Gesture::Release { dx: Px(-190) })
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn secondary_touches_are_ignored() {
        let mut tracker = TouchTracker::default();
        tracker.handle(TouchEvent::started(1, at(0)));
        assert_eq!(tracker.handle(TouchEvent::started(2, at(40))), None);
        assert_eq!(tracker.handle(TouchEvent::moved(2, at(80))), None);
        assert_eq!(tracker.handle(TouchEvent::ended(2, at(80))), None);
        assert!(tracker.is_tracking());
        assert_eq!(
            tracker.handle(TouchEvent::moved(1, at(10))),
            Some(Gesture::Move { dx: Px(10) })
        );
    }

    #[test]
    fn cancelled_touch_terminates() {
        let mut tracker = TouchTracker::default();
        tracker.handle(TouchEvent::started(3, at(0)));
        assert_eq!(
            tracker.handle(TouchEvent::cancelled(3, at(0))),
            Some(Gesture::Terminate)
        );
        assert_eq!(tracker.handle(TouchEvent::moved(3, at(20))), None);
    }

    #[test]
    fn moves_without_grant_are_dropped() {
        let mut tracker = TouchTracker::default();
        assert_eq!(tracker.handle(TouchEvent::moved(0, at(20))), None);
        assert_eq!(tracker.handle(TouchEvent::ended(0, at(20))), None);
    }

    #[test]
    fn always_claims_and_blocks_native() {
        let tracker = TouchTracker::default();
        assert!(tracker.should_claim(&TouchEvent::started(0, at(0))));
        assert!(tracker.blocks_native_responder());
    }
}
