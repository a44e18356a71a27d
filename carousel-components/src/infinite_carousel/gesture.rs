//! Drag phase state machine.
//!
//! | from     | event                 | to       |
//! |----------|-----------------------|----------|
//! | Idle     | grant                 | Dragging |
//! | Settling | grant                 | Dragging |
//! | Dragging | release               | Settling |
//! | Dragging | terminate             | Idle     |
//! | Idle     | programmatic scroll   | Settling |
//! | Settling | snap settled          | Idle     |

use carousel_ui::Px;
use tracing::trace;

/// Where the carousel is in a drag-and-snap cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// At rest; no gesture and no snap in flight.
    #[default]
    Idle,
    /// A finger is down and moving the content.
    Dragging,
    /// The finger was lifted and the snap animation is running.
    Settling,
}

#[derive(Debug, Default)]
pub(crate) struct DragMachine {
    phase: GesturePhase,
    anchor: f32,
}

impl DragMachine {
    pub(crate) fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Starts a drag anchored at the current scroll position.
    pub(crate) fn grant(&mut self, position: f32) {
        self.transition(GesturePhase::Dragging);
        self.anchor = position;
    }

    /// Scroll target for a drag of `dx`, or `None` when not dragging.
    pub(crate) fn drag_target(&self, dx: Px, sensitivity: f32) -> Option<f32> {
        (self.phase == GesturePhase::Dragging)
            .then(|| self.anchor + dx.mul_f32(sensitivity).to_f32())
    }

    /// Ends the drag successfully. Returns `true` if a snap should follow.
    pub(crate) fn release(&mut self) -> bool {
        if self.phase != GesturePhase::Dragging {
            return false;
        }
        self.transition(GesturePhase::Settling);
        true
    }

    /// Abandons the drag where it is.
    pub(crate) fn terminate(&mut self) {
        if self.phase == GesturePhase::Dragging {
            self.transition(GesturePhase::Idle);
        }
    }

    /// A programmatic scroll started while at rest.
    pub(crate) fn begin_settling(&mut self) {
        if self.phase == GesturePhase::Idle {
            self.transition(GesturePhase::Settling);
        }
    }

    /// The snap finished or was superseded.
    pub(crate) fn settle(&mut self) {
        if self.phase == GesturePhase::Settling {
            self.transition(GesturePhase::Idle);
        }
    }

    /// Moves the drag anchor along with a silent re-anchor of the content.
    pub(crate) fn shift_anchor(&mut self, delta: f32) {
        if self.phase == GesturePhase::Dragging {
            self.anchor += delta;
        }
    }

    fn transition(&mut self, to: GesturePhase) {
        trace!(from = ?self.phase, ?to, "gesture phase");
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_drag_release_settle() {
        let mut machine = DragMachine::default();
        assert_eq!(machine.phase(), GesturePhase::Idle);
        assert_eq!(machine.drag_target(Px(-200), 0.75), None);

        machine.grant(-225.0);
        assert_eq!(machine.phase(), GesturePhase::Dragging);
        assert_eq!(machine.drag_target(Px(-200), 0.75), Some(-375.0));
        assert_eq!(machine.drag_target(Px(40), 0.75), Some(-195.0));

        assert!(machine.release());
        assert_eq!(machine.phase(), GesturePhase::Settling);
        assert_eq!(machine.drag_target(Px(-10), 0.75), None);

        machine.settle();
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn terminate_skips_settling() {
        let mut machine = DragMachine::default();
        machine.grant(0.0);
        machine.terminate();
        assert_eq!(machine.phase(), GesturePhase::Idle);
        assert!(!machine.release());
    }

    #[test]
    fn grant_interrupts_settling() {
        let mut machine = DragMachine::default();
        machine.grant(-225.0);
        machine.release();
        machine.grant(-375.0);
        assert_eq!(machine.phase(), GesturePhase::Dragging);
        machine.settle();
        assert_eq!(machine.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn programmatic_scroll_settles_only_from_idle() {
        let mut machine = DragMachine::default();
        machine.begin_settling();
        assert_eq!(machine.phase(), GesturePhase::Settling);
        machine.settle();

        machine.grant(0.0);
        machine.begin_settling();
        assert_eq!(machine.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn anchor_follows_reanchor_only_while_dragging() {
        let mut machine = DragMachine::default();
        machine.grant(-975.0);
        machine.shift_anchor(600.0);
        assert_eq!(machine.drag_target(Px(0), 0.75), Some(-375.0));

        machine.release();
        machine.shift_anchor(100.0);
        machine.grant(-10.0);
        assert_eq!(machine.drag_target(Px(0), 0.75), Some(-10.0));
    }
}
