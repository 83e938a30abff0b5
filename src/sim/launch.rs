//! Slingshot launch control
//!
//! Converts a completed drag gesture into the initial velocity of a new
//! projectile. A gesture is a two-state machine: idle, or dragging with
//! the pointer position tracked so the host can draw the sling line from
//! the anchor. Velocity is derived exactly once, at release; nothing
//! re-reads the input afterwards.

use glam::Vec2;

/// Velocity for a projectile released at `release` after being dragged
/// away from `anchor`: pulling down-left launches up-right.
///
/// `scale` divides the drag vector; larger values launch softer. The
/// result is in pixels per tick.
#[inline]
pub fn compute_launch_velocity(anchor: Vec2, release: Vec2, scale: f32) -> Vec2 {
    (anchor - release) / scale
}

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    /// Pointer is held; `pos` is its last reported position.
    Dragging { pos: Vec2 },
}

impl DragGesture {
    /// Begin dragging. Starting over an active drag re-anchors the
    /// tracked position.
    pub fn begin(&mut self, at: Vec2) {
        *self = DragGesture::Dragging { pos: at };
    }

    /// Track pointer movement; ignored while idle.
    pub fn track(&mut self, at: Vec2) {
        if let DragGesture::Dragging { pos } = self {
            *pos = at;
        }
    }

    /// Complete the gesture, returning the release position if a drag was
    /// active. Transitions back to idle either way.
    pub fn release(&mut self, at: Vec2) -> Option<Vec2> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging { .. } => {
                *self = DragGesture::Idle;
                Some(at)
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_velocity_is_linear_and_deterministic() {
        let v = compute_launch_velocity(Vec2::new(100.0, 100.0), Vec2::new(150.0, 150.0), 10.0);
        assert_eq!(v, Vec2::new(-5.0, -5.0));

        // Pulling down-left of the anchor launches up-right
        let v = compute_launch_velocity(Vec2::new(200.0, 500.0), Vec2::new(140.0, 530.0), 5.0);
        assert_eq!(v, Vec2::new(12.0, -6.0));
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut gesture = DragGesture::default();
        assert_eq!(gesture.release(Vec2::new(10.0, 10.0)), None);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_drag_tracks_pointer_until_release() {
        let mut gesture = DragGesture::default();
        gesture.begin(Vec2::new(10.0, 10.0));
        assert!(gesture.is_dragging());

        gesture.track(Vec2::new(30.0, 40.0));
        assert_eq!(
            gesture,
            DragGesture::Dragging {
                pos: Vec2::new(30.0, 40.0)
            }
        );

        let release = gesture.release(Vec2::new(35.0, 45.0));
        assert_eq!(release, Some(Vec2::new(35.0, 45.0)));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_track_while_idle_is_ignored() {
        let mut gesture = DragGesture::default();
        gesture.track(Vec2::new(30.0, 40.0));
        assert_eq!(gesture, DragGesture::Idle);
    }
}
