use crate::constants::*;
use crate::stage::SealPose;

/// An in-progress press on the seal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin_x: f32,
    pub current_distance: f32,
    pub progress: f32,
    pub active: bool,
}

/// Result of feeding one pointer position into an active session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub distance: f32,
    pub progress: f32,
    pub pose: SealPose,
    pub crossed: bool,
}

/// `clamp(0, 100, 100 * distance / threshold)`.
#[inline]
pub fn progress_for(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 {
        return 100.0;
    }
    (100.0 * distance / threshold).clamp(0.0, 100.0)
}

/// Seal tilt and slide for a drag distance, clamped to a gentle maximum.
#[inline]
pub fn seal_pose(distance: f32) -> SealPose {
    let d = distance.max(0.0);
    SealPose {
        rotate_deg: (d / SEAL_ROTATE_DIVISOR).min(SEAL_ROTATE_MAX_DEG),
        shift_px: (d / SEAL_SHIFT_DIVISOR).min(SEAL_SHIFT_MAX_PX),
    }
}

/// Turns horizontal pointer travel into drag distance and progress.
///
/// The tracker knows nothing about lifecycle state; the controller decides
/// when `begin`, `update` and `release` are meaningful.
#[derive(Debug)]
pub struct GestureTracker {
    threshold: f32,
    session: Option<DragSession>,
    progress: f32,
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            session: None,
            progress: 0.0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.map(|s| s.active).unwrap_or(false)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Open a session at `x`. A second press while one is active is ignored.
    pub fn begin(&mut self, x: f32) -> bool {
        if self.is_active() {
            return false;
        }
        self.session = Some(DragSession {
            origin_x: x,
            current_distance: 0.0,
            progress: 0.0,
            active: true,
        });
        self.progress = 0.0;
        true
    }

    pub fn update(&mut self, x: f32) -> Option<DragUpdate> {
        let threshold = self.threshold;
        let session = self.session.as_mut().filter(|s| s.active)?;
        let distance = (x - session.origin_x).max(0.0);
        session.current_distance = distance;
        session.progress = progress_for(distance, threshold);
        self.progress = session.progress;
        Some(DragUpdate {
            distance,
            progress: session.progress,
            pose: seal_pose(distance),
            crossed: distance > threshold,
        })
    }

    /// Clear the session without opening; progress returns to neutral.
    pub fn release(&mut self) -> Option<DragSession> {
        self.progress = 0.0;
        self.session.take()
    }

    /// The seal opened: drop the session and pin progress at 100.
    pub fn complete(&mut self) {
        self.session = None;
        self.progress = 100.0;
    }

    pub fn reset(&mut self) {
        self.session = None;
        self.progress = 0.0;
    }
}

/// Keys that open the seal without dragging.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
