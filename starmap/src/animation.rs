//! Viewport transitions: easing, frame sequences, and the animation driver.
//!
//! A transition interpolates all four viewport fields independently along an
//! ease-in-out curve. [`animate`] materializes a transition as a finite frame
//! sequence for a fixed cadence; [`AnimationDriver`] drives one transition
//! from a per-frame callback and enforces that only one runs at a time.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::consts::{FRAME_INTERVAL_MS, MAX_FRAMES};
use crate::viewport::Viewport;

/// Quadratic ease-in-out over `p` in `[0, 1]`. Out-of-range input is clamped.
#[must_use]
pub fn ease_in_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        2.0 * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Componentwise interpolation between two viewports.
#[must_use]
pub fn lerp_viewport(from: &Viewport, to: &Viewport, t: f64) -> Viewport {
    Viewport {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t),
        height: lerp(from.height, to.height, t),
    }
}

/// A single eased move from one viewport to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Viewport,
    pub to: Viewport,
    pub duration_ms: f64,
}

impl Transition {
    #[must_use]
    pub fn new(from: Viewport, to: Viewport, duration_ms: f64) -> Self {
        Self { from, to, duration_ms }
    }

    /// Normalized elapsed fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Viewport at `elapsed_ms`. Returns `to` exactly once the duration has passed.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> Viewport {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            return self.to;
        }
        lerp_viewport(&self.from, &self.to, ease_in_out(p))
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Materialize a transition as frames spaced `frame_ms` apart.
///
/// The first frame equals `from` and the last equals `to` exactly. A
/// non-positive or non-finite duration yields `to` alone; a non-positive or
/// non-finite `frame_ms` falls back to [`FRAME_INTERVAL_MS`]. At most
/// [`MAX_FRAMES`] + 1 frames are produced; past that the cadence stretches.
#[must_use]
pub fn animate(from: Viewport, to: Viewport, duration_ms: f64, frame_ms: f64) -> Frames {
    let frame_ms = if frame_ms > 0.0 && frame_ms.is_finite() { frame_ms } else { FRAME_INTERVAL_MS };
    if !(duration_ms > 0.0 && duration_ms.is_finite()) {
        return Frames { transition: Transition::new(from, to, 0.0), frame_ms, next: 0, last: 0 };
    }

    let steps = (duration_ms / frame_ms).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let (last, frame_ms) = if steps > MAX_FRAMES as f64 {
        (MAX_FRAMES, duration_ms / MAX_FRAMES as f64)
    } else {
        (steps as u64, frame_ms)
    };
    Frames { transition: Transition::new(from, to, duration_ms), frame_ms, next: 0, last }
}

/// Finite, time-ordered frame sequence produced by [`animate`].
#[derive(Debug, Clone)]
pub struct Frames {
    transition: Transition,
    frame_ms: f64,
    next: u64,
    last: u64,
}

impl Iterator for Frames {
    type Item = Viewport;

    fn next(&mut self) -> Option<Viewport> {
        if self.next > self.last {
            return None;
        }
        let index = self.next;
        self.next = self.next.saturating_add(1);
        if index == self.last {
            return Some(self.transition.to);
        }
        #[allow(clippy::cast_precision_loss)]
        let elapsed = index as f64 * self.frame_ms;
        Some(self.transition.sample(elapsed))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.last.saturating_add(1).saturating_sub(self.next)).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames {}

// =============================================================================
// DRIVER
// =============================================================================

/// Identifies one started animation. Stale handles never match the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Running {
    handle: AnimationHandle,
    transition: Transition,
    started_at_ms: f64,
}

/// Cancellable per-frame animation task with a single active slot.
///
/// Starting a new animation replaces (cancels) the running one, so at most
/// one transition ever drives the viewport.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    next_id: u64,
    running: Option<Running>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition at `now_ms`, cancelling any in-flight one.
    pub fn start(&mut self, from: Viewport, to: Viewport, duration_ms: f64, now_ms: f64) -> AnimationHandle {
        self.next_id += 1;
        let handle = AnimationHandle(self.next_id);
        self.running = Some(Running { handle, transition: Transition::new(from, to, duration_ms), started_at_ms: now_ms });
        handle
    }

    /// Stop the running animation, if any, and return its handle.
    pub fn cancel(&mut self) -> Option<AnimationHandle> {
        self.running.take().map(|r| r.handle)
    }

    #[must_use]
    pub fn is_active(&self, handle: AnimationHandle) -> bool {
        self.running.is_some_and(|r| r.handle == handle)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Destination of the running animation.
    #[must_use]
    pub fn target(&self) -> Option<Viewport> {
        self.running.map(|r| r.transition.to)
    }

    /// Advance to `now_ms` and return the viewport for this frame.
    ///
    /// Returns `None` when idle. The frame that reaches the target also
    /// clears the running slot, so the caller stops scheduling frames.
    pub fn tick(&mut self, now_ms: f64) -> Option<Viewport> {
        let running = self.running?;
        let elapsed = (now_ms - running.started_at_ms).max(0.0);
        let frame = running.transition.sample(elapsed);
        if running.transition.is_finished(elapsed) {
            self.running = None;
        }
        Some(frame)
    }
}
