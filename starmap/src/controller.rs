//! Gesture-level owner of the map viewport.
//!
//! DESIGN
//! ======
//! `MapController` holds the one live [`Viewport`] value and replaces it on
//! every gesture or animation frame. Direct gestures (wheel, drag, zoom
//! buttons) cancel any in-flight animation first, so a user action always
//! wins over a transition that was still easing toward an older target.
//!
//! The controller also owns the zero-size surface guard: the pure functions in
//! [`crate::viewport`] assume a non-degenerate surface, and the controller
//! skips gestures that arrive while the surface has no size.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::animation::{AnimationDriver, AnimationHandle};
use crate::consts::{FOCUS_DURATION_MS, RESET_DURATION_MS, ZOOM_STEP};
use crate::viewport::{Point, Surface, Viewport, ViewportLimits, pan_by, screen_to_canvas, wheel_factor, zoom_at};

#[derive(Debug)]
pub struct MapController {
    viewport: Viewport,
    home: Viewport,
    limits: ViewportLimits,
    driver: AnimationDriver,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new(Viewport::default(), ViewportLimits::default())
    }
}

impl MapController {
    /// `home` extent is clamped into `limits`, keeping its centre.
    #[must_use]
    pub fn new(home: Viewport, limits: ViewportLimits) -> Self {
        let limits = limits.sanitized();
        let home = Viewport { width: limits.clamp(home.width), height: limits.clamp(home.height), ..home }
            .centered_on(home.center());
        Self { viewport: home, home, limits, driver: AnimationDriver::new() }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn home(&self) -> Viewport {
        self.home
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Wheel event at `screen`. The canvas point under the cursor stays put.
    ///
    /// Returns `None` (and leaves the viewport alone) on a degenerate surface.
    pub fn wheel(&mut self, screen: Point, delta_sign: f64, surface: &Surface) -> Option<Viewport> {
        if surface.is_degenerate() {
            return None;
        }
        self.driver.cancel();
        let focus = screen_to_canvas(screen, &self.viewport, surface);
        self.viewport = zoom_at(&self.viewport, focus, wheel_factor(delta_sign), &self.limits);
        Some(self.viewport)
    }

    /// Pointer drag by a screen-space delta since the previous move event.
    pub fn drag(&mut self, screen_dx: f64, screen_dy: f64, surface: &Surface) -> Option<Viewport> {
        if surface.is_degenerate() {
            return None;
        }
        self.driver.cancel();
        self.viewport = pan_by(&self.viewport, screen_dx, screen_dy, surface);
        Some(self.viewport)
    }

    /// Zoom button: one step in, about the viewport centre.
    pub fn zoom_in(&mut self) -> Viewport {
        self.zoom_about_center(1.0 / ZOOM_STEP)
    }

    /// Zoom button: one step out, about the viewport centre.
    pub fn zoom_out(&mut self) -> Viewport {
        self.zoom_about_center(ZOOM_STEP)
    }

    fn zoom_about_center(&mut self, factor: f64) -> Viewport {
        self.driver.cancel();
        self.viewport = zoom_at(&self.viewport, self.viewport.center(), factor, &self.limits);
        self.viewport
    }

    /// Animate back to the home viewport.
    pub fn reset(&mut self, now_ms: f64) -> AnimationHandle {
        self.animate_to(self.home, RESET_DURATION_MS, now_ms)
    }

    /// Animate so that `target` ends up in the centre, keeping the current extent.
    pub fn focus_on(&mut self, target: Point, now_ms: f64) -> AnimationHandle {
        let destination = self.viewport.centered_on(target);
        self.animate_to(destination, FOCUS_DURATION_MS, now_ms)
    }

    /// Start a transition from the current viewport, superseding any running one.
    ///
    /// The target extent is clamped to the limits before the transition starts.
    pub fn animate_to(&mut self, target: Viewport, duration_ms: f64, now_ms: f64) -> AnimationHandle {
        let target = Viewport {
            width: self.limits.clamp(target.width),
            height: self.limits.clamp(target.height),
            ..target
        };
        self.driver.start(self.viewport, target, duration_ms, now_ms)
    }

    /// Stop the running animation where it is.
    pub fn cancel_animation(&mut self) -> Option<AnimationHandle> {
        self.driver.cancel()
    }

    /// Per-frame callback. Returns the new viewport while an animation runs.
    pub fn tick(&mut self, now_ms: f64) -> Option<Viewport> {
        let frame = self.driver.tick(now_ms)?;
        self.viewport = frame;
        Some(frame)
    }

    /// Canvas point under `screen`, or `None` on a degenerate surface.
    #[must_use]
    pub fn canvas_point(&self, screen: Point, surface: &Surface) -> Option<Point> {
        if surface.is_degenerate() {
            return None;
        }
        Some(screen_to_canvas(screen, &self.viewport, surface))
    }
}
