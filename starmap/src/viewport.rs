#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_EXTENT, MAP_CENTER, MAX_EXTENT, MIN_EXTENT, ZOOM_STEP};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rectangle of canvas space currently mapped onto the rendering surface.
///
/// `(x, y)` is the top-left corner in canvas units. Values are replaced, never
/// mutated in place: every operation returns a new `Viewport`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    /// Square view centred on Super Earth.
    fn default() -> Self {
        let half = DEFAULT_EXTENT * 0.5;
        Self { x: MAP_CENTER - half, y: MAP_CENTER - half, width: DEFAULT_EXTENT, height: DEFAULT_EXTENT }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Canvas-space centre of the viewport.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Whether `p` lies inside the viewport, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Same extent, centred on `center`.
    #[must_use]
    pub fn centered_on(&self, center: Point) -> Self {
        Self { x: center.x - self.width * 0.5, y: center.y - self.height * 0.5, ..*self }
    }

    /// SVG `viewBox` attribute value.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// The rendering surface's on-screen rectangle in CSS pixels.
///
/// `left` / `top` are the surface origin on screen, as reported by the
/// element's bounding rect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Surface anchored at the screen origin.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }

    /// A zero-width or zero-height surface has no defined projection.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Allowed range for viewport width and height.
///
/// Fields are public for deserialization; [`ViewportLimits::bounds`] is what
/// every clamp goes through, so a non-finite, non-positive or reversed pair
/// never reaches `f64::clamp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportLimits {
    pub min_extent: f64,
    pub max_extent: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self { min_extent: MIN_EXTENT, max_extent: MAX_EXTENT }
    }
}

impl ViewportLimits {
    #[must_use]
    pub fn new(min_extent: f64, max_extent: f64) -> Self {
        Self { min_extent, max_extent }.sanitized()
    }

    /// Usable `(min, max)`. A bound that is not a positive finite number takes
    /// its default; a reversed pair is swapped.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        let usable = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let lo = usable(self.min_extent, MIN_EXTENT);
        let hi = usable(self.max_extent, MAX_EXTENT);
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }

    #[must_use]
    pub fn sanitized(&self) -> Self {
        let (min_extent, max_extent) = self.bounds();
        Self { min_extent, max_extent }
    }

    /// Clamp one extent into range. NaN maps to the minimum.
    #[must_use]
    pub fn clamp(&self, extent: f64) -> f64 {
        let (lo, hi) = self.bounds();
        extent.max(lo).min(hi)
    }
}

/// Convert a screen-space point (CSS pixels) to canvas coordinates.
///
/// Precondition: `surface` is not degenerate. A zero-sized surface produces
/// non-finite output; callers skip the call instead.
#[must_use]
pub fn screen_to_canvas(screen: Point, viewport: &Viewport, surface: &Surface) -> Point {
    Point {
        x: (screen.x - surface.left) / surface.width * viewport.width + viewport.x,
        y: (screen.y - surface.top) / surface.height * viewport.height + viewport.y,
    }
}

/// Convert a canvas-space point to screen coordinates (CSS pixels).
///
/// Exact inverse of [`screen_to_canvas`]; this is the projection used for rendering.
#[must_use]
pub fn canvas_to_screen(canvas: Point, viewport: &Viewport, surface: &Surface) -> Point {
    Point {
        x: (canvas.x - viewport.x) / viewport.width * surface.width + surface.left,
        y: (canvas.y - viewport.y) / viewport.height * surface.height + surface.top,
    }
}

/// Scale the viewport by `factor` while keeping `focus` fixed on screen.
///
/// `factor > 1` zooms out, `factor < 1` zooms in. Width and height are clamped
/// independently to `limits`; the origin is re-derived from the clamped extent
/// so the focus point does not jump.
#[must_use]
pub fn zoom_at(viewport: &Viewport, focus: Point, factor: f64, limits: &ViewportLimits) -> Viewport {
    let width = limits.clamp(viewport.width * factor);
    let height = limits.clamp(viewport.height * factor);
    Viewport {
        x: focus.x - (focus.x - viewport.x) * (width / viewport.width),
        y: focus.y - (focus.y - viewport.y) * (height / viewport.height),
        width,
        height,
    }
}

/// Move the viewport by a screen-space pointer delta.
///
/// Content follows the pointer: dragging right moves the visible window left
/// in canvas space. Extent is unchanged and the origin is unbounded.
#[must_use]
pub fn pan_by(viewport: &Viewport, screen_dx: f64, screen_dy: f64, surface: &Surface) -> Viewport {
    let scale_x = viewport.width / surface.width;
    let scale_y = viewport.height / surface.height;
    Viewport { x: viewport.x - screen_dx * scale_x, y: viewport.y - screen_dy * scale_y, ..*viewport }
}

/// Zoom factor for one wheel event. Scrolling down (positive delta) zooms out.
#[must_use]
pub fn wheel_factor(delta_sign: f64) -> f64 {
    if delta_sign > 0.0 {
        ZOOM_STEP
    } else if delta_sign < 0.0 {
        1.0 / ZOOM_STEP
    } else {
        1.0
    }
}
