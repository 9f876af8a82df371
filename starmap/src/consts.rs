//! Shared numeric constants for the starmap crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed viewport width/height, in canvas units.
pub const MIN_EXTENT: f64 = 200.0;

/// Largest allowed viewport width/height, in canvas units.
pub const MAX_EXTENT: f64 = 4000.0;

/// Side length of the viewport the map opens with and resets to.
pub const DEFAULT_EXTENT: f64 = 800.0;

/// Multiplicative zoom step for one wheel notch or one button press.
pub const ZOOM_STEP: f64 = 1.1;

// ── Animation ───────────────────────────────────────────────────

/// Duration of the animated return to the default viewport.
pub const RESET_DURATION_MS: f64 = 500.0;

/// Duration of the animated recentre on a selected planet.
pub const FOCUS_DURATION_MS: f64 = 400.0;

/// One frame at 60 Hz.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Most frames a materialized transition yields. Longer transitions are
/// sampled at a coarser cadence instead.
pub const MAX_FRAMES: u64 = 3600;

// ── Layout ──────────────────────────────────────────────────────

/// Canvas coordinate of Super Earth, the map centre.
pub const MAP_CENTER: f64 = 400.0;

/// Scale applied to backend planet positions before offsetting by [`MAP_CENTER`].
pub const MAP_SCALE: f64 = 2.0;

/// Sector name used for planets that report none.
pub const UNKNOWN_SECTOR: &str = "UNKNOWN";
