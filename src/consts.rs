//! Shared constants for the tweakables crate.

// ── Slider ──────────────────────────────────────────────────────

/// Lower bound of the numeric slider. Edits below are clamped.
pub const SLIDER_MIN: f64 = 0.0;

/// Upper bound of the numeric slider. Edits above are clamped.
pub const SLIDER_MAX: f64 = 300.0;

// ── Panel ───────────────────────────────────────────────────────

/// Default maximum height hint for the generated panel, in points.
pub const DEFAULT_PANEL_MAX_HEIGHT: f64 = 200.0;
