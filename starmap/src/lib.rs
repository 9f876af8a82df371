//! Galactic map viewport engine for the High Command dashboard.
//!
//! The presentation layer owns the DOM and calls into this crate once per user
//! gesture (wheel, drag, zoom buttons) and once per animation frame. Everything
//! here is plain synchronous math over `f64`; there is no I/O and no clock of
//! its own. Callers pass `now_ms` in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewport`] | Viewport rectangle and screen/canvas coordinate conversions |
//! | [`animation`] | Ease-in-out interpolation and the cancellable animation driver |
//! | [`controller`] | [`controller::MapController`], owner of the single live viewport |
//! | [`layout`] | Planet nodes, ownership status colours, sector links |
//! | [`consts`] | Shared numeric constants (extent limits, zoom step, map centre) |

pub mod animation;
pub mod consts;
pub mod controller;
pub mod layout;
pub mod viewport;
