//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link time down.
//!
//! Structure:
//! - integration: Full gestures driven through `MultiBrush`
//! - unit: Single-component tests through the public API

mod helpers;
mod unit;
