//! Integration tests for legible crates.
//!
//! End-to-end checks of the contrast model, the perceptual metric, the
//! conversions and the tuning strategies working together, starting from
//! textual input where that is how callers reach them.
