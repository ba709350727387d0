//! Headless testing harness.
//!
//! The [`Pilot`] owns a [`Context`](crate::Context) configured for a
//! character grid, feeds it synthetic input between frames and rasterizes
//! the resulting commands to plain text for snapshot-style assertions.

pub mod pilot;

pub use pilot::Pilot;
