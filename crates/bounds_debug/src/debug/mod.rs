//! Debug module for visualization and debugging tools
//!
//! Bounding-box outlines shown for a fixed number of frames, backed by a
//! pool so repeated requests reuse visuals instead of reallocating them.

pub mod bounds_visual;
pub mod bounds_system;

#[cfg(test)]
mod tests;

pub use bounds_visual::{BoundsParams, BoundsVisual, LineStyle, VisualState};
pub use bounds_system::{BoundsDebugError, BoundsDebugStats, BoundsDebugSystem};
