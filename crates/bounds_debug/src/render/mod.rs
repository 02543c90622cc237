//! Line rendering
//!
//! The host's line facility is abstracted behind [`LineRenderer`]. Visuals
//! own their line sets through [`LineHandle`], which frees the line set
//! exactly once. The renderer is shared through a [`RendererCell`] so frees
//! requested while the host is reading it are deferred, not dropped.
//! [`LineRegistry`] is an in-memory implementation used by headless hosts
//! and tests.

pub mod cell;
pub mod line;
pub mod registry;

pub use cell::{RendererCell, SharedRenderer};
pub use line::{LineHandle, LineId, LineRenderer};
pub use registry::{DrawnSegment, LineRegistry, LineSet};
