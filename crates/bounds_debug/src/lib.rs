//! # Bounds Debug
//!
//! Wireframe bounding-box outlines for engine debug drawing. Each outline
//! is drawn for a fixed number of frames and then returns to a pool for
//! reuse.
//!
//! ## Features
//!
//! - **Outline Builder**: 24-point, 12-segment box outline in local space
//! - **Timed Visuals**: frame-counted lifetime with early release
//! - **Object Pool**: generational handles, no per-request allocation
//! - **Renderer Seam**: any line backend behind the `LineRenderer` trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bounds_debug::prelude::*;
//!
//! fn main() -> Result<(), BoundsDebugError> {
//!     let mut system = BoundsDebugSystem::new(BoundsDebugConfig::default(), LineRegistry::new())?;
//!     let transform = Transform::from_position(Vec3::new(0.0, 1.0, 0.0)).into_shared();
//!
//!     system.show_bounds(&transform, BoxCollider::from_size(Vec3::new(2.0, 2.0, 2.0)), None)?;
//!
//!     // Once per rendered frame
//!     system.update();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod geometry;
pub mod render;
pub mod pool;
pub mod debug;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{BoundsDebugConfig, Config, ConfigError},
        debug::{BoundsDebugError, BoundsDebugStats, BoundsDebugSystem, BoundsVisual, VisualState},
        foundation::math::{Quat, SharedTransform, Transform, Vec3, Vec4},
        geometry::{build_outline, BoxCollider, OutlinePoints},
        pool::{ObjectPool, PoolError, PoolHandle, Poolable, TickOutcome},
        render::{DrawnSegment, LineRegistry, LineRenderer},
    };
}
