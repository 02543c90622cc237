//! Geometry for debug visuals
//!
//! Box colliders and the fixed wireframe outline traced around them.

pub mod outline;

pub use outline::{
    BoxCollider, OutlinePoints, RotationOverride,
    box_corners, build_outline, world_outline,
    CORNER_SIGNS, EDGE_ORDER, OUTLINE_POINT_COUNT, OUTLINE_SEGMENT_COUNT,
};
