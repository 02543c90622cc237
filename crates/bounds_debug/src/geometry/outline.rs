//! Box outline builder
//!
//! Computes the eight corners of a box collider in the collider's local
//! (unrotated) frame and traces its twelve edges as disjoint line segments.
//! The resulting points are meant to be drawn by a line set attached to the
//! owning transform, which applies position and rotation at draw time.

use std::ops::{Deref, DerefMut};

use crate::foundation::math::{Quat, Transform, Vec3};

/// Number of points in an outline (two per segment)
pub const OUTLINE_POINT_COUNT: usize = 24;

/// Number of segments in an outline (one per box edge)
pub const OUTLINE_SEGMENT_COUNT: usize = 12;

/// Sign of each half-extent per corner index
pub const CORNER_SIGNS: [[f32; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Corner indices of the outline, read pairwise as segments
pub const EDGE_ORDER: [usize; OUTLINE_POINT_COUNT] = [
    5, 4,
    1, 5,
    4, 0,
    0, 1,
    3, 1,
    0, 2,
    2, 3,
    7, 3,
    2, 6,
    6, 7,
    5, 7,
    6, 4,
];

/// Box-shaped collision volume in its owner's local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    /// Center offset from the owning transform
    pub center: Vec3,
    /// Full extent along each local axis
    pub size: Vec3,
}

impl BoxCollider {
    /// Creates a collider from a center offset and full size
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Creates a collider centered on its owner
    pub fn from_size(size: Vec3) -> Self {
        Self::new(Vec3::zeros(), size)
    }

    /// Half of the size along each axis
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

/// The 24 points of a box outline, pairwise forming 12 edge segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoints([Vec3; OUTLINE_POINT_COUNT]);

impl OutlinePoints {
    /// All points in draw order
    pub fn as_slice(&self) -> &[Vec3] {
        &self.0
    }

    /// Point at `index`
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.0.get(index).copied()
    }

    /// Number of points (always 24)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Segments as (start, end) pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.0.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Corners of the collider in local space, indexed as [`CORNER_SIGNS`]
///
/// Zero or negative sizes collapse corners onto each other; this is not
/// treated as an error.
pub fn box_corners(collider: &BoxCollider) -> [Vec3; 8] {
    let half = collider.half_extents();
    CORNER_SIGNS.map(|[sx, sy, sz]| {
        collider.center + Vec3::new(sx * half.x, sy * half.y, sz * half.z)
    })
}

/// Build the outline of a collider in its owner's local frame
///
/// The owner's rotation plays no part: the line set drawing these points
/// inherits it from the transform it is attached to.
pub fn build_outline(collider: &BoxCollider) -> OutlinePoints {
    let corners = box_corners(collider);
    OutlinePoints(EDGE_ORDER.map(|corner| corners[corner]))
}

/// Map an outline through a transform into world space
pub fn world_outline(outline: &OutlinePoints, transform: &Transform) -> Vec<Vec3> {
    outline
        .as_slice()
        .iter()
        .map(|point| transform.transform_point(*point))
        .collect()
}

/// Scoped identity rotation on a borrowed transform
///
/// While the guard lives the transform's rotation is identity; the stored
/// rotation is written back on drop, including during unwinding.
pub struct RotationOverride<'a> {
    transform: &'a mut Transform,
    stored_rotation: Quat,
}

impl<'a> RotationOverride<'a> {
    /// Reset `transform` to identity rotation until the guard is dropped
    pub fn identity(transform: &'a mut Transform) -> Self {
        let stored_rotation = transform.rotation;
        transform.rotation = Quat::identity();
        Self {
            transform,
            stored_rotation,
        }
    }

    /// Rotation that will be restored
    pub fn stored_rotation(&self) -> Quat {
        self.stored_rotation
    }
}

impl Deref for RotationOverride<'_> {
    type Target = Transform;

    fn deref(&self) -> &Transform {
        self.transform
    }
}

impl DerefMut for RotationOverride<'_> {
    fn deref_mut(&mut self) -> &mut Transform {
        self.transform
    }
}

impl Drop for RotationOverride<'_> {
    fn drop(&mut self) {
        self.transform.rotation = self.stored_rotation;
    }
}
