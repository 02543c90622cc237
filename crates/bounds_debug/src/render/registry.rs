//! In-memory line renderer
//!
//! Keeps line sets in a slot map and resolves attached transforms every
//! frame, the way an auto-drawing GPU backend would before uploading
//! vertices. Also counts creations and destructions so leaks are visible.

use slotmap::SlotMap;

use crate::foundation::math::{SharedTransform, Vec3, Vec4};
use crate::render::line::{LineId, LineRenderer};

/// A line segment resolved into world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnSegment {
    /// World-space start point
    pub start: Vec3,
    /// World-space end point
    pub end: Vec3,
    /// RGBA color
    pub color: Vec4,
    /// Line thickness in pixels
    pub width: f32,
}

/// A stored line set
pub struct LineSet {
    /// Display name
    pub name: String,
    /// Points read pairwise as segments, local to `transform` when attached
    pub points: Vec<Vec3>,
    /// RGBA color
    pub color: Vec4,
    /// Line thickness in pixels
    pub width: f32,
    /// Transform the points are relative to
    pub transform: Option<SharedTransform>,
    /// Redrawn every frame
    pub auto_draw: bool,
    /// Visible
    pub active: bool,
}

/// Headless line renderer
#[derive(Default)]
pub struct LineRegistry {
    lines: SlotMap<LineId, LineSet>,
    created: usize,
    destroyed: usize,
}

impl LineRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a line set
    pub fn line(&self, id: LineId) -> Option<&LineSet> {
        self.lines.get(id)
    }

    /// Check whether a line set exists and is visible
    pub fn is_active(&self, id: LineId) -> bool {
        self.lines.get(id).is_some_and(|line| line.active)
    }

    /// Line sets currently alive
    pub fn live_count(&self) -> usize {
        self.lines.len()
    }

    /// Line sets ever created
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Line sets ever destroyed
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Number of line sets that would be drawn this frame
    pub fn visible_count(&self) -> usize {
        self.lines.values().filter(|line| line.active && line.auto_draw).count()
    }

    /// Resolve every visible auto-drawn line set into world-space segments
    pub fn world_segments(&self) -> Vec<DrawnSegment> {
        let mut segments = Vec::new();

        for line in self.lines.values().filter(|line| line.active && line.auto_draw) {
            let transform = line.transform.as_ref().map(|shared| shared.borrow().clone());
            let to_world = |point: Vec3| match &transform {
                Some(transform) => transform.transform_point(point),
                None => point,
            };

            segments.extend(line.points.chunks_exact(2).map(|pair| DrawnSegment {
                start: to_world(pair[0]),
                end: to_world(pair[1]),
                color: line.color,
                width: line.width,
            }));
        }

        segments
    }
}

impl LineRenderer for LineRegistry {
    fn create_line(&mut self, name: &str, points: &[Vec3], color: Vec4, width: f32) -> LineId {
        if points.len() % 2 != 0 {
            log::warn!("Line set '{}' has an odd point count {}; last point ignored", name, points.len());
        }
        self.created += 1;
        self.lines.insert(LineSet {
            name: name.to_string(),
            points: points.to_vec(),
            color,
            width,
            transform: None,
            auto_draw: false,
            active: true,
        })
    }

    fn attach_transform(&mut self, id: LineId, transform: SharedTransform) {
        if let Some(line) = self.lines.get_mut(id) {
            line.transform = Some(transform);
        }
    }

    fn set_auto_draw(&mut self, id: LineId, auto_draw: bool) {
        if let Some(line) = self.lines.get_mut(id) {
            line.auto_draw = auto_draw;
        }
    }

    fn set_active(&mut self, id: LineId, active: bool) {
        if let Some(line) = self.lines.get_mut(id) {
            line.active = active;
        }
    }

    fn destroy_line(&mut self, id: LineId) -> bool {
        if self.lines.remove(id).is_some() {
            self.destroyed += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Transform};
    use approx::assert_relative_eq;

    fn white() -> Vec4 {
        Vec4::new(1.0, 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_only_auto_drawn_active_lines_are_resolved() {
        let mut registry = LineRegistry::new();
        let points = [Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0)];

        let drawn = registry.create_line("drawn", &points, white(), 2.0);
        registry.set_auto_draw(drawn, true);
        let _manual = registry.create_line("manual", &points, white(), 2.0);

        assert_eq!(registry.visible_count(), 1);
        assert_eq!(registry.world_segments().len(), 1);

        registry.set_active(drawn, false);
        assert!(registry.world_segments().is_empty());
    }

    #[test]
    fn test_attached_transform_is_read_each_frame() {
        let mut registry = LineRegistry::new();
        let transform = Transform::from_position(Vec3::new(0.0, 5.0, 0.0)).into_shared();

        let id = registry.create_line("box", &[Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0)], white(), 1.0);
        registry.attach_transform(id, transform.clone());
        registry.set_auto_draw(id, true);

        let first = registry.world_segments();
        assert_relative_eq!(first[0].start, Vec3::new(0.0, 5.0, 0.0), epsilon = 1e-6);

        transform.borrow_mut().rotation =
            Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::PI);
        let second = registry.world_segments();
        assert_relative_eq!(second[0].end, Vec3::new(-1.0, 5.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_destroy_unknown_id() {
        let mut registry = LineRegistry::new();
        let id = registry.create_line("once", &[Vec3::zeros(), Vec3::zeros()], white(), 1.0);

        assert!(registry.destroy_line(id));
        assert!(!registry.destroy_line(id));
        assert_eq!(registry.destroyed_count(), 1);
        assert!(registry.line(id).is_none());
    }
}
