//! Line renderer trait and owned line handles

use crate::foundation::math::{SharedTransform, Vec3, Vec4};
use crate::render::cell::SharedRenderer;

slotmap::new_key_type! {
    /// Identifier of a line set inside a renderer
    pub struct LineId;
}

/// Host facility for drawing sets of line segments
pub trait LineRenderer {
    /// Create a line set from points read pairwise as segments
    fn create_line(&mut self, name: &str, points: &[Vec3], color: Vec4, width: f32) -> LineId;

    /// Attach a line set to a transform; its points become local to it
    fn attach_transform(&mut self, id: LineId, transform: SharedTransform);

    /// Enable or disable redrawing the line set every frame
    fn set_auto_draw(&mut self, id: LineId, auto_draw: bool);

    /// Show or hide the line set without freeing it
    fn set_active(&mut self, id: LineId, active: bool);

    /// Free the line set. Returns false if the id was unknown
    fn destroy_line(&mut self, id: LineId) -> bool;
}

/// Exclusive ownership of one line set
///
/// The line set is destroyed by [`LineHandle::destroy`] or, failing that,
/// when the handle is dropped. Either way it happens once; if the renderer
/// is borrowed at that moment the destruction is queued on the shared
/// [`RendererCell`](crate::render::RendererCell) instead of being lost.
pub struct LineHandle<R: LineRenderer> {
    id: Option<LineId>,
    renderer: SharedRenderer<R>,
}

impl<R: LineRenderer> LineHandle<R> {
    /// Take ownership of an already created line set
    pub fn new(id: LineId, renderer: SharedRenderer<R>) -> Self {
        Self {
            id: Some(id),
            renderer,
        }
    }

    /// Line set identifier
    pub fn id(&self) -> Option<LineId> {
        self.id
    }

    /// Show or hide the line set
    pub fn set_active(&self, active: bool) {
        if let Some(id) = self.id {
            self.renderer.set_active(id, active);
        }
    }

    /// Destroy the line set, or queue it while the renderer is borrowed
    pub fn destroy(mut self) {
        self.free();
    }

    fn free(&mut self) {
        if let Some(id) = self.id.take() {
            self.renderer.destroy_line(id);
        }
    }
}

impl<R: LineRenderer> Drop for LineHandle<R> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<R: LineRenderer> std::fmt::Debug for LineHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineHandle").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LineRegistry, RendererCell};

    fn shared_registry() -> SharedRenderer<LineRegistry> {
        RendererCell::shared(LineRegistry::new())
    }

    fn create(renderer: &SharedRenderer<LineRegistry>) -> LineId {
        renderer.borrow_mut().create_line(
            "test",
            &[Vec3::zeros(), Vec3::x()],
            Vec4::new(1.0, 1.0, 1.0, 1.0),
            1.0,
        )
    }

    #[test]
    fn test_destroy_frees_once() {
        let renderer = shared_registry();
        let handle = LineHandle::new(create(&renderer), renderer.clone());

        handle.destroy();

        let registry = renderer.borrow();
        assert_eq!(registry.created_count(), 1);
        assert_eq!(registry.destroyed_count(), 1);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_drop_frees_once() {
        let renderer = shared_registry();
        {
            let _handle = LineHandle::new(create(&renderer), renderer.clone());
        }
        assert_eq!(renderer.borrow().destroyed_count(), 1);
        assert_eq!(renderer.borrow().live_count(), 0);
    }

    #[test]
    fn test_set_active_toggles_visibility() {
        let renderer = shared_registry();
        let id = create(&renderer);
        let handle = LineHandle::new(id, renderer.clone());

        handle.set_active(false);
        assert!(!renderer.borrow().is_active(id));
        handle.set_active(true);
        assert!(renderer.borrow().is_active(id));
    }

    #[test]
    fn test_hide_while_renderer_is_read() {
        let renderer = shared_registry();
        let id = create(&renderer);
        let handle = LineHandle::new(id, renderer.clone());

        {
            let _reader = renderer.borrow();
            handle.set_active(false);
        }

        assert!(!renderer.borrow().is_active(id));
    }
}
