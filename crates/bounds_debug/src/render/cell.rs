//! Shared renderer cell
//!
//! Line handles can be dropped while the host is still reading the
//! renderer. Visibility changes and destructions requested during such a
//! borrow are queued here and applied, in request order, as soon as the
//! renderer is free again: on the next `borrow`, `borrow_mut` or
//! [`RendererCell::flush_pending`], and at the latest when the cell itself
//! is dropped. A line set is therefore never orphaned.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::render::line::{LineId, LineRenderer};

/// Renderer shared between a debug system and the handles it hands out
pub type SharedRenderer<R> = Rc<RendererCell<R>>;

/// Operation deferred until the renderer can be borrowed mutably
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    SetActive(LineId, bool),
    Destroy(LineId),
}

/// Renderer plus the operations waiting for it
pub struct RendererCell<R: LineRenderer> {
    renderer: RefCell<R>,
    pending: RefCell<Vec<PendingOp>>,
}

impl<R: LineRenderer> RendererCell<R> {
    /// Wrap a renderer for sharing
    pub fn new(renderer: R) -> Self {
        Self {
            renderer: RefCell::new(renderer),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Wrap a renderer and put it behind an `Rc`
    pub fn shared(renderer: R) -> SharedRenderer<R> {
        Rc::new(Self::new(renderer))
    }

    /// Borrow the renderer, applying queued operations first if possible
    pub fn borrow(&self) -> Ref<'_, R> {
        self.flush_pending();
        self.renderer.borrow()
    }

    /// Borrow the renderer mutably, applying queued operations first
    ///
    /// # Panics
    ///
    /// Panics if the renderer is already borrowed, like [`RefCell::borrow_mut`].
    pub fn borrow_mut(&self) -> RefMut<'_, R> {
        self.flush_pending();
        self.renderer.borrow_mut()
    }

    /// Show or hide a line set now, or as soon as the renderer is free
    pub fn set_active(&self, id: LineId, active: bool) {
        self.submit(PendingOp::SetActive(id, active));
    }

    /// Destroy a line set now, or as soon as the renderer is free
    pub fn destroy_line(&self, id: LineId) {
        self.submit(PendingOp::Destroy(id));
    }

    /// Apply queued operations if the renderer is free. Returns how many ran
    pub fn flush_pending(&self) -> usize {
        if self.pending.borrow().is_empty() {
            return 0;
        }
        let Ok(mut renderer) = self.renderer.try_borrow_mut() else {
            log::trace!("Renderer busy; {} line operations stay queued", self.pending_count());
            return 0;
        };

        let ops = std::mem::take(&mut *self.pending.borrow_mut());
        let count = ops.len();
        for op in ops {
            apply(&mut *renderer, op);
        }
        count
    }

    /// Operations waiting for the renderer
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    fn submit(&self, op: PendingOp) {
        self.pending.borrow_mut().push(op);
        self.flush_pending();
    }
}

impl<R: LineRenderer> Drop for RendererCell<R> {
    fn drop(&mut self) {
        let renderer = self.renderer.get_mut();
        for op in self.pending.get_mut().drain(..) {
            apply(renderer, op);
        }
    }
}

fn apply<R: LineRenderer>(renderer: &mut R, op: PendingOp) {
    match op {
        PendingOp::SetActive(id, active) => renderer.set_active(id, active),
        PendingOp::Destroy(id) => {
            if !renderer.destroy_line(id) {
                log::warn!("Line set {:?} was already gone when its handle released it", id);
            }
        }
    }
}
