//! Timed bounding-box outline
//!
//! A [`BoundsVisual`] draws the outline of one box collider for a fixed
//! number of frames and then hands itself back to its pool. It owns the
//! line set it draws with, so the line set is freed exactly once whatever
//! path the visual leaves by: expiry, early release, reuse, or drop.

use crate::config::BoundsDebugConfig;
use crate::foundation::math::{SharedTransform, Vec4};
use crate::foundation::time::FrameCountdown;
use crate::geometry::{build_outline, BoxCollider, OutlinePoints};
use crate::pool::{Poolable, TickOutcome};
use crate::render::{LineHandle, LineId, LineRenderer, SharedRenderer};

/// How outlines are drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Name given to the line set
    pub name: String,
    /// Line thickness in pixels
    pub width: f32,
}

impl LineStyle {
    /// Style taken from configuration
    pub fn from_config(config: &BoundsDebugConfig) -> Self {
        Self {
            name: config.line_name.clone(),
            width: config.line_width,
        }
    }
}

/// Target of one activation
#[derive(Debug, Clone)]
pub struct BoundsParams {
    /// Transform the outline follows
    pub transform: SharedTransform,
    /// Box to outline, local to `transform`
    pub collider: BoxCollider,
    /// RGBA line color
    pub color: Vec4,
}

/// Lifecycle state of a visual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Drawing, with this many frames left
    Active(u32),
    /// Back in the pool and not drawing
    Released,
}

/// Outline of a box collider that expires after a fixed number of frames
pub struct BoundsVisual<R: LineRenderer> {
    renderer: SharedRenderer<R>,
    style: LineStyle,
    countdown: FrameCountdown,
    line: Option<LineHandle<R>>,
    outline: Option<OutlinePoints>,
    target: Option<SharedTransform>,
    color: Vec4,
    active: bool,
}

impl<R: LineRenderer> BoundsVisual<R> {
    /// Create an inactive visual drawing through `renderer`
    ///
    /// A `frame_count` of 0 is treated as 1 so the visual always expires.
    pub fn new(renderer: SharedRenderer<R>, style: LineStyle, frame_count: u32) -> Self {
        Self {
            renderer,
            style,
            countdown: FrameCountdown::new(frame_count),
            line: None,
            outline: None,
            target: None,
            color: Vec4::zeros(),
            active: false,
        }
    }
    
    /// Create an inactive visual using configured style and lifetime
    pub fn from_config(renderer: SharedRenderer<R>, config: &BoundsDebugConfig) -> Self {
        Self::new(renderer, LineStyle::from_config(config), config.frame_count)
    }
    
    /// Current lifecycle state
    pub fn state(&self) -> VisualState {
        if self.active {
            VisualState::Active(self.countdown.remaining())
        } else {
            VisualState::Released
        }
    }
    
    /// Frames left before expiry
    pub fn remaining_frames(&self) -> u32 {
        self.countdown.remaining()
    }
    
    /// Outline built by the latest activation
    pub fn outline(&self) -> Option<&OutlinePoints> {
        self.outline.as_ref()
    }
    
    /// Line set currently owned by this visual
    pub fn line_id(&self) -> Option<LineId> {
        self.line.as_ref().and_then(LineHandle::id)
    }
    
    /// Transform the outline follows
    pub fn target(&self) -> Option<&SharedTransform> {
        self.target.as_ref()
    }
    
    /// Color of the latest activation
    pub fn color(&self) -> Vec4 {
        self.color
    }
    
    /// Line style
    pub fn style(&self) -> &LineStyle {
        &self.style
    }
    
    fn create_line(&self, outline: &OutlinePoints, params: &BoundsParams) -> LineHandle<R> {
        let mut renderer = self.renderer.borrow_mut();
        let id = renderer.create_line(&self.style.name, outline.as_slice(), params.color, self.style.width);
        renderer.attach_transform(id, params.transform.clone());
        renderer.set_auto_draw(id, true);
        LineHandle::new(id, self.renderer.clone())
    }
}

impl<R: LineRenderer> Poolable for BoundsVisual<R> {
    type Params = BoundsParams;
    
    fn activate(&mut self, params: BoundsParams) {
        // A line set left over from an earlier activation is replaced, not leaked
        if let Some(previous) = self.line.take() {
            previous.destroy();
        }
        
        let outline = build_outline(&params.collider);
        self.line = Some(self.create_line(&outline, &params));
        self.outline = Some(outline);
        self.color = params.color;
        self.target = Some(params.transform);
        self.countdown.reset();
        self.active = true;
        
        log::debug!(
            "Bounds outline {:?} active for {} frames (center {:?}, size {:?})",
            self.line_id(),
            self.countdown.remaining(),
            params.collider.center,
            params.collider.size,
        );
    }
    
    fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Inactive;
        }
        
        if self.countdown.tick() {
            log::debug!("Bounds outline {:?} expired", self.line_id());
            self.release();
            TickOutcome::Expired
        } else {
            log::trace!("Bounds outline {:?}: {} frames left", self.line_id(), self.countdown.remaining());
            TickOutcome::Active(self.countdown.remaining())
        }
    }
    
    fn release(&mut self) -> bool {
        if !self.active {
            return false;
        }
        
        if let Some(line) = &self.line {
            line.set_active(false);
        }
        self.active = false;
        // Reset only once the line set is hidden and the visual is inert
        self.countdown.reset();
        true
    }
    
    fn destroy(&mut self) {
        self.active = false;
        self.countdown.reset();
        self.target = None;
        if let Some(line) = self.line.take() {
            line.destroy();
        }
    }
    
    fn is_active(&self) -> bool {
        self.active
    }
}

impl<R: LineRenderer> std::fmt::Debug for BoundsVisual<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundsVisual")
            .field("state", &self.state())
            .field("line", &self.line)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
