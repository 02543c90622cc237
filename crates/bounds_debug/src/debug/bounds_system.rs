//! Bounding-box debug drawing system
//!
//! Host-facing entry point: hands out pooled [`BoundsVisual`]s, advances
//! them once per frame and keeps simple statistics.

use std::cell::Ref;

use thiserror::Error;

use crate::config::{BoundsDebugConfig, ConfigError};
use crate::debug::bounds_visual::{BoundsParams, BoundsVisual};
use crate::foundation::math::{SharedTransform, Vec4};
use crate::geometry::BoxCollider;
use crate::pool::{ObjectPool, PoolError, PoolHandle};
use crate::render::{LineRenderer, RendererCell, SharedRenderer};

/// Errors reported by [`BoundsDebugSystem`]
#[derive(Error, Debug)]
pub enum BoundsDebugError {
    /// Pool operation failed
    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),
    
    /// Configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    
    /// Drawing is switched off
    #[error("Bounds debug drawing is disabled")]
    Disabled,
}

/// Counters for monitoring
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoundsDebugStats {
    /// Outlines shown
    pub spawned: u64,
    /// Outlines that ran their full lifetime
    pub expired: u64,
    /// Outlines released before expiring
    pub released_early: u64,
    /// Requests rejected because the pool was full
    pub rejected: u64,
    /// Most outlines visible at once
    pub peak_active: usize,
}

/// Pooled, frame-limited bounding-box outlines
pub struct BoundsDebugSystem<R: LineRenderer> {
    config: BoundsDebugConfig,
    renderer: SharedRenderer<R>,
    pool: ObjectPool<BoundsVisual<R>>,
    stats: BoundsDebugStats,
}

impl<R: LineRenderer> BoundsDebugSystem<R> {
    /// Create a system drawing through `renderer`
    pub fn new(config: BoundsDebugConfig, renderer: R) -> Result<Self, BoundsDebugError> {
        Self::with_shared_renderer(config, RendererCell::shared(renderer))
    }
    
    /// Create a system drawing through a renderer shared with the host
    pub fn with_shared_renderer(
        config: BoundsDebugConfig,
        renderer: SharedRenderer<R>,
    ) -> Result<Self, BoundsDebugError> {
        config.validate()?;
        
        let pool = ObjectPool::with_factory(config.pool_capacity, || {
            BoundsVisual::from_config(renderer.clone(), &config)
        });
        
        log::info!(
            "Bounds debug system ready: {} slots, {} frame lifetime",
            config.pool_capacity,
            config.frame_count
        );
        
        Ok(Self {
            config,
            renderer,
            pool,
            stats: BoundsDebugStats::default(),
        })
    }
    
    /// Outline `collider` on `transform` for the configured number of frames
    ///
    /// `None` uses the configured default color.
    pub fn show_bounds(
        &mut self,
        transform: &SharedTransform,
        collider: BoxCollider,
        color: Option<Vec4>,
    ) -> Result<PoolHandle, BoundsDebugError> {
        if !self.config.enabled {
            return Err(BoundsDebugError::Disabled);
        }
        
        let params = BoundsParams {
            transform: transform.clone(),
            collider,
            color: color.unwrap_or(self.config.default_color),
        };
        
        match self.pool.acquire(params) {
            Ok(handle) => {
                self.stats.spawned += 1;
                self.stats.peak_active = self.stats.peak_active.max(self.pool.active_count());
                Ok(handle)
            }
            Err(error) => {
                self.stats.rejected += 1;
                Err(error.into())
            }
        }
    }
    
    /// Advance every outline by one frame. Returns how many expired
    pub fn update(&mut self) -> usize {
        self.renderer.flush_pending();
        let expired = self.pool.update().len();
        self.stats.expired += expired as u64;
        expired
    }
    
    /// Stop drawing an outline now
    pub fn release(&mut self, handle: PoolHandle) -> Result<(), BoundsDebugError> {
        self.pool.release(handle)?;
        self.stats.released_early += 1;
        Ok(())
    }
    
    /// Stop drawing every outline
    pub fn clear(&mut self) {
        let released = self.pool.clear();
        self.stats.released_early += released as u64;
    }
    
    /// Enable or disable drawing. Disabling clears every outline
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.clear();
        }
        self.config.enabled = enabled;
    }
    
    /// Check if drawing is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }
    
    /// Check whether a handle still refers to a visible outline
    pub fn is_showing(&self, handle: PoolHandle) -> bool {
        self.pool.is_handle_valid(handle)
    }
    
    /// Look up a live outline
    pub fn visual(&self, handle: PoolHandle) -> Option<&BoundsVisual<R>> {
        self.pool.get(handle)
    }
    
    /// Number of outlines being drawn
    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }
    
    /// Statistics since creation
    pub fn stats(&self) -> BoundsDebugStats {
        self.stats
    }
    
    /// Active configuration
    pub fn config(&self) -> &BoundsDebugConfig {
        &self.config
    }
    
    /// Borrow the renderer, applying any deferred line operations first
    pub fn renderer(&self) -> Ref<'_, R> {
        self.renderer.borrow()
    }
    
    /// Shared renderer handle
    pub fn shared_renderer(&self) -> SharedRenderer<R> {
        self.renderer.clone()
    }
}

impl<R: LineRenderer> Drop for BoundsDebugSystem<R> {
    fn drop(&mut self) {
        self.pool.destroy_all();
        self.renderer.flush_pending();
    }
}
