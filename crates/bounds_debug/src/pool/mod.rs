//! Object pooling
//!
//! Fixed-capacity pool of reusable objects addressed by generational
//! handles. Members implement [`Poolable`]; the pool ticks active members
//! once per update and takes back the ones that expire.
//!
//! # Architecture
//!
//! - **Pre-allocation**: every slot is built at startup by a factory
//! - **Free list**: O(1) acquisition and return, FIFO reuse order
//! - **Generations**: returning a slot bumps its generation, so handles to
//!   the previous occupant go stale instead of aliasing the next one

use std::collections::VecDeque;
use thiserror::Error;

/// Handle to a pooled object with generation counter for safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    /// Index in the object pool
    pub index: u32,
    /// Generation counter to prevent use-after-release
    pub generation: u32,
}

impl PoolHandle {
    /// Create a new handle with index and generation
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Errors that can occur during pool operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot is in use
    #[error("Pool exhausted: all {capacity} slots in use")]
    Exhausted {
        /// Total slots in the pool
        capacity: usize,
    },
    
    /// Handle refers to a slot that has since been returned or reused
    #[error("Stale pool handle {handle:?}")]
    StaleHandle {
        /// The rejected handle
        handle: PoolHandle,
    },
}

/// Result of ticking a pooled object once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still active with this many ticks left
    Active(u32),
    /// Reached the end of its lifetime on this tick and released itself
    Expired,
    /// Was not active
    Inactive,
}

/// An object that can live in an [`ObjectPool`]
pub trait Poolable {
    /// Data needed to (re)activate the object
    type Params;
    
    /// Bring the object into its active state for a new user
    fn activate(&mut self, params: Self::Params);
    
    /// Advance one update tick
    fn tick(&mut self) -> TickOutcome;
    
    /// Stop immediately. Returns false if the object was not active
    fn release(&mut self) -> bool;
    
    /// Free every resource the object owns
    fn destroy(&mut self);
    
    /// Check whether the object is currently active
    fn is_active(&self) -> bool;
}

/// Pool of reusable objects
pub struct ObjectPool<T> {
    /// Storage for pool objects
    objects: Vec<T>,
    /// Free list for O(1) allocation
    free_indices: VecDeque<usize>,
    /// Whether each slot is handed out
    in_use: Vec<bool>,
    /// Generation counters for each slot
    generations: Vec<u32>,
    /// Maximum capacity
    capacity: usize,
}

impl<T: Poolable + Default> ObjectPool<T> {
    /// Create a new object pool with default-constructed slots
    pub fn new(capacity: usize) -> Self {
        Self::with_factory(capacity, T::default)
    }
}

impl<T: Poolable> ObjectPool<T> {
    /// Create a new object pool, building each slot with `factory`
    pub fn with_factory(capacity: usize, mut factory: impl FnMut() -> T) -> Self {
        let mut objects = Vec::with_capacity(capacity);
        let mut free_indices = VecDeque::with_capacity(capacity);
        
        // Initialize all slots as available
        for i in 0..capacity {
            objects.push(factory());
            free_indices.push_back(i);
        }
        
        Self {
            objects,
            free_indices,
            in_use: vec![false; capacity],
            generations: vec![0; capacity],
            capacity,
        }
    }
    
    /// Take a free object and activate it
    pub fn acquire(&mut self, params: T::Params) -> Result<PoolHandle, PoolError> {
        let Some(index) = self.free_indices.pop_front() else {
            log::warn!("Object pool exhausted ({} slots)", self.capacity);
            return Err(PoolError::Exhausted { capacity: self.capacity });
        };
        
        self.in_use[index] = true;
        self.objects[index].activate(params);
        Ok(self.handle_for(index))
    }
    
    /// Tick every active object once and take back the ones that expired
    ///
    /// Returns the handles of the expired objects; they are stale on return.
    pub fn update(&mut self) -> Vec<PoolHandle> {
        let mut expired = Vec::new();
        
        for index in 0..self.capacity {
            if !self.in_use[index] {
                continue;
            }
            if self.objects[index].tick() == TickOutcome::Expired {
                expired.push(self.handle_for(index));
                self.reclaim(index);
            }
        }
        
        expired
    }
    
    /// Release an object early and return it to the pool
    pub fn release(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        if !self.is_handle_valid(handle) {
            return Err(PoolError::StaleHandle { handle });
        }
        
        let index = handle.index as usize;
        self.objects[index].release();
        self.reclaim(index);
        Ok(())
    }
    
    /// Release every active object. Returns how many were released
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        for index in 0..self.capacity {
            if self.in_use[index] {
                self.objects[index].release();
                self.reclaim(index);
                released += 1;
            }
        }
        released
    }
    
    /// Release everything and free each object's resources
    pub fn destroy_all(&mut self) {
        self.clear();
        for object in &mut self.objects {
            object.destroy();
        }
    }
    
    /// Validate handle and get object
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        if self.is_handle_valid(handle) {
            self.objects.get(handle.index as usize)
        } else {
            None
        }
    }
    
    /// Check if a handle refers to the current occupant of an in-use slot
    pub fn is_handle_valid(&self, handle: PoolHandle) -> bool {
        let index = handle.index as usize;
        index < self.capacity && self.in_use[index] && self.generations[index] == handle.generation
    }
    
    /// Handles of every object currently in use
    pub fn active_handles(&self) -> Vec<PoolHandle> {
        (0..self.capacity)
            .filter(|&index| self.in_use[index])
            .map(|index| self.handle_for(index))
            .collect()
    }
    
    /// Get number of available slots
    pub fn available_count(&self) -> usize {
        self.free_indices.len()
    }
    
    /// Get number of active objects
    pub fn active_count(&self) -> usize {
        self.capacity - self.free_indices.len()
    }
    
    /// Get total capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    
    fn handle_for(&self, index: usize) -> PoolHandle {
        PoolHandle::new(index as u32, self.generations[index])
    }
    
    fn reclaim(&mut self, index: usize) {
        // Increment generation to invalidate old handles
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.in_use[index] = false;
        self.free_indices.push_back(index);
    }
}
