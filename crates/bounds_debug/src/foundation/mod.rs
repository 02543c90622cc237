//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and the shared transform type
//! - Frame countdowns driven by the host's update loop
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
