//! Foundation module - shared utilities
//!
//! This module provides fundamental utilities used throughout the core:
//! - Math types for the 2D tile plane
//! - Logging utilities

pub mod logging;
pub mod math;
