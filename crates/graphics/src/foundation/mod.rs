//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Typed generational handles
//! - Logging utilities

pub mod collections;
pub mod logging;
