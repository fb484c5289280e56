//! # Core Module
//!
//! Shared configuration that the render and asset layers read at startup.
//!
//! ## Organization
//!
//! - **Config**: Graphics settings (profile, mesh defaults, logging)
//! - **Foundation**: Low-level utilities (collections, logging)
//! - **Assets**: Resource management

pub mod config;

pub use crate::assets;
pub use crate::foundation;

pub use config::{Config, ConfigError, GraphicsConfig};
