//! Faultline Common Library
//!
//! This crate provides the reserved metadata keys, the vector format and the
//! configuration loading utilities shared by the faultline workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Reserved metadata keys and default vector separators
//! - [`format`] - Separators used when composing an error-codes vector
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use faultline_common::consts::TAG_KEY;
//! use faultline_common::config::{ConfigLoader, FaultlineConfig};
//! ```

pub mod config;
pub mod consts;
pub mod format;
pub mod prelude;
