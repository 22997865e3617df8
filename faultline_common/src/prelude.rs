//! Prelude module for common re-exports.
//!
//! ```rust
//! use faultline_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, FaultlineConfig};

// ─── Reserved Keys ──────────────────────────────────────────────────
pub use crate::consts::{TAG_KEY, VECTOR_KEY};

// ─── Vector Format ──────────────────────────────────────────────────
pub use crate::format::VectorFormat;
