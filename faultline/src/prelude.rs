//! Prelude module for common re-exports.
//!
//! ```rust
//! use faultline::prelude::*;
//! ```

// ─── Error Types ────────────────────────────────────────────────────
pub use crate::error::{TagError, TagErrorKind, TagResult};
pub use crate::fault::{Fault, FaultGroup, Opaque};

// ─── Tag Store ──────────────────────────────────────────────────────
pub use crate::metadata::Metadata;
pub use crate::tag::{TagExt, attach_tag, read_tag};

// ─── Cause Tree ─────────────────────────────────────────────────────
pub use crate::node::{ErrorNode, Shape, shape};

// ─── Vector ─────────────────────────────────────────────────────────
pub use crate::flatten::{flatten, flatten_with, read_vector, record_vector};
pub use faultline_common::format::VectorFormat;
