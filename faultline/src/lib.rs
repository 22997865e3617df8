//! # Faultline
//!
//! Attach machine-readable error codes to errors without changing their
//! types, and flatten a whole tree of chained and fanned-out failures into
//! one deterministic error-codes vector for logging and alerting.
//!
//! ## Layers
//!
//! - **Tag store** ([`attach_tag`], [`read_tag`], [`TagExt`]): one code per
//!   error, kept in the error's [`Metadata`] bag
//! - **Cause-tree navigator** ([`ErrorNode`], [`shape`]): classifies errors
//!   as Chained (zero or one cause) or Fanned (ordered sibling causes) by
//!   capability
//! - **Vector flattener** ([`flatten`], [`flatten_with`]): post-order walk
//!   combining codes into `A -> B -> [C -> D, E]`
//!
//! ## Usage
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! # fn main() -> Result<(), TagError> {
//! let d = Fault::new("disk read failed").with_tag("ErrorD")?;
//! let c = Fault::new("segment lost").with_cause(d).with_tag("ErrorC")?;
//! let g = Fault::new("index stale").with_tag("ErrorG")?;
//! let b = FaultGroup::new("replication failed")
//!     .with_cause(c)
//!     .with_cause(g)
//!     .with_tag("ErrorB")?;
//! let a = Fault::new("write rejected").with_cause(b).with_tag("ErrorA")?;
//!
//! assert_eq!(
//!     flatten(&a).as_deref(),
//!     Some("ErrorA -> ErrorB -> [ErrorC -> ErrorD, ErrorG]")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! [`flatten`] only reads, so one tree may be flattened from many threads
//! at once. Attaching needs `&mut`, which rules out concurrent attaches to
//! the same error without external locking.

pub mod error;
pub mod fault;
pub mod flatten;
pub mod metadata;
pub mod node;
pub mod prelude;
pub mod tag;

pub use error::{TagError, TagErrorKind, TagResult};
pub use fault::{Fault, FaultGroup, Opaque};
pub use flatten::{flatten, flatten_with, read_vector, record_vector};
pub use metadata::Metadata;
pub use node::{ErrorNode, Shape, shape};
pub use tag::{TagExt, attach_tag, read_tag};

pub use faultline_common::consts::{TAG_KEY, VECTOR_KEY};
pub use faultline_common::format::VectorFormat;
