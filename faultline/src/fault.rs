//! Taggable domain error types.
//!
//! - [`Fault`]: an error with at most one cause
//! - [`FaultGroup`]: a fan-out of sibling failures in a fixed order
//! - [`Opaque`]: a foreign error wrapped so it can carry a code
//!
//! All three own a metadata bag and can be mixed freely inside one tree.

use std::fmt;

use static_assertions::assert_impl_all;

use crate::metadata::Metadata;
use crate::node::{ErrorNode, dismantle};

/// Error with an optional single cause.
///
/// ```rust
/// use faultline::{Fault, TagExt};
///
/// # fn main() -> Result<(), faultline::TagError> {
/// let err = Fault::new("config rejected")
///     .with_cause(Fault::new("port out of range").with_tag("CFG_PORT")?)
///     .with_tag("CFG_LOAD")?;
/// assert_eq!(err.error_codes_vector().as_deref(), Some("CFG_LOAD -> CFG_PORT"));
/// # Ok(())
/// # }
/// ```
///
/// Dropping and `Debug` formatting never recurse into the cause chain, so
/// arbitrarily deep chains are safe to hold.
pub struct Fault {
    message: String,
    metadata: Metadata,
    cause: Option<Box<dyn ErrorNode>>,
}

impl Fault {
    /// Create a fault without a cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            cause: None,
        }
    }

    /// Set the cause, replacing any previous one.
    pub fn with_cause(mut self, cause: impl ErrorNode + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Set an already boxed cause.
    pub fn with_boxed_cause(mut self, cause: Box<dyn ErrorNode>) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hand back the cause if there is one, otherwise this fault.
    ///
    /// Values are moved, never rebuilt, so whatever the cause captured when
    /// it was created travels with it.
    pub fn into_cause_or_self(mut self) -> Box<dyn ErrorNode> {
        match self.cause.take() {
            Some(cause) => cause,
            None => Box::new(self),
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .field("metadata", &self.metadata)
            .field("has_cause", &self.cause.is_some())
            .finish()
    }
}

impl Drop for Fault {
    fn drop(&mut self) {
        dismantle(self.take_causes());
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl ErrorNode for Fault {
    fn metadata(&self) -> Option<&Metadata> {
        Some(&self.metadata)
    }

    fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        Some(&mut self.metadata)
    }

    fn cause_node(&self) -> Option<&dyn ErrorNode> {
        self.cause.as_deref().map(|cause| cause as &dyn ErrorNode)
    }

    fn take_causes(&mut self) -> Vec<Box<dyn ErrorNode>> {
        self.cause.take().into_iter().collect()
    }
}

/// Aggregate of sibling failures, e.g. parallel tasks that failed together.
///
/// Always a fan-out, even with zero or one cause.
pub struct FaultGroup {
    message: String,
    metadata: Metadata,
    causes: Vec<Box<dyn ErrorNode>>,
}

impl FaultGroup {
    /// Create an empty group.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            causes: Vec::new(),
        }
    }

    /// Append a cause.
    pub fn with_cause(mut self, cause: impl ErrorNode + 'static) -> Self {
        self.push(cause);
        self
    }

    /// Append a cause in place.
    pub fn push(&mut self, cause: impl ErrorNode + 'static) {
        self.causes.push(Box::new(cause));
    }

    /// Append an already boxed cause in place.
    pub fn push_boxed(&mut self, cause: Box<dyn ErrorNode>) {
        self.causes.push(cause);
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of causes.
    pub fn len(&self) -> usize {
        self.causes.len()
    }

    /// Returns true if the group has no causes.
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }
}

impl fmt::Debug for FaultGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultGroup")
            .field("message", &self.message)
            .field("metadata", &self.metadata)
            .field("causes", &self.causes.len())
            .finish()
    }
}

impl Drop for FaultGroup {
    fn drop(&mut self) {
        dismantle(self.take_causes());
    }
}

impl fmt::Display for FaultGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} causes)", self.message, self.causes.len())
    }
}

impl std::error::Error for FaultGroup {
    // std only knows single causes; report the first sibling.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes
            .first()
            .map(|cause| &**cause as &(dyn std::error::Error + 'static))
    }
}

impl ErrorNode for FaultGroup {
    fn metadata(&self) -> Option<&Metadata> {
        Some(&self.metadata)
    }

    fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        Some(&mut self.metadata)
    }

    fn cause_nodes(&self) -> Option<Vec<&dyn ErrorNode>> {
        Some(
            self.causes
                .iter()
                .map(|cause| &**cause as &dyn ErrorNode)
                .collect(),
        )
    }

    fn take_causes(&mut self) -> Vec<Box<dyn ErrorNode>> {
        std::mem::take(&mut self.causes)
    }
}

impl FromIterator<Box<dyn ErrorNode>> for FaultGroup {
    fn from_iter<I: IntoIterator<Item = Box<dyn ErrorNode>>>(iter: I) -> Self {
        Self {
            message: "multiple failures".to_string(),
            metadata: Metadata::new(),
            causes: iter.into_iter().collect(),
        }
    }
}

/// Foreign error wrapped with a metadata bag.
///
/// Acts as a leaf in a cause tree: its own `source()` chain is reported by
/// `std::error::Error` but not walked by the flattener.
#[derive(Debug)]
pub struct Opaque {
    inner: Box<dyn std::error::Error + Send + Sync>,
    metadata: Metadata,
}

impl Opaque {
    /// Wrap a foreign error.
    pub fn new(inner: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            inner: inner.into(),
            metadata: Metadata::new(),
        }
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Unwrap the foreign error, dropping the bag.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.inner
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for Opaque {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl ErrorNode for Opaque {
    fn metadata(&self) -> Option<&Metadata> {
        Some(&self.metadata)
    }

    fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        Some(&mut self.metadata)
    }
}

assert_impl_all!(Fault: Send, Sync);
assert_impl_all!(FaultGroup: Send, Sync);
assert_impl_all!(Opaque: Send, Sync);
assert_impl_all!(crate::error::TagError: Send, Sync);
