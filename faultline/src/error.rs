//! Error types for tag store operations

use faultline_common::consts::TAG_KEY;
use thiserror::Error;

use crate::metadata::Metadata;
use crate::node::ErrorNode;

/// Kinds of tag store failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagErrorKind {
    /// An argument is missing, empty or blank
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A reserved metadata key is already occupied
    #[error("error.metadata keys already contain `{key}`")]
    Conflict {
        /// Occupied key
        key: &'static str,
    },
}

/// Failure raised by the tag store.
///
/// Carries its own metadata bag so the code that was being attached can be
/// recovered from the failure with [`read_tag`](crate::read_tag).
///
/// When [`TagExt::with_tag`](crate::TagExt::with_tag) fails, the error it
/// consumed is kept as the failure's cause, so the original tree is still
/// reachable and still shows up in the failure's error-codes vector.
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct TagError {
    kind: TagErrorKind,
    metadata: Metadata,
    rejected: Option<Box<dyn ErrorNode>>,
}

impl TagError {
    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Self::from(TagErrorKind::InvalidArgument { name, reason })
    }

    pub(crate) fn conflict(key: &'static str) -> Self {
        Self::from(TagErrorKind::Conflict { key })
    }

    /// Annotate the failure with the code whose attach failed.
    pub(crate) fn carrying(mut self, tag: &str) -> Self {
        self.metadata.insert(TAG_KEY, tag);
        self
    }

    /// Keep the error whose attach failed as this failure's cause.
    pub(crate) fn rejecting(mut self, error: Box<dyn ErrorNode>) -> Self {
        self.rejected = Some(error);
        self
    }

    /// The error whose attach failed, when the failure took ownership of it.
    pub fn rejected(&self) -> Option<&dyn ErrorNode> {
        self.rejected.as_deref().map(|error| error as &dyn ErrorNode)
    }

    /// Take back the error whose attach failed.
    pub fn into_rejected(mut self) -> Option<Box<dyn ErrorNode>> {
        self.rejected.take()
    }

    /// Failure kind.
    pub fn kind(&self) -> &TagErrorKind {
        &self.kind
    }

    /// Returns true for an invalid argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, TagErrorKind::InvalidArgument { .. })
    }

    /// Returns true for a reserved-key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind, TagErrorKind::Conflict { .. })
    }
}

impl From<TagErrorKind> for TagError {
    fn from(kind: TagErrorKind) -> Self {
        Self {
            kind,
            metadata: Metadata::new(),
            rejected: None,
        }
    }
}

impl ErrorNode for TagError {
    fn metadata(&self) -> Option<&Metadata> {
        Some(&self.metadata)
    }

    fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        Some(&mut self.metadata)
    }

    fn cause_node(&self) -> Option<&dyn ErrorNode> {
        self.rejected()
    }

    fn take_causes(&mut self) -> Vec<Box<dyn ErrorNode>> {
        self.rejected.take().into_iter().collect()
    }
}

/// Result type for tag store operations
pub type TagResult<T> = Result<T, TagError>;
