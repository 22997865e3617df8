//! Tag store: attach and read the error code of a single error.
//!
//! A code lives under [`TAG_KEY`] in the error's metadata bag. It is written
//! once and never overwritten; an error that already holds a code, or a
//! recorded vector under [`VECTOR_KEY`], refuses a new one.

use faultline_common::consts::{TAG_KEY, VECTOR_KEY};
use tracing::{trace, warn};

use crate::error::{TagError, TagResult};
use crate::flatten::flatten;
use crate::node::ErrorNode;

/// Attach `tag` as the error code of `error`.
///
/// Returns the same reference so call sites can keep working with the error.
///
/// # Errors
///
/// - `InvalidArgument` naming `tag` if it is empty or white space only
/// - `InvalidArgument` naming `error.metadata` if the error has no bag
/// - `Conflict` naming [`TAG_KEY`] or [`VECTOR_KEY`] if either is occupied
///
/// Except for an invalid `tag`, the returned [`TagError`] carries `tag` as
/// its own error code.
pub fn attach_tag<'e, E: ErrorNode + ?Sized>(error: &'e mut E, tag: &str) -> TagResult<&'e mut E> {
    validate_tag(tag)?;

    let Some(metadata) = error.metadata_mut() else {
        warn!(tag, "cannot attach error code: error has no metadata bag");
        return Err(TagError::invalid_argument("error.metadata", "is absent").carrying(tag));
    };

    for key in [TAG_KEY, VECTOR_KEY] {
        if metadata.contains_key(key) {
            warn!(key, tag, "cannot attach error code: key already occupied");
            return Err(TagError::conflict(key).carrying(tag));
        }
    }

    metadata.insert(TAG_KEY, tag);
    trace!(tag, "attached error code");
    Ok(error)
}

/// Error code attached to `error`, verbatim.
///
/// `None` if the error has no bag or no code was attached.
pub fn read_tag<E: ErrorNode + ?Sized>(error: &E) -> Option<&str> {
    error.metadata()?.get(TAG_KEY)
}

fn validate_tag(tag: &str) -> TagResult<()> {
    if tag.is_empty() {
        return Err(TagError::invalid_argument("tag", "must not be empty"));
    }
    if tag.chars().all(char::is_whitespace) {
        return Err(TagError::invalid_argument("tag", "must not be white space"));
    }
    Ok(())
}

/// Tagging helpers available on every sized [`ErrorNode`].
///
/// ```rust
/// use faultline::{Fault, TagExt};
///
/// # fn main() -> Result<(), faultline::TagError> {
/// let err = Fault::new("disk full").with_tag("IO_DISK_FULL")?;
/// assert_eq!(err.error_code(), Some("IO_DISK_FULL"));
/// # Ok(())
/// # }
/// ```
pub trait TagExt: ErrorNode + Sized {
    /// Attach `tag` and hand the error back.
    ///
    /// On failure the consumed error is not lost: it becomes the cause of the
    /// returned [`TagError`], see [`TagError::rejected`].
    fn with_tag(mut self, tag: &str) -> TagResult<Self>
    where
        Self: 'static,
    {
        let attached = attach_tag(&mut self, tag).map(|_| ());
        if let Err(failure) = attached {
            return Err(failure.rejecting(Box::new(self)));
        }
        Ok(self)
    }

    /// Error code attached to this error.
    fn error_code(&self) -> Option<&str> {
        read_tag(self)
    }

    /// Error-codes vector of the cause tree rooted at this error.
    fn error_codes_vector(&self) -> Option<String> {
        flatten(self)
    }
}

impl<T: ErrorNode> TagExt for T {}
