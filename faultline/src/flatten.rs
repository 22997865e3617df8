//! Error-codes vector: one string summarizing every code in a cause tree.
//!
//! Nodes are combined post-order:
//!
//! - a node's child summary is its single cause's summary (Chained), or the
//!   non-empty summaries of its sibling causes (Fanned): none → absent,
//!   exactly one → that summary as is, two or more → `[s1, s2, ...]`
//! - own code and child summary join as `code -> summary`; either alone
//!   stands for the node; neither makes the node absent
//!
//! ```rust
//! use faultline::{flatten, Fault, FaultGroup, TagExt};
//!
//! # fn main() -> Result<(), faultline::TagError> {
//! let fan_out = FaultGroup::new("batch failed")
//!     .with_cause(Fault::new("a").with_tag("ErrorC")?)
//!     .with_cause(Fault::new("b"))
//!     .with_cause(Fault::new("c").with_tag("ErrorG")?);
//! let root = Fault::new("request failed")
//!     .with_cause(fan_out)
//!     .with_tag("ErrorA")?;
//!
//! assert_eq!(flatten(&root).as_deref(), Some("ErrorA -> [ErrorC, ErrorG]"));
//! # Ok(())
//! # }
//! ```
//!
//! The walk uses an explicit stack, so arbitrarily deep chains cannot
//! overflow the thread stack. Summaries are kept as deques of borrowed
//! fragments and only concatenated once at the root.

use std::collections::VecDeque;
use std::sync::LazyLock;

use faultline_common::consts::VECTOR_KEY;
use faultline_common::format::VectorFormat;
use tracing::{debug, warn};

use crate::error::{TagError, TagResult};
use crate::node::{ErrorNode, shape};
use crate::tag::read_tag;

static DEFAULT_FORMAT: LazyLock<VectorFormat> = LazyLock::new(VectorFormat::default);

type Pieces<'a> = VecDeque<&'a str>;

/// A node whose causes are still being walked.
struct Frame<'a> {
    tag: Option<&'a str>,
    causes: Vec<&'a dyn ErrorNode>,
    next: usize,
    kept: Vec<Pieces<'a>>,
}

impl<'a> Frame<'a> {
    fn open<E: ErrorNode + ?Sized>(node: &'a E) -> Self {
        Self {
            tag: read_tag(node),
            causes: shape(node).into_causes(),
            next: 0,
            kept: Vec::new(),
        }
    }

    fn close(mut self, format: &'a VectorFormat) -> Option<Pieces<'a>> {
        // A chained node has at most one cause, so the fan-out rules cover it.
        let below = if self.kept.len() > 1 {
            Some(group(self.kept, format))
        } else {
            self.kept.pop()
        };

        match (self.tag, below) {
            (Some(tag), Some(mut below)) => {
                below.push_front(&format.chain_separator);
                below.push_front(tag);
                Some(below)
            }
            (Some(tag), None) => Some(VecDeque::from([tag])),
            (None, below) => below,
        }
    }
}

fn group<'a>(kept: Vec<Pieces<'a>>, format: &'a VectorFormat) -> Pieces<'a> {
    let mut kept = kept.into_iter();
    let mut out = kept.next().unwrap_or_default();
    out.push_front(&format.group_open);
    for mut sibling in kept {
        out.push_back(&format.sibling_separator);
        out.append(&mut sibling);
    }
    out.push_back(&format.group_close);
    out
}

/// Error-codes vector of the tree rooted at `error`, in the default format.
///
/// `None` exactly when no node of the tree carries a code.
pub fn flatten<E: ErrorNode + ?Sized>(error: &E) -> Option<String> {
    flatten_with(error, &DEFAULT_FORMAT)
}

/// Error-codes vector of the tree rooted at `error`, rendered with `format`.
pub fn flatten_with<'a, E: ErrorNode + ?Sized>(
    error: &'a E,
    format: &'a VectorFormat,
) -> Option<String> {
    let mut stack = vec![Frame::open(error)];
    let mut visited = 1usize;

    while let Some(top) = stack.last_mut() {
        if let Some(&cause) = top.causes.get(top.next) {
            top.next += 1;
            stack.push(Frame::open(cause));
            visited += 1;
            continue;
        }

        let summary = stack.pop().and_then(|frame| frame.close(format));
        match stack.last_mut() {
            Some(parent) => parent.kept.extend(summary),
            None => {
                let vector = summary.map(|pieces| pieces.into_iter().collect::<String>());
                debug!(nodes = visited, coded = vector.is_some(), "flattened cause tree");
                return vector;
            }
        }
    }

    None
}

/// Compute the error-codes vector of `error` and record it under
/// [`VECTOR_KEY`] in its own bag.
///
/// Nothing is written when the tree carries no code. Once a vector is
/// recorded, the error refuses further codes.
///
/// # Errors
///
/// - `InvalidArgument` naming `error.metadata` if the error has no bag
/// - `Conflict` naming [`VECTOR_KEY`] if a vector is already recorded
pub fn record_vector<E: ErrorNode + ?Sized>(error: &mut E) -> TagResult<Option<String>> {
    let vector = flatten(&*error);

    let Some(metadata) = error.metadata_mut() else {
        warn!("cannot record error-codes vector: error has no metadata bag");
        return Err(TagError::invalid_argument("error.metadata", "is absent"));
    };
    if metadata.contains_key(VECTOR_KEY) {
        warn!(key = VECTOR_KEY, "cannot record error-codes vector: key already occupied");
        return Err(TagError::conflict(VECTOR_KEY));
    }

    if let Some(vector) = &vector {
        metadata.insert(VECTOR_KEY, vector.as_str());
    }
    Ok(vector)
}

/// Error-codes vector previously recorded on `error`.
pub fn read_vector<E: ErrorNode + ?Sized>(error: &E) -> Option<&str> {
    error.metadata()?.get(VECTOR_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::{Fault, FaultGroup};
    use crate::tag::{TagExt, attach_tag};

    fn coded(tag: &str) -> Fault {
        Fault::new(tag.to_lowercase()).with_tag(tag).unwrap()
    }

    #[test]
    fn leaf_with_code() {
        assert_eq!(flatten(&coded("ErrorX")).as_deref(), Some("ErrorX"));
    }

    #[test]
    fn untagged_fan_out_passes_single_branch_through() {
        let group = FaultGroup::new("g")
            .with_cause(Fault::new("a"))
            .with_cause(coded("ErrorB"));
        assert_eq!(flatten(&group).as_deref(), Some("ErrorB"));
    }

    #[test]
    fn empty_fan_out_is_absent() {
        assert_eq!(flatten(&FaultGroup::new("g")), None);
        let tagged = FaultGroup::new("g").with_tag("ErrorG").unwrap();
        assert_eq!(flatten(&tagged).as_deref(), Some("ErrorG"));
    }

    #[test]
    fn custom_format() {
        let format = VectorFormat {
            chain_separator: " => ".to_string(),
            sibling_separator: " | ".to_string(),
            group_open: "{".to_string(),
            group_close: "}".to_string(),
        };
        let root = Fault::new("root")
            .with_cause(
                FaultGroup::new("g")
                    .with_cause(coded("ErrorB"))
                    .with_cause(coded("ErrorC")),
            )
            .with_tag("ErrorA")
            .unwrap();
        assert_eq!(
            flatten_with(&root, &format).as_deref(),
            Some("ErrorA => {ErrorB | ErrorC}")
        );
    }

    #[test]
    fn record_vector_caches_and_blocks_new_codes() {
        let mut root = Fault::new("root").with_cause(coded("ErrorB"));
        assert_eq!(record_vector(&mut root).unwrap().as_deref(), Some("ErrorB"));
        assert_eq!(read_vector(&root), Some("ErrorB"));

        let err = attach_tag(&mut root, "ErrorA").unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains(VECTOR_KEY));
        assert_eq!(read_tag(&err), Some("ErrorA"));

        let again = record_vector(&mut root).unwrap_err();
        assert!(again.is_conflict());
        assert_eq!(read_vector(&root), Some("ErrorB"));
    }

    #[test]
    fn record_vector_without_codes_writes_nothing() {
        let mut root = Fault::new("root").with_cause(Fault::new("leaf"));
        assert_eq!(record_vector(&mut root).unwrap(), None);
        assert_eq!(read_vector(&root), None);
        assert!(attach_tag(&mut root, "ErrorA").is_ok());
    }
}
