//! Reserved metadata keys and vector separators.
//!
//! Single source of truth for the keys written into an error's metadata bag
//! and for the default separators of the error-codes vector.

/// Metadata key holding the error code attached to an error.
pub const TAG_KEY: &str = "faultline.error_code";

/// Metadata key reserved for a previously computed error-codes vector.
pub const VECTOR_KEY: &str = "faultline.error_codes_vector";

/// Separator between a node's own code and the summary of its causes.
pub const DEFAULT_CHAIN_SEPARATOR: &str = " -> ";

/// Separator between sibling summaries of a fan-out.
pub const DEFAULT_SIBLING_SEPARATOR: &str = ", ";

/// Opens a group of two or more sibling summaries.
pub const DEFAULT_GROUP_OPEN: &str = "[";

/// Closes a group of two or more sibling summaries.
pub const DEFAULT_GROUP_CLOSE: &str = "]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys_are_distinct() {
        assert_ne!(TAG_KEY, VECTOR_KEY);
        assert!(!TAG_KEY.is_empty());
        assert!(!VECTOR_KEY.is_empty());
    }

    #[test]
    fn separators_are_not_blank() {
        for sep in [
            DEFAULT_CHAIN_SEPARATOR,
            DEFAULT_SIBLING_SEPARATOR,
            DEFAULT_GROUP_OPEN,
            DEFAULT_GROUP_CLOSE,
        ] {
            assert!(!sep.trim().is_empty(), "separator {sep:?} is blank");
        }
    }
}
