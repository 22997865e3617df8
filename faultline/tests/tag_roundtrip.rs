//! Property tests for the tag store.

use faultline::prelude::*;
use proptest::prelude::*;

/// Strings with at least one non-whitespace character, padded with
/// arbitrary whitespace on both sides.
fn valid_code() -> impl Strategy<Value = String> {
    ("[ \t\r\n]{0,3}", "[A-Za-z0-9_.:-]{1,24}", "[ \t\r\n]{0,3}")
        .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
}

proptest! {
    #[test]
    fn attached_code_reads_back_verbatim(code in valid_code()) {
        let err = Fault::new("boom").with_tag(&code).unwrap();
        prop_assert_eq!(read_tag(&err), Some(code.as_str()));
        prop_assert_eq!(flatten(&err), Some(code.clone()));
    }

    #[test]
    fn blank_codes_are_rejected(code in "[ \t\r\n]{0,8}") {
        let mut err = Fault::new("boom");
        let failure = attach_tag(&mut err, &code).unwrap_err();
        prop_assert!(failure.is_invalid_argument());
        prop_assert_eq!(read_tag(&err), None);
    }

    #[test]
    fn second_attach_always_conflicts(first in valid_code(), second in valid_code()) {
        let mut err = Fault::new("boom").with_tag(&first).unwrap();
        let failure = attach_tag(&mut err, &second).unwrap_err();
        prop_assert!(failure.is_conflict());
        prop_assert_eq!(read_tag(&failure), Some(second.as_str()));
        prop_assert_eq!(read_tag(&err), Some(first.as_str()));
    }
}
