//! Property-based tests for the path value type.
//!
//! Construction normalization and concatenation already have
//! example-based unit tests in `types.rs`; these properties cover the
//! same contracts over generated inputs.

use proptest::prelude::*;

use super::decompose::remove_extension;
use super::style::{HostStyle, PosixStyle, PREFERRED_SEPARATOR};
use super::types::Path;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,10}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..=5).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    relative_path_strategy().prop_map(|rel| format!("/{rel}"))
}

// Arbitrary raw input: segments glued with either separator character.
fn mixed_separator_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (segment_strategy(), prop_oneof![Just('/'), Just('\\')]),
        0..=6,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(segment, sep)| format!("{segment}{sep}"))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2048,
        .. ProptestConfig::default()
    })]

    // The string form never contains the non-preferred separator.
    #[test]
    fn construction_removes_non_preferred_separator(raw in mixed_separator_strategy()) {
        let non_preferred = if PREFERRED_SEPARATOR == '/' { '\\' } else { '/' };
        let p: Path<HostStyle> = Path::from(raw);
        prop_assert!(!p.as_str().contains(non_preferred));
    }

    // Segments are a pure function of the string form.
    #[test]
    fn segments_recomputed_from_string_form(raw in mixed_separator_strategy()) {
        let p: Path<HostStyle> = Path::from(raw);
        let rebuilt: Path<HostStyle> = Path::from(p.as_str());
        prop_assert_eq!(p.segments(), rebuilt.segments());
    }

    // Joining a relative path concatenates string forms (modulo the
    // separator) and segment vectors.
    #[test]
    fn join_relative_concatenates(a in relative_path_strategy(), b in relative_path_strategy()) {
        let left: Path<HostStyle> = Path::from(a.as_str());
        let right = Path::from(b.as_str());
        let joined = left.join(&right);

        let expected = format!("{}{}{}", left.as_str(), PREFERRED_SEPARATOR, right.as_str());
        prop_assert_eq!(joined.as_str(), expected);

        let mut expected_segments = left.segments().to_vec();
        expected_segments.extend_from_slice(right.segments());
        prop_assert_eq!(joined.segments(), expected_segments.as_slice());
    }

    // An absolute right-hand side discards the left operand entirely.
    #[test]
    fn join_absolute_resets_base(a in relative_path_strategy(), b in absolute_path_strategy()) {
        let right = Path::<PosixStyle>::from(b.as_str());
        let joined = Path::<PosixStyle>::from(a.as_str()).join(&right);
        prop_assert_eq!(joined, right);
    }

    // parent_path and filename reconstruct any multi-segment path.
    #[test]
    fn parent_and_filename_reconstruct(
        raw in prop::collection::vec(segment_strategy(), 2..=5),
        absolute in any::<bool>(),
    ) {
        let joined = raw.join("/");
        let text = if absolute { format!("/{joined}") } else { joined };
        let p = Path::<PosixStyle>::from(text.as_str());
        prop_assert_eq!(p.parent_path().join(p.filename()), p);
    }

    // Absolute path strings round-trip through is_absolute.
    #[test]
    fn absolute_paths_detected(s in absolute_path_strategy()) {
        prop_assert!(Path::<PosixStyle>::from(s.as_str()).is_absolute());
    }

    // Removing more extensions than exist settles at the dotless stem.
    #[test]
    fn remove_extension_saturates(
        stem in "[a-zA-Z0-9_-]{1,10}",
        extensions in prop::collection::vec("[a-z]{1,4}", 0..=3),
        extra in 0usize..3,
    ) {
        let mut name = stem.clone();
        for ext in &extensions {
            name.push('.');
            name.push_str(ext);
        }
        let p = Path::<PosixStyle>::from(name.as_str());
        let stripped = remove_extension(&p, extensions.len() + extra);
        prop_assert_eq!(stripped, Path::from(stem.as_str()));
    }
}
