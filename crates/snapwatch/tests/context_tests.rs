//! Detection context tests

use snapwatch::*;

#[test]
fn test_context_from_json() {
    let ctx: DetectContext =
        serde_json::from_str(r#"{ "trace": true, "nan_policy": "distinct" }"#).unwrap();
    assert!(ctx.trace);
    assert_eq!(ctx.nan_policy, NanPolicy::Distinct);
}

#[test]
fn test_context_missing_keys_use_defaults() {
    let ctx: DetectContext = serde_json::from_str("{}").unwrap();
    assert_eq!(ctx, DetectContext::default());
}

#[test]
fn test_context_rejects_unknown_policy() {
    let parsed = serde_json::from_str::<DetectContext>(r#"{ "nan_policy": "fuzzy" }"#);
    assert!(parsed.is_err());
}

#[test]
fn test_comparator_keeps_its_context() {
    let cmp = SnapshotComparator::with_context(DetectContext::with_trace());
    assert!(cmp.context().trace);
    assert!(!cmp.is_initialized());
}
