use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use objkit::{
    clone_value, deep_equal, left_outer_join, left_outer_join_on, merge_concat_arrays,
    merge_replace_arrays, normalize_query, random_int, Debouncer, ObjkitError, ObjkitResult,
    TimingError, Toolkit, Value,
};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

#[test]
fn merge_then_compare() {
    let defaults = v(json!({"retry": {"count": 3, "codes": [500]}, "name": "svc"}));
    let overrides = v(json!({"retry": {"codes": [503]}, "debug": true}));

    let concat = merge_concat_arrays(&[defaults.clone(), overrides.clone()]);
    let replaced = merge_replace_arrays(&[defaults, overrides]);

    assert_eq!(
        concat,
        v(json!({"retry": {"count": 3, "codes": [500, 503]}, "name": "svc", "debug": true}))
    );
    assert_eq!(
        replaced,
        v(json!({"retry": {"count": 3, "codes": [503]}, "name": "svc", "debug": true}))
    );
    assert!(!deep_equal(&[concat, replaced]));
}

#[test]
fn merged_single_value_is_leaf_equal() {
    let original = v(json!({"a": [1, {"b": 2}], "c": null}));
    let merged = merge_concat_arrays(std::slice::from_ref(&original));
    assert!(deep_equal(&[original, merged]));
}

#[test]
fn comparator_ignores_key_names() {
    assert!(deep_equal(&[v(json!({"a": 1, "b": 2})), v(json!({"x": 1, "y": 2}))]));
    assert!(deep_equal(&[v(json!({"a": {"x": 1}})), v(json!({"b": {"x": 1}}))]));
    assert!(!deep_equal(&[v(json!({"a": 1})), v(json!({"a": 2}))]));
}

#[test]
fn joins() {
    assert_eq!(left_outer_join(&[1, 2, 3], &[2, 3]), vec![1]);
    assert_eq!(
        left_outer_join_on(&[v(json!({"id": 1})), v(json!({"id": 2}))], &[v(json!({"id": 2}))], "id"),
        vec![v(json!({"id": 1}))]
    );
}

#[test]
fn clone_round_trip() {
    let original = v(json!({"list": [1, 2, {"deep": "yes"}], "flag": false}));
    let copy = clone_value(&original).unwrap();
    assert!(deep_equal(&[original.clone(), copy.clone()]));
    assert_eq!(original, copy);
}

#[test]
fn query_and_random() {
    assert_eq!(normalize_query([("a", "1"), ("b", "")]), "?a=1");
    for _ in 0..200 {
        assert!((0..10).contains(&random_int(0, 10, false)));
        assert!((0..=10).contains(&random_int(0, 10, true)));
    }
}

#[tokio::test(start_paused = true)]
async fn debounced_burst_shares_one_result() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let debouncer = Debouncer::new(Duration::from_millis(50), move |doc: Value| {
        counter.fetch_add(1, Ordering::SeqCst);
        merge_concat_arrays(&[doc])
    });

    let first = debouncer.call(v(json!({"rev": 1})));
    let second = debouncer.call(v(json!({"rev": 2})));
    let (a, b) = tokio::join!(first, second);

    assert_eq!(a.unwrap(), v(json!({"rev": 2})));
    assert_eq!(b.unwrap(), v(json!({"rev": 2})));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn toolkit_debouncer_from_config() {
    let toolkit = Toolkit::from_toml_str("[debounce]\nwait = 20").unwrap();
    let debouncer = toolkit.debouncer(|n: i64| n + 1);
    assert_eq!(debouncer.call(41).await, Ok(42));
}

async fn debounced_len(toolkit: &Toolkit, text: &str) -> ObjkitResult<usize> {
    let debouncer = toolkit.debouncer(|s: String| s.len());
    Ok(debouncer.call(text.to_string()).await?)
}

#[tokio::test(start_paused = true)]
async fn timing_errors_convert_into_objkit_errors() {
    let toolkit = Toolkit::default();
    assert_eq!(debounced_len(&toolkit, "abcd").await.unwrap(), 4);

    let debouncer = toolkit.debouncer(|n: u8| n);
    let pending = debouncer.call(1);
    debouncer.cancel();
    let err: ObjkitError = pending.await.unwrap_err().into();
    assert!(matches!(err, ObjkitError::Timing(TimingError::Cancelled)));
}
