use serde::Serialize;
use serde_json::json;
use std::rc::Rc;

use super::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_slice_typed_access() {
    let slice = Slice::new(Point { x: 1, y: 2 });

    assert_eq!(slice.get::<Point>(), Some(&Point { x: 1, y: 2 }));
    assert!(slice.get::<i64>().is_none());
    assert!(slice.downcast::<String>().is_none());

    let shared = slice.downcast::<Point>().unwrap();
    assert_eq!(shared.x, 1);
}

#[test]
fn test_slice_from_rc_keeps_allocation() {
    let value = Rc::new(Point { x: 3, y: 4 });
    let slice = Slice::from_rc(Rc::clone(&value));
    let back = slice.downcast::<Point>().unwrap();

    assert!(Rc::ptr_eq(&value, &back));
}

#[test]
fn test_slice_equality() {
    let a = Slice::new(Point { x: 1, y: 1 });
    let b = Slice::new(Point { x: 1, y: 1 });
    let c = Slice::new(Point { x: 2, y: 1 });
    let d = Slice::new(1i64);

    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert!(a.ptr_eq(&a.clone()));
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn test_slice_type_name() {
    let slice = Slice::new(5u8);
    assert_eq!(slice.type_name(), "u8");
}

#[test]
fn test_state_with_and_get() {
    let state = State::new()
        .with("point", Point { x: 0, y: 9 })
        .with("count", 7i64);

    assert_eq!(state.len(), 2);
    assert!(state.contains("point"));
    assert!(!state.contains("missing"));
    assert_eq!(state.get::<i64>("count"), Some(&7));
    assert_eq!(state.get::<Point>("point"), Some(&Point { x: 0, y: 9 }));
    assert!(state.get::<Point>("count").is_none());
    assert_eq!(state.names().collect::<Vec<_>>(), vec!["count", "point"]);
}

#[test]
fn test_state_with_does_not_touch_clones() {
    let original = State::new().with("count", 1i64);
    let copy = original.clone();
    let updated = copy.clone().with("count", 2i64);

    assert!(original.ptr_eq(&copy));
    assert_eq!(original.get::<i64>("count"), Some(&1));
    assert_eq!(updated.get::<i64>("count"), Some(&2));
    assert!(!updated.ptr_eq(&original));
}

#[test]
fn test_state_deep_equality() {
    let a = State::new().with("count", 1i64).with("name", "a".to_string());
    let b = State::new().with("name", "a".to_string()).with("count", 1i64);
    let c = State::new().with("count", 2i64).with("name", "a".to_string());

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, State::new());
}

#[test]
fn test_state_from_iter() {
    let state: State = vec![
        ("a".to_string(), Slice::new(true)),
        ("b".to_string(), Slice::new(false)),
    ]
    .into_iter()
    .collect();

    assert_eq!(state.get::<bool>("a"), Some(&true));
    assert_eq!(state.iter().count(), 2);
}

#[test]
fn test_state_to_json() {
    let state = State::new()
        .with("point", Point { x: 1, y: 2 })
        .with("count", 3i64);

    assert_eq!(
        state.to_json().unwrap(),
        json!({
            "count": 3,
            "point": { "x": 1, "y": 2 }
        })
    );
}

#[test]
fn test_state_debug() {
    let state = State::new().with("count", 3i64);
    assert_eq!(format!("{:?}", state), "{\"count\": 3}");
}

#[test]
fn test_empty_state() {
    let state = State::default();
    assert!(state.is_empty());
    assert_eq!(state.to_json().unwrap(), json!({}));
}
