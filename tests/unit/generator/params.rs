use super::*;
use serde_json::json;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Knobs {
    gain: f64,
    steps: i32,
    on: bool,
}

impl Default for Knobs {
    fn default() -> Self {
        Self {
            gain: 1.0,
            steps: 3,
            on: false,
        }
    }
}

#[test]
fn merge_reports_change_only_when_values_differ() {
    let mut k = Knobs::default();
    assert!(!merge_params(&mut k, &json!({ "gain": 1.0 })).unwrap());
    assert!(merge_params(&mut k, &json!({ "gain": 2.5, "on": true })).unwrap());
    assert_eq!(k.gain, 2.5);
    assert!(k.on);
    assert_eq!(k.steps, 3);
}

#[test]
fn unknown_keys_are_rejected_without_side_effects() {
    let mut k = Knobs::default();
    let err = merge_params(&mut k, &json!({ "gain": 9.0, "bogus": 1 })).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert_eq!(k, Knobs::default());
}

#[test]
fn mistyped_values_are_rejected() {
    let mut k = Knobs::default();
    assert!(merge_params(&mut k, &json!({ "steps": "many" })).is_err());
    assert!(merge_params(&mut k, &json!([1, 2])).is_err());
    assert_eq!(k, Knobs::default());
}
