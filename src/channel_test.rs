#![allow(clippy::float_cmp)]

use super::*;
use crate::color::Color;

fn snapshot(pairs: &[(&str, AnyValue)]) -> CurrentValues {
    pairs.iter().map(|(l, v)| ((*l).to_owned(), v.clone())).collect()
}

// --- CurrentValues ---

#[test]
fn lookup_absent_label() {
    let values = CurrentValues::new();
    assert_eq!(values.lookup::<f64>("padding"), Lookup::Absent);
}

#[test]
fn lookup_found_with_matching_type() {
    let values = snapshot(&[("padding", AnyValue::new(25.0_f64))]);
    assert_eq!(values.lookup::<f64>("padding"), Lookup::Found(25.0));
}

#[test]
fn lookup_reports_mismatch_instead_of_casting() {
    let values = snapshot(&[("padding", AnyValue::new(Color::BLUE))]);
    assert_eq!(values.lookup::<f64>("padding"), Lookup::Mismatch { found: "color" });
}

#[test]
fn falsy_values_are_present() {
    let values = snapshot(&[("enabled", AnyValue::new(false)), ("padding", AnyValue::new(0.0_f64))]);
    assert_eq!(values.lookup::<bool>("enabled"), Lookup::Found(false));
    assert_eq!(values.lookup::<f64>("padding"), Lookup::Found(0.0));
    assert!(!values.lookup::<bool>("enabled").is_absent());
}

#[test]
fn or_default_value_falls_back() {
    assert_eq!(Lookup::<f64>::Absent.or_default_value(10.0), 10.0);
    assert_eq!(Lookup::<f64>::Mismatch { found: "color" }.or_default_value(10.0), 10.0);
    assert_eq!(Lookup::Found(25.0).or_default_value(10.0), 25.0);
}

#[test]
fn current_values_serialize_as_plain_map() {
    let values = snapshot(&[("padding", AnyValue::new(10.0_f64)), ("tint", AnyValue::new(Color::WHITE))]);
    let json = serde_json::to_value(&values).unwrap();
    assert_eq!(json, serde_json::json!({"padding": 10.0, "tint": "#ffffff"}));
}

// --- BroadcastChannel ---

#[test]
fn empty_channel_has_no_snapshot() {
    let channel = BroadcastChannel::new();
    assert!(channel.current().is_none());
    assert_eq!(channel.depth(), 0);
    assert_eq!(channel.lookup::<f64>("padding"), Lookup::Absent);
}

#[test]
fn innermost_publish_replaces_outer() {
    let mut channel = BroadcastChannel::new();
    channel.push(snapshot(&[("padding", AnyValue::new(25.0_f64)), ("offset", AnyValue::new(5.0_f64))]));
    channel.push(snapshot(&[("padding", AnyValue::new(40.0_f64))]));

    assert_eq!(channel.lookup::<f64>("padding"), Lookup::Found(40.0));
    // Not patched: the outer "offset" is invisible under the inner publisher.
    assert_eq!(channel.lookup::<f64>("offset"), Lookup::Absent);

    channel.pop();
    assert_eq!(channel.lookup::<f64>("offset"), Lookup::Found(5.0));
}
