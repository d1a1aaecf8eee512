#![allow(clippy::float_cmp)]

use super::*;
use crate::channel::CurrentValues;
use crate::color::Color;
use crate::value::AnyValue;

fn padded(default: f64) -> impl View {
    Element::text("Hello").tweakable("padding", default, |content, amount| content.padding(amount))
}

fn published(label: &str, value: AnyValue) -> CurrentValues {
    std::iter::once((label.to_owned(), value)).collect()
}

fn render_under(view: &impl View, values: CurrentValues) -> (Element, crate::registry::Registry) {
    let mut cx = RenderCx::new();
    let el = cx.with_published(values, |cx| view.render(cx));
    (el, cx.finish())
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolves_default_without_publisher() {
    let mut cx = RenderCx::new();
    let el = padded(10.0).render(&mut cx);
    assert_eq!(el, Element::text("Hello").padding(10.0));
}

#[test]
fn resolves_default_when_label_absent() {
    let (el, _) = render_under(&padded(10.0), published("offset", AnyValue::new(99.0_f64)));
    assert_eq!(el, Element::text("Hello").padding(10.0));
}

#[test]
fn resolves_published_override() {
    let (el, _) = render_under(&padded(10.0), published("padding", AnyValue::new(25.0_f64)));
    assert_eq!(el, Element::text("Hello").padding(25.0));
}

#[test]
fn falls_back_on_type_mismatch() {
    let (el, _) = render_under(&padded(10.0), published("padding", AnyValue::new(Color::BLUE)));
    assert_eq!(el, Element::text("Hello").padding(10.0));
}

#[test]
fn published_zero_is_not_treated_as_absent() {
    let (el, _) = render_under(&padded(10.0), published("padding", AnyValue::new(0.0_f64)));
    assert_eq!(el, Element::text("Hello").padding(0.0));
}

#[test]
fn resolve_is_idempotent_without_override() {
    let site = padded(10.0);
    let mut cx = RenderCx::new();
    let first = site.render(&mut cx);
    let second = site.render(&mut cx);
    let third = site.render(&mut cx);
    assert_eq!(first, second);
    assert_eq!(second, third);
}

// =============================================================
// Emission
// =============================================================

#[test]
fn emits_default_not_resolved_value() {
    let (_, registry) = render_under(&padded(10.0), published("padding", AnyValue::new(25.0_f64)));
    let entry = registry.get("padding").unwrap();
    assert_eq!(entry.value().downcast_ref::<f64>(), Some(&10.0));
}

#[test]
fn emits_once_per_render() {
    let site = padded(10.0);
    let mut cx = RenderCx::new();
    site.render(&mut cx);
    assert_eq!(cx.emitted(), 1);
    site.render(&mut cx);
    assert_eq!(cx.emitted(), 2);
    assert_eq!(cx.finish().len(), 1);
}

#[test]
fn outer_site_emits_after_inner() {
    let view = Element::text("Hello")
        .tweakable("padding", 10.0_f64, |c, v| c.padding(v))
        .tweakable("padding", Color::BLUE, |c, v| c.background(v));
    let mut cx = RenderCx::new();
    view.render(&mut cx);
    let registry = cx.finish();
    assert_eq!(registry.get("padding").unwrap().kind(), "color");
}

#[test]
fn content_receives_wrapped_output() {
    let view = Element::text("Hello")
        .tweakable("offset", 10.0_f64, |c, x| c.offset(x, 0.0))
        .tweakable("tint", Color::WHITE, |c, color| c.foreground(color));
    let mut cx = RenderCx::new();
    let el = view.render(&mut cx);
    assert_eq!(el, Element::text("Hello").offset(10.0, 0.0).foreground(Color::WHITE));
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn exposes_label_and_default() {
    let site = Element::Empty.tweakable("enabled", true, |c, _| c);
    assert_eq!(site.label(), "enabled");
    assert!(*site.default_value());
}
