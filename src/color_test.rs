use super::*;

#[test]
fn from_hex_accepts_short_form() {
    assert_eq!(Color::from_hex("#abc"), Some(Color::rgb(0xaa, 0xbb, 0xcc)));
}

#[test]
fn from_hex_accepts_long_form() {
    assert_eq!(Color::from_hex("#1F1A17"), Some(Color::rgb(0x1f, 0x1a, 0x17)));
}

#[test]
fn from_hex_reads_alpha_channel() {
    let c = Color::from_hex("#ff000080").unwrap();
    assert_eq!(c, Color { r: 255, g: 0, b: 0, a: 0x80 });
}

#[test]
fn from_hex_trims_whitespace() {
    assert_eq!(Color::from_hex("  #ffffff \n"), Some(Color::WHITE));
}

#[test]
fn from_hex_rejects_missing_hash() {
    assert_eq!(Color::from_hex("ffffff"), None);
}

#[test]
fn from_hex_rejects_bad_lengths_and_digits() {
    assert_eq!(Color::from_hex("#ffff"), None);
    assert_eq!(Color::from_hex("#gggggg"), None);
    assert_eq!(Color::from_hex("#"), None);
}

#[test]
fn from_hex_rejects_sign_prefixed_channels() {
    assert_eq!(Color::from_hex("#+f+f+f"), None);
    assert_eq!(Color::from_hex("#+f+f+f+f"), None);
    assert_eq!(Color::from_hex("#-1-1-1"), None);
}

#[test]
fn from_hex_accepts_mixed_case_digits() {
    assert_eq!(Color::from_hex("#FfA0c3"), Some(Color::rgb(0xff, 0xa0, 0xc3)));
    assert_eq!(Color::from_hex("#0aF"), Some(Color::rgb(0x00, 0xaa, 0xff)));
}

#[test]
fn from_hex_rejects_non_ascii_without_panicking() {
    assert_eq!(Color::from_hex("#ééé"), None);
}

#[test]
fn to_hex_omits_opaque_alpha() {
    assert_eq!(Color::BLUE.to_hex(), "#007aff");
}

#[test]
fn to_hex_keeps_translucent_alpha() {
    assert_eq!(Color::CLEAR.to_hex(), "#00000000");
}

#[test]
fn display_matches_hex() {
    assert_eq!(Color::RED.to_string(), "#ff3b30");
}

#[test]
fn serializes_as_hex_string() {
    let json = serde_json::to_string(&Color::WHITE).unwrap();
    assert_eq!(json, "\"#ffffff\"");
}

#[test]
fn deserializes_from_hex_string() {
    let c: Color = serde_json::from_str("\"#007AFF\"").unwrap();
    assert_eq!(c, Color::BLUE);
}

#[test]
fn deserialize_rejects_garbage() {
    let result = serde_json::from_str::<Color>("\"blue\"");
    assert!(result.is_err());
}
