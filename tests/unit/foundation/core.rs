use super::*;

#[test]
fn prefixes_parse_to_the_same_tint() {
    let a = parse_tint("#ff0000").unwrap();
    let b = parse_tint("0xff0000").unwrap();
    let c = parse_tint("ff0000").unwrap();
    assert_eq!(a, 0xFF_00_00);
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn upper_case_digits_and_prefix_are_accepted() {
    assert_eq!(parse_tint("0XABCDEF").unwrap(), 0xAB_CD_EF);
    assert_eq!(parse_tint(" #AbCdEf ").unwrap(), 0xAB_CD_EF);
}

#[test]
fn alpha_byte_is_discarded() {
    assert_eq!(
        Rgb8::from_hex("#80112233").unwrap(),
        Rgb8::new(0x11, 0x22, 0x33)
    );
}

#[test]
fn malformed_hex_is_a_validation_error() {
    for bad in ["", "#fff", "#gg0000", "0x+12345", "#1234567"] {
        let err = Rgb8::from_hex(bad).unwrap_err();
        assert!(matches!(err, EmberError::Validation(_)), "{bad}");
    }
}

#[test]
fn tint_packing_is_rrggbb() {
    let c = Rgb8::new(0x12, 0x34, 0x56);
    assert_eq!(c.to_tint(), 0x12_34_56);
    assert_eq!(Rgb8::from_tint(0x12_34_56), c);
    assert_eq!(Rgb8::WHITE.to_tint(), WHITE_TINT);
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgb8 = serde_json::from_str("\"0x00ff80\"").unwrap();
    assert_eq!(c, Rgb8::new(0, 255, 128));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#00ff80\"");
    assert!(serde_json::from_str::<Rgb8>("\"nope\"").is_err());
}
