use super::*;

#[test]
fn value_list_accepts_full_and_bare_forms() {
    let full: ValueList<f64> = serde_json::from_str(
        r#"{"list":[{"value":0,"time":0},{"value":10,"time":1}],"isStepped":true,"ease":"InQuad"}"#,
    )
    .unwrap();
    assert!(full.is_stepped);
    assert_eq!(full.ease, Some(EaseSpec::Named(crate::Ease::InQuad)));
    assert_eq!(full.list.len(), 2);

    let bare: ValueList<f64> =
        serde_json::from_str(r#"[{"value":1,"time":0},{"value":2,"time":1}]"#).unwrap();
    assert_eq!(bare, ValueList::linear([(1.0, 0.0), (2.0, 1.0)]));
}

#[test]
fn range_forms_normalize_identically() {
    let obj: ValueRange = serde_json::from_str(r#"{"min":2,"max":5}"#).unwrap();
    let arr: ValueRange = serde_json::from_str("[2, 5]").unwrap();
    assert_eq!(obj, arr);
    assert_eq!(obj.at(0.0), 2.0);
    assert_eq!(obj.at(0.5), 3.5);
    assert!(serde_json::from_str::<ValueRange>("[1, 2, 3]").is_err());
}

#[test]
fn to_timeline_puts_settings_on_first_node() {
    let mut list = ValueList::linear([(0.0, 0.0), (10.0, 0.5), (20.0, 1.0)]);
    list.is_stepped = true;
    let tl = list.to_timeline().unwrap();
    assert!(tl.nodes()[0].stepped);
    assert!(!tl.nodes()[1].stepped);
    assert!(!tl.nodes()[2].stepped);
}

#[test]
fn empty_keyframe_list_is_a_config_error() {
    let list: ValueList<f64> = ValueList::linear([]);
    assert!(matches!(list.to_timeline(), Err(EmberError::Validation(_))));
}

#[test]
fn behavior_configs_are_tagged_by_type() {
    let json = r##"[
        {"type":"moveSpeed","config":{"speed":{"list":[{"value":100,"time":0},{"value":0,"time":1}]},"minMult":0.5}},
        {"type":"moveSpeed","config":{"pickSpeed":{"list":[{"value":{"min":1,"max":2},"time":0},{"value":[3,4],"time":1}],"isStepped":true}}},
        {"type":"moveSpeedStatic","config":{"min":1,"max":3}},
        {"type":"scale","config":{"scale":[{"value":1,"time":0},{"value":0.2,"time":1}]}},
        {"type":"scaleStatic","config":{"min":0.5,"max":1}},
        {"type":"color","config":{"color":{"list":[{"value":"#ff0000","time":0},{"value":"0x0000ff","time":1}]}}},
        {"type":"color","config":{"color":{"pickList":[{"value":["#ff0000","#00ff00"],"time":0},{"value":["#000000"],"time":1}]}}},
        {"type":"colorStatic","config":{"color":"#123456"}}
    ]"##;
    let configs: Vec<BehaviorConfig> = serde_json::from_str(json).unwrap();
    let kinds: Vec<&str> = configs.iter().map(BehaviorConfig::kind).collect();
    assert_eq!(
        kinds,
        [
            "moveSpeed",
            "moveSpeed",
            "moveSpeedStatic",
            "scale",
            "scaleStatic",
            "color",
            "color",
            "colorStatic"
        ]
    );

    let BehaviorConfig::Speed(speed) = &configs[0] else {
        panic!("expected speed");
    };
    assert_eq!(speed.min_mult, 0.5);
    assert!(speed.pick_speed.is_none());

    let BehaviorConfig::Speed(pick) = &configs[1] else {
        panic!("expected speed");
    };
    assert_eq!(pick.min_mult, 1.0);
    let pick = pick.pick_speed.as_ref().unwrap();
    assert!(pick.is_stepped);
    assert_eq!(pick.list[1].value, ValueRange::new(3.0, 4.0));

    assert!(matches!(
        &configs[5],
        BehaviorConfig::Color(ColorConfig {
            color: Some(ColorSpec::Keyframes(_))
        })
    ));
    let BehaviorConfig::Color(ColorConfig {
        color: Some(ColorSpec::Pick(pick)),
    }) = &configs[6]
    else {
        panic!("expected color pick list");
    };
    assert_eq!(pick.list[0].value, vec![Rgb8::new(255, 0, 0), Rgb8::new(0, 255, 0)]);
}

#[test]
fn unknown_type_tag_is_rejected() {
    let err = serde_json::from_str::<BehaviorConfig>(r#"{"type":"spin","config":{}}"#);
    assert!(err.is_err());
}

#[test]
fn bad_hex_in_color_pick_list_keeps_its_message() {
    let err = serde_json::from_str::<ColorSpec>(
        r##"{"pickList":[{"value":["#zzzzzz"],"time":0}]}"##,
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid hex color"), "{err}");
}

#[test]
fn color_pick_list_serializes_under_pick_list_key() {
    let spec: ColorSpec = serde_json::from_str(
        r##"{"pickList":[{"value":["#ff0000","#00ff00"],"time":0}],"isStepped":true}"##,
    )
    .unwrap();
    let json = serde_json::to_value(&spec).unwrap();
    assert!(json.get("pickList").is_some());
    let again: ColorSpec = serde_json::from_value(json).unwrap();
    assert_eq!(spec, again);
}
