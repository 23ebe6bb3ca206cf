use super::*;

#[test]
fn document_settings_defaults() {
    let settings = DocumentSettings::default();
    assert_eq!(settings.dirty_marker, "*");
    assert_eq!(settings.untitled_prefix, "Untitled");
    assert_eq!(settings.removal_policy, RemovalPolicy::UntitledOnly);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"documents":{"removal_policy":"always"}}"#).unwrap();
    assert_eq!(settings.documents.removal_policy, RemovalPolicy::Always);
    assert_eq!(settings.documents.dirty_marker, "*");

    let empty: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.documents.untitled_prefix, "Untitled");
}

#[test]
fn removal_policy_serializes_snake_case() {
    let json = serde_json::to_string(&RemovalPolicy::UntitledOnly).unwrap();
    assert_eq!(json, "\"untitled_only\"");
}
