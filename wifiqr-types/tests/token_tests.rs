use wifiqr_types::{ProvisioningToken, DEFAULT_PROVISIONING_TOKEN};

#[test]
fn default_is_placeholder_literal() {
    let token = ProvisioningToken::default();
    assert_eq!(token.as_str(), "000000000000");
    assert_eq!(token.as_str(), DEFAULT_PROVISIONING_TOKEN);
}

#[test]
fn custom_token_preserved_verbatim() {
    // The codec treats tokens as opaque, so no shape is enforced here.
    let token = ProvisioningToken::new("device-7f3a");
    assert_eq!(token.as_str(), "device-7f3a");
}

#[test]
fn display_matches_inner_value() {
    let token = ProvisioningToken::from("123456789012");
    assert_eq!(token.to_string(), "123456789012");
}

#[test]
fn serde_is_transparent() {
    let token = ProvisioningToken::default();
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, "\"000000000000\"");
    let parsed: ProvisioningToken = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, token);
}
