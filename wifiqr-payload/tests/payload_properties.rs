//! Property-based tests for the payload codec.

use proptest::prelude::*;
use wifiqr_payload::{encode_payload, QrPayload};
use wifiqr_types::ProvisioningToken;

proptest! {
    /// Any combination of field values survives an encode/decode cycle.
    #[test]
    fn fields_survive_encoding(ssid in ".{0,64}", password in ".{0,64}", token in ".{0,32}") {
        let token = ProvisioningToken::new(token);
        let text = encode_payload(&ssid, &password, &token).unwrap();
        let decoded = QrPayload::decode(&text).unwrap();
        prop_assert_eq!(decoded.s, ssid);
        prop_assert_eq!(decoded.p, password);
        prop_assert_eq!(decoded.t, token.as_str());
    }

    /// The encoded text is always a JSON object with exactly the three
    /// contract keys.
    #[test]
    fn shape_is_stable(ssid in ".{0,64}", password in ".{0,64}") {
        let text = encode_payload(&ssid, &password, &ProvisioningToken::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let obj = parsed.as_object().unwrap();
        prop_assert_eq!(obj.len(), 3);
        prop_assert!(obj.contains_key("s") && obj.contains_key("p") && obj.contains_key("t"));
    }
}
