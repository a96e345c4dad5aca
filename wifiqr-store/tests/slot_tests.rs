use wifiqr_cipher::Obfuscator;
use wifiqr_store::{
    CredentialBackend, CredentialSlot, MemoryBackend, SavedCredential, PASSWORD_KEY, SSID_KEY,
};
use wifiqr_types::NetworkCredential;

fn slot() -> CredentialSlot<MemoryBackend> {
    CredentialSlot::new(MemoryBackend::new(), Obfuscator::with_default_seed())
}

#[test]
fn empty_slot_loads_nothing() {
    assert_eq!(slot().load().unwrap(), None);
}

#[test]
fn save_then_load_roundtrip() {
    let mut slot = slot();
    let cred = NetworkCredential::new("HomeNet", "secret123").unwrap();
    slot.save(&cred).unwrap();

    let saved = slot.load().unwrap().unwrap();
    assert_eq!(
        saved,
        SavedCredential {
            ssid: "HomeNet".to_string(),
            password: Some("secret123".to_string()),
        }
    );
}

#[test]
fn password_never_stored_in_plain_text() {
    let mut slot = slot();
    let cred = NetworkCredential::new("HomeNet", "secret123").unwrap();
    slot.save(&cred).unwrap();

    let backend = slot.into_backend();
    assert_eq!(backend.get(SSID_KEY).unwrap().as_deref(), Some("HomeNet"));
    let blob = backend.get(PASSWORD_KEY).unwrap().unwrap();
    assert_ne!(blob, "secret123");
    assert!(!blob.contains("secret123"));
}

#[test]
fn newer_save_replaces_older() {
    let mut slot = slot();
    slot.save(&NetworkCredential::new("OldNet", "oldpassword").unwrap())
        .unwrap();
    slot.save(&NetworkCredential::new("NewNet", "newpassword").unwrap())
        .unwrap();

    let saved = slot.load().unwrap().unwrap();
    assert_eq!(saved.ssid, "NewNet");
    assert_eq!(saved.password.as_deref(), Some("newpassword"));
}

#[test]
fn corrupted_blob_degrades_to_ssid_only() {
    let mut backend = MemoryBackend::new();
    backend.set(SSID_KEY, "HomeNet").unwrap();
    backend.set(PASSWORD_KEY, "!!!not-base64!!!").unwrap();

    let slot = CredentialSlot::new(backend, Obfuscator::with_default_seed());
    let saved = slot.load().unwrap().unwrap();
    assert_eq!(saved.ssid, "HomeNet");
    assert_eq!(saved.password, None);
}

#[test]
fn missing_blob_degrades_to_ssid_only() {
    let mut backend = MemoryBackend::new();
    backend.set(SSID_KEY, "HomeNet").unwrap();

    let slot = CredentialSlot::new(backend, Obfuscator::with_default_seed());
    let saved = slot.load().unwrap().unwrap();
    assert_eq!(saved.ssid, "HomeNet");
    assert_eq!(saved.password, None);
}

#[test]
fn ssid_rewritten_underneath_blob_recovers_garbage() {
    // The ssid is part of the key. If something rewrites the stored ssid
    // without re-obfuscating, recovery yields garbage, not the original.
    let mut slot = slot();
    slot.save(&NetworkCredential::new("HomeNet", "secret123").unwrap())
        .unwrap();

    let mut backend = slot.into_backend();
    backend.set(SSID_KEY, "OtherNet").unwrap();

    let slot = CredentialSlot::new(backend, Obfuscator::with_default_seed());
    let saved = slot.load().unwrap().unwrap();
    assert_eq!(saved.ssid, "OtherNet");
    // Blob is valid base64, so a (wrong) password comes back.
    assert_ne!(saved.password.as_deref(), Some("secret123"));
}
