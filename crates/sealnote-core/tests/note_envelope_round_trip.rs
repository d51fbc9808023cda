use std::collections::HashSet;

use sealnote_core::cipher::{ContentCipher, ContentKey};
use sealnote_core::error::SealnoteError;

fn cipher() -> ContentCipher {
    ContentCipher::new(ContentKey::generate().expect("key generation should succeed"))
}

#[test]
fn test_note_round_trip_through_stored_envelope() {
    let cipher = cipher();
    let plaintext = "note body with marker: PLAINTEXT_MARKER_123";

    let envelope = cipher.encrypt(plaintext).expect("encryption should succeed");

    // The stored form never leaks the plaintext
    assert!(!envelope.contains("PLAINTEXT_MARKER_123"));

    // Stored verbatim, retrieved verbatim
    let stored = envelope.clone();
    let decrypted = cipher.decrypt(&stored).expect("decryption should succeed");
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_repeated_encryption_never_repeats_envelopes() {
    let cipher = cipher();
    let mut seen = HashSet::new();

    for _ in 0..100 {
        let envelope = cipher
            .encrypt("the same note body")
            .expect("encryption should succeed");
        assert!(seen.insert(envelope), "envelope repeated across encryptions");
    }
}

#[test]
fn test_envelope_shape_is_two_hex_fields() {
    let cipher = cipher();
    let envelope = cipher.encrypt("shape check").expect("encryption should succeed");

    let (iv_hex, ciphertext_hex) = envelope.split_once(':').expect("envelope should contain ':'");
    assert_eq!(iv_hex.len(), 32); // 16 IV bytes
    assert!(iv_hex.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(ciphertext_hex.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_flipped_ciphertext_byte_is_rejected() {
    let cipher = cipher();
    let envelope = cipher.encrypt("tamper target").expect("encryption should succeed");

    let (iv_hex, ciphertext_hex) = envelope.split_once(':').expect("envelope should contain ':'");
    let mut ciphertext = hex::decode(ciphertext_hex).expect("ciphertext should be hex");
    let mid = ciphertext.len() / 2;
    ciphertext[mid] ^= 0xFF;
    let tampered = format!("{}:{}", iv_hex, hex::encode(&ciphertext));

    let result = cipher.decrypt(&tampered);
    assert!(matches!(result, Err(SealnoteError::Decryption(_))));
}

#[test]
fn test_envelope_is_bound_to_its_key() {
    let plaintext = "only one key may read this";
    let writer = cipher();
    let reader = cipher();

    let envelope = writer.encrypt(plaintext).expect("encryption should succeed");
    assert!(reader.decrypt(&envelope).is_err());
    assert_eq!(
        writer.decrypt(&envelope).expect("decryption should succeed"),
        plaintext
    );
}
