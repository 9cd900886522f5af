//! # Payload Decoding Tests
//!
//! Verifies that request bodies are decoded leniently: every shape of input,
//! including empty and malformed bodies, resolves to a usable `ContentPayload`.

use puxa::{decode, decode_lenient, BodyFormat, ContentPayload, PayloadError};
use serde_json::json;

#[test]
fn test_body_format_from_content_type() {
    assert_eq!(BodyFormat::from_content_type(None), BodyFormat::Json);
    assert_eq!(
        BodyFormat::from_content_type(Some("application/json")),
        BodyFormat::Json
    );
    assert_eq!(
        BodyFormat::from_content_type(Some("application/x-www-form-urlencoded")),
        BodyFormat::Form
    );
    assert_eq!(
        BodyFormat::from_content_type(Some("Application/X-WWW-Form-Urlencoded; charset=UTF-8")),
        BodyFormat::Form
    );
    assert_eq!(
        BodyFormat::from_content_type(Some("text/plain")),
        BodyFormat::Json
    );
}

#[test]
fn test_decode_json_with_url() {
    let payload = decode(br#"{"url": "http://example.com"}"#, BodyFormat::Json).unwrap();
    assert_eq!(payload, ContentPayload::with_url("http://example.com"));
}

#[test]
fn test_decode_json_ignores_unknown_fields() {
    let body = br#"{"url": "http://example.com", "title": "Example", "depth": 3}"#;
    let payload = decode(body, BodyFormat::Json).unwrap();
    assert_eq!(payload.url, json!("http://example.com"));
}

#[test]
fn test_decode_empty_and_whitespace_bodies() {
    for body in [&b""[..], &b"   \n\t"[..]] {
        let payload = decode(body, BodyFormat::Json).unwrap();
        assert_eq!(payload.url, json!(""));
    }
}

#[test]
fn test_decode_json_without_url_field() {
    let payload = decode(br#"{"text": "hello"}"#, BodyFormat::Json).unwrap();
    assert_eq!(payload, ContentPayload::default());
}

#[test]
fn test_decode_non_object_json_yields_default() {
    for body in [
        &b"[1, 2, 3]"[..],
        &b"42"[..],
        &br#""http://example.com""#[..],
        &b"null"[..],
    ] {
        let payload = decode(body, BodyFormat::Json).unwrap();
        assert_eq!(payload.url, json!(""), "body: {}", String::from_utf8_lossy(body));
    }
}

#[test]
fn test_decode_json_echoes_non_string_url() {
    let payload = decode(br#"{"url": 12345}"#, BodyFormat::Json).unwrap();
    assert_eq!(payload.url, json!(12345));

    let payload = decode(br#"{"url": null}"#, BodyFormat::Json).unwrap();
    assert_eq!(payload.url, json!(null));
}

#[test]
fn test_decode_malformed_json_is_an_error() {
    let result = decode(br#"{"url": "http://example.com""#, BodyFormat::Json);
    assert!(matches!(result, Err(PayloadError::MalformedJson(_))));
}

#[test]
fn test_decode_lenient_falls_back_on_malformed_json() {
    let payload = decode_lenient(b"{not json", BodyFormat::Json);
    assert_eq!(payload, ContentPayload::default());
}

#[test]
fn test_decode_form_body() {
    let payload = decode(
        b"url=http%3A%2F%2Fexample.com%2Fa%3Fb%3Dc&other=1",
        BodyFormat::Form,
    )
    .unwrap();
    assert_eq!(payload, ContentPayload::with_url("http://example.com/a?b=c"));
}

#[test]
fn test_decode_form_repeated_url_uses_last_value() {
    let payload = decode(b"url=first&url=second", BodyFormat::Form).unwrap();
    assert_eq!(payload, ContentPayload::with_url("second"));
}

#[test]
fn test_decode_form_without_url_field() {
    let payload = decode(b"title=hello", BodyFormat::Form).unwrap();
    assert_eq!(payload, ContentPayload::default());
}

#[test]
fn test_decode_form_rejects_invalid_utf8() {
    let result = decode(&[0x75, 0x72, 0x6c, 0x3d, 0xff, 0xfe], BodyFormat::Form);
    assert!(matches!(result, Err(PayloadError::MalformedForm)));

    let payload = decode_lenient(&[0xff, 0xfe], BodyFormat::Form);
    assert_eq!(payload, ContentPayload::default());
}
