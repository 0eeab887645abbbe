//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - the `slog::Value` implementation emits the redacted JSON object
//! - nested records are redacted through their own policies when logged

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use redacted_record::{FieldValue, Record, RecordType, SlogRedacted};
use serde_json::Value as JsonValue;

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn credentials() -> Record {
    RecordType::anonymous_struct()
        .fields(["username", "password", "api_key"])
        .allow(["username"])
        .keyword_init(true)
        .define()
        .unwrap()
        .keyword_instance([
            ("username", FieldValue::from("example")),
            ("password", FieldValue::from("super secret")),
            ("api_key", FieldValue::from("123456")),
        ])
        .unwrap()
}

#[test]
fn record_implements_slog_redacted() {
    fn assert_slog_redacted<T: SlogRedacted>() {}

    assert_slog_redacted::<Record>();
}

#[test]
fn logged_record_emits_redacted_json() {
    let record = credentials();

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&record, "credentials", &mut serializer);

    if let Some(CapturedValue::Serde(json)) = serializer.get("credentials") {
        assert_eq!(json["username"], "example");
        assert_eq!(json["password"], "[REDACTED]");
        assert_eq!(json["api_key"], "[REDACTED]");
    } else {
        panic!("Expected Serde value for 'credentials' key");
    }
}

#[test]
fn logged_record_never_contains_raw_secrets() {
    let record = credentials();

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&record, "credentials", &mut serializer);

    let captured = format!("{:?}", serializer.get("credentials"));
    assert!(!captured.contains("super secret"));
    assert!(!captured.contains("123456"));
}

#[test]
fn nested_record_logs_through_its_own_policy() {
    let session = RecordType::struct_builder("Session")
        .fields(["id", "token"])
        .allow(["id"])
        .define()
        .unwrap()
        .instance(["abc".into(), "t0ps3cret".into()])
        .unwrap();
    let outer = RecordType::anonymous_struct()
        .fields(["session"])
        .allow(["session"])
        .define()
        .unwrap()
        .instance([session.into()])
        .unwrap();

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&outer, "event", &mut serializer);

    if let Some(CapturedValue::Serde(json)) = serializer.get("event") {
        assert_eq!(json["session"]["id"], "abc");
        assert_eq!(json["session"]["token"], "[REDACTED]");
    } else {
        panic!("Expected Serde value for 'event' key");
    }
}
