//! End-to-end tests for type definition, construction and flat rendering.
//!
//! These tests exercise the integration of:
//! - the per-kind type factories and their validation,
//! - positional and keyword construction, and
//! - the redacted single-line `Debug`/`Display` form.

use redacted_record::{
    DefineError, FieldValue, InstanceError, Record, RecordKind, RecordType, RecordValue,
};

fn credentials_type() -> RecordType {
    RecordType::anonymous_struct()
        .fields(["username", "password", "api_key"])
        .allow(["username"])
        .keyword_init(true)
        .define()
        .unwrap()
}

fn credentials() -> Record {
    credentials_type()
        .keyword_instance([
            ("username", FieldValue::from("example")),
            ("password", FieldValue::from("super secret")),
            ("api_key", FieldValue::from("123456")),
        ])
        .unwrap()
}

#[test]
fn allowed_fields_round_trip_on_type_and_instance() {
    let ty = credentials_type();
    assert_eq!(ty.allowed_fields(), ["username"]);
    assert_eq!(credentials().allowed_fields(), ["username"]);
}

#[test]
fn flat_form_redacts_everything_not_allowed() {
    assert_eq!(
        credentials().to_string(),
        r#"#<struct username="example" password=[REDACTED] api_key=[REDACTED]>"#,
    );
}

#[test]
fn debug_and_display_agree() {
    let record = credentials();
    assert_eq!(format!("{record:?}"), record.to_string());
}

#[test]
fn named_type_renders_its_name() {
    let record = RecordType::struct_builder("MyCustomConfig")
        .fields(["uuid", "session_secret"])
        .allow(["uuid"])
        .define()
        .unwrap()
        .instance(["abcdef".into(), "secret".into()])
        .unwrap();
    assert_eq!(
        record.to_string(),
        r#"#<struct MyCustomConfig uuid="abcdef" session_secret=[REDACTED]>"#,
    );
}

#[test]
fn data_kind_uses_its_own_header() {
    let record = RecordType::anonymous_data()
        .fields(["x"])
        .allow(["x"])
        .define()
        .unwrap()
        .instance([1_i32.into()])
        .unwrap();
    assert_eq!(record.to_string(), "#<data x=1>");
}

#[test]
fn data_kind_accepts_both_construction_styles() {
    let ty = RecordType::data_builder("Point")
        .fields(["x", "y"])
        .allow(["x", "y"])
        .define()
        .unwrap();
    let positional = ty.instance([1_i32.into(), 2_i32.into()]).unwrap();
    let keyword = ty
        .keyword_instance([("x", 1_i32.into()), ("y", 2_i32.into())])
        .unwrap();
    assert_eq!(positional.to_string(), keyword.to_string());
    assert_eq!(ty.kind(), RecordKind::Data);
}

#[test]
fn keyword_pairs_may_arrive_in_any_order() {
    let record = credentials_type()
        .keyword_instance([
            ("api_key", FieldValue::from("123456")),
            ("username", FieldValue::from("example")),
            ("password", FieldValue::from("super secret")),
        ])
        .unwrap();
    // Output still follows declaration order.
    assert_eq!(record.to_string(), credentials().to_string());
}

#[test]
fn no_allow_list_redacts_every_field() {
    let record = RecordType::anonymous_struct()
        .fields(["token"])
        .define()
        .unwrap()
        .instance(["t0ps3cret".into()])
        .unwrap();
    assert_eq!(record.to_string(), "#<struct token=[REDACTED]>");
    assert!(!record.to_string().contains("t0ps3cret"));
}

#[test]
fn redact_list_is_the_complement_convenience() {
    let record = RecordType::anonymous_struct()
        .fields(["host", "port", "password"])
        .redact(["password"])
        .define()
        .unwrap()
        .instance(["db.internal".into(), 5432_u16.into(), "hunter2".into()])
        .unwrap();
    assert_eq!(
        record.to_string(),
        r#"#<struct host="db.internal" port=5432 password=[REDACTED]>"#,
    );
}

#[test]
fn numbers_render_bare_and_strings_quoted() {
    let record = RecordType::anonymous_struct()
        .fields(["name", "retries", "ratio"])
        .allow(["name", "retries", "ratio"])
        .define()
        .unwrap()
        .instance(["job".into(), 7_u32.into(), 0.5_f64.into()])
        .unwrap();
    assert_eq!(record.to_string(), r#"#<struct name="job" retries=7 ratio=0.5>"#);
}

#[test]
fn zero_field_type_renders_bare_header() {
    let record = RecordType::anonymous_struct()
        .define()
        .unwrap()
        .instance([])
        .unwrap();
    assert_eq!(record.to_string(), "#<struct>");
}

#[test]
fn nested_record_applies_its_own_policy() {
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
    assert_eq!(
        outer.to_string(),
        r#"#<struct session=#<struct Session id="abc" token=[REDACTED]>>"#,
    );
}

#[test]
fn nested_record_in_redacted_field_never_prints() {
    let inner = RecordType::anonymous_struct()
        .fields(["value"])
        .allow(["value"])
        .define()
        .unwrap()
        .instance(["visible-inside".into()])
        .unwrap();
    let outer = RecordType::anonymous_struct()
        .fields(["inner"])
        .define()
        .unwrap()
        .instance([inner.into()])
        .unwrap();
    assert_eq!(outer.to_string(), "#<struct inner=[REDACTED]>");
}

#[test]
fn get_returns_declared_fields_only() {
    let record = credentials();
    let value = record.get("username").unwrap();
    assert_eq!(format!("{value:?}"), "\"example\"");
    assert!(record.get("nope").is_none());
}

#[test]
fn rendering_is_idempotent() {
    let record = credentials();
    assert_eq!(record.to_string(), record.to_string());
    assert_eq!(record.to_pretty_string(25), record.to_pretty_string(25));
}

#[test]
fn unknown_allow_name_fails_at_definition_time() {
    let err = RecordType::anonymous_struct()
        .fields(["a"])
        .allow(["typo"])
        .define()
        .unwrap_err();
    assert_eq!(
        err,
        DefineError::UnknownPolicyField {
            field: "typo".to_string(),
        }
    );
}

#[test]
fn positional_arity_is_exact() {
    let ty = RecordType::anonymous_struct()
        .fields(["a", "b", "c"])
        .define()
        .unwrap();
    let err = ty.instance([1_i32.into(), 2_i32.into()]).unwrap_err();
    assert_eq!(
        err,
        InstanceError::ArityMismatch {
            expected: 3,
            given: 2,
        }
    );
}

#[test]
fn keyword_construction_validates_names() {
    let ty = credentials_type();
    assert_eq!(
        ty.keyword_instance([("nope", FieldValue::from(1_i32))])
            .unwrap_err(),
        InstanceError::UnknownField {
            field: "nope".to_string(),
        }
    );
    assert_eq!(
        ty.keyword_instance([
            ("username", FieldValue::from("a")),
            ("username", FieldValue::from("b")),
        ])
        .unwrap_err(),
        InstanceError::DuplicateField {
            field: "username".to_string(),
        }
    );
    assert_eq!(
        ty.keyword_instance([("username", FieldValue::from("a"))])
            .unwrap_err(),
        InstanceError::MissingField {
            field: "password".to_string(),
        }
    );
}

#[test]
fn construction_style_matches_the_definition() {
    let keyword_only = credentials_type();
    assert_eq!(
        keyword_only
            .instance(["a".into(), "b".into(), "c".into()])
            .unwrap_err(),
        InstanceError::PositionalOnKeywordType,
    );

    let positional_only = RecordType::anonymous_struct()
        .fields(["a"])
        .define()
        .unwrap();
    assert_eq!(
        positional_only
            .keyword_instance([("a", FieldValue::from(1_i32))])
            .unwrap_err(),
        InstanceError::KeywordOnPositionalType,
    );
}

#[test]
fn errors_format_for_humans() {
    let err = RecordType::anonymous_struct()
        .fields(["a"])
        .allow(["typo"])
        .define()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "allow/redact entry \"typo\" is not a declared field"
    );

    let ty = RecordType::anonymous_struct().fields(["a"]).define().unwrap();
    let err = ty.instance([]).unwrap_err();
    assert_eq!(err.to_string(), "expected 1 positional values, got 0");
}
