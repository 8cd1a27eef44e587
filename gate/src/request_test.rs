use super::*;

// =============================================================
// Builder
// =============================================================

#[test]
fn builder_collects_query_and_json_body() {
    let ctx = RequestBuilder::post("/admin/product/")
        .query("skip", 0)
        .query_opt("status", Some("enabled"))
        .query_opt::<&str>("product_code", None)
        .json(&serde_json::json!({ "name": "Xray GUI" }))
        .build()
        .unwrap();

    assert_eq!(ctx.method, Method::Post);
    assert_eq!(ctx.path, "/admin/product/");
    assert_eq!(
        ctx.query,
        vec![("skip".to_owned(), "0".to_owned()), ("status".to_owned(), "enabled".to_owned())]
    );
    assert_eq!(ctx.body, Body::Json(serde_json::json!({ "name": "Xray GUI" })));
    assert!(ctx.url.is_empty());
    assert!(ctx.headers.is_empty());
}

#[test]
fn builder_rejects_empty_path() {
    let err = RequestBuilder::get("  ").build().unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn builder_keeps_first_error() {
    let err = RequestBuilder::get("/x")
        .header("bad name", "v")
        .header("X-Ok", "line\nbreak")
        .build()
        .unwrap_err();
    assert_eq!(err, ApiError::Malformed("invalid header name `bad name`".to_owned()));
}

#[test]
fn builder_rejects_control_characters_in_header_value() {
    let err = RequestBuilder::get("/x").header("X-Trace", "a\r\nb").build().unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn builder_reports_unserializable_json() {
    let mut map = std::collections::HashMap::new();
    map.insert((1, 2), "tuple keys are not JSON object keys");
    let err = RequestBuilder::post("/x").json(&map).build().unwrap_err();
    assert!(matches!(err, ApiError::Malformed(msg) if msg.starts_with("json body")));
}

// =============================================================
// Context headers
// =============================================================

#[test]
fn set_header_replaces_case_insensitively() {
    let mut ctx = RequestBuilder::get("/x").header("authorization", "Bearer old").build().unwrap();
    ctx.set_header("Authorization", "Bearer new".to_owned());
    assert_eq!(ctx.headers.len(), 1);
    assert_eq!(ctx.header("AUTHORIZATION"), Some("Bearer new"));
}

// =============================================================
// Bodies and responses
// =============================================================

#[test]
fn form_body_encodes_pairs() {
    let ctx = RequestBuilder::post("/admin/auth/login")
        .form(&[("username", "admin"), ("password", "p@ss word")])
        .build()
        .unwrap();
    assert_eq!(ctx.body.content_type(), Some("application/x-www-form-urlencoded"));
    assert_eq!(ctx.body.encode().as_deref(), Some("username=admin&password=p%40ss+word"));
}

#[test]
fn empty_body_has_no_encoding() {
    assert_eq!(Body::Empty.encode(), None);
    assert_eq!(Body::Empty.content_type(), None);
}

#[test]
fn parse_body_handles_empty_and_text() {
    assert_eq!(parse_body(""), Value::Null);
    assert_eq!(parse_body("[1,2]"), serde_json::json!([1, 2]));
    assert_eq!(parse_body("Bad Gateway"), Value::String("Bad Gateway".to_owned()));
}

#[test]
fn response_success_range() {
    assert!(Response::new(200, Value::Null).is_success());
    assert!(Response::new(204, Value::Null).is_success());
    assert!(!Response::new(301, Value::Null).is_success());
    assert!(!Response::new(401, Value::Null).is_success());
}
