use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::{Value, json};
use tourist_hub_client::error::AppError;
use tourist_hub_client::model::http::{
    ApiRequest, Payload, UploadFile, decode_json, to_string_pairs,
};

const BASE_URL: &str = "http://localhost:3000";

fn sample_upload() -> UploadFile {
    UploadFile {
        file_name: "passport.pdf".to_string(),
        bytes: b"%PDF-1.4 passport".to_vec(),
        fields: vec![("type".to_string(), "passport".to_string())],
    }
}

#[test]
fn test_url_joins_relative_paths() {
    let request = ApiRequest::new(Method::GET, "/api/tour-events");
    assert_eq!(request.url(BASE_URL), "http://localhost:3000/api/tour-events");

    let request = ApiRequest::new(Method::GET, "api/tour-events");
    assert_eq!(request.url(BASE_URL), "http://localhost:3000/api/tour-events");
}

#[test]
fn test_url_keeps_absolute_paths() {
    let request = ApiRequest::new(Method::GET, "https://files.example.com/forms.pdf");
    assert_eq!(request.url(BASE_URL), "https://files.example.com/forms.pdf");
}

#[test]
fn test_default_headers_are_json() {
    let headers = ApiRequest::new(Method::GET, "/api/users")
        .headers(None)
        .unwrap();
    assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(headers.get(AUTHORIZATION).is_none());
}

#[test]
fn test_bearer_header_is_sensitive() {
    let headers = ApiRequest::new(Method::GET, "/api/users")
        .headers(Some("A1"))
        .unwrap();
    let authorization = headers.get(AUTHORIZATION).unwrap();
    assert_eq!(authorization, "Bearer A1");
    assert!(authorization.is_sensitive());
}

#[test]
fn test_caller_headers_replace_defaults() {
    let headers = ApiRequest::new(Method::GET, "/api/documents/forms/blank")
        .with_header("Accept", "*/*")
        .with_header("X-Trace", "abc")
        .headers(None)
        .unwrap();
    assert_eq!(headers.get_all(ACCEPT).iter().count(), 1);
    assert_eq!(headers.get(ACCEPT).unwrap(), "*/*");
    assert_eq!(headers.get("x-trace").unwrap(), "abc");
}

#[test]
fn test_caller_cannot_override_bearer() {
    let headers = ApiRequest::new(Method::GET, "/api/users")
        .with_header("Authorization", "Bearer forged")
        .headers(Some("A1"))
        .unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer A1");
}

#[test]
fn test_multipart_has_no_json_content_type() {
    let request = ApiRequest::new(Method::POST, "/api/documents")
        .with_upload(sample_upload())
        .with_header("Content-Type", "application/json");
    assert!(request.is_multipart());

    let headers = request.headers(Some("A1")).unwrap();
    assert!(headers.get(CONTENT_TYPE).is_none());
    assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
}

#[test]
fn test_invalid_header_name_is_rejected() {
    let result = ApiRequest::new(Method::GET, "/api/users")
        .with_header("bad header", "x")
        .headers(None);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_build_json_request() {
    let request = ApiRequest::new(Method::POST, "/api/tour-events")
        .with_json(&json!({"customTourName": "Umrah Winter"}))
        .unwrap()
        .build(&Client::new(), BASE_URL, Some("A1"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(request.method(), &Method::POST);
    assert_eq!(request.url().as_str(), "http://localhost:3000/api/tour-events");
    assert_eq!(request.headers().get_all(CONTENT_TYPE).iter().count(), 1);
    assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer A1");

    let body: Value = serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
    assert_eq!(body, json!({"customTourName": "Umrah Winter"}));
}

#[test]
fn test_build_query_request() {
    let request = ApiRequest::new(Method::GET, "/api/tour-events")
        .with_query(&json!({"status": "Active", "skip": null}))
        .unwrap()
        .build(&Client::new(), BASE_URL, None)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        request.url().as_str(),
        "http://localhost:3000/api/tour-events?status=Active"
    );
    assert!(request.body().is_none());
}

#[test]
fn test_build_multipart_request() {
    let request = ApiRequest::new(Method::POST, "/api/documents")
        .with_upload(sample_upload())
        .build(&Client::new(), BASE_URL, Some("A1"))
        .unwrap()
        .build()
        .unwrap();

    let content_type = request.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    assert_eq!(request.headers().get_all(CONTENT_TYPE).iter().count(), 1);
}

#[test]
fn test_with_json_sets_payload() {
    let request = ApiRequest::new(Method::PUT, "/api/users/u-1")
        .with_json(&json!({"firstName": "Sara"}))
        .unwrap();
    assert_eq!(request.payload, Payload::Json(json!({"firstName": "Sara"})));
    assert!(!request.is_multipart());
}

#[test]
fn test_to_string_pairs_flattens_object() {
    let mut pairs = to_string_pairs(&json!({
        "type": "passport",
        "pages": 2,
        "verified": false,
        "notes": null
    }))
    .unwrap();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("pages".to_string(), "2".to_string()),
            ("type".to_string(), "passport".to_string()),
            ("verified".to_string(), "false".to_string()),
        ]
    );
}

#[test]
fn test_to_string_pairs_null_is_empty() {
    assert!(to_string_pairs(&()).unwrap().is_empty());
    assert!(to_string_pairs(&Value::Null).unwrap().is_empty());
}

#[test]
fn test_to_string_pairs_rejects_non_objects() {
    let result = to_string_pairs(&json!(["a", "b"]));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_decode_json_empty_body_is_empty_object() {
    let value: Value = decode_json(b"").unwrap();
    assert_eq!(value, json!({}));

    let value: Value = decode_json(b"  \n").unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_decode_json_body() {
    let value: Value = decode_json(br#"{"ok":true}"#).unwrap();
    assert_eq!(value, json!({"ok": true}));
}

#[test]
fn test_decode_json_invalid_body() {
    let result: Result<Value, AppError> = decode_json(b"<html>oops</html>");
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_upload_form_has_boundary() {
    let form = sample_upload().to_form();
    assert!(!form.boundary().is_empty());
}
