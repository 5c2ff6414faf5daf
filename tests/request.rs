extern crate air_http;

use std::path::Path;

use air_http::{Request, RequestError};
use serde_json::json;

use crate::util::fixtures::{data, full_request, TEST_URI};

mod util;

#[test]
fn construct_from_uri_and_method() {
    let request = Request::new(TEST_URI, "POST").unwrap();

    assert_eq!(request.uri(), TEST_URI);
    assert_eq!(request.uri_path(), "/segment1/segment2");
    assert_eq!(request.method(), "POST");
    assert_eq!(request.query_data(), &data(json!({"test": "true"})));
    assert!(request.request_data().is_empty());
    assert!(request.server_data().is_empty());
    assert!(request.cookies().is_empty());
    assert!(request.file_data().is_empty());
    assert!(request.content().is_empty());
}

#[test]
fn uri_components() {
    let request = full_request();
    let components = request.uri_components();

    assert_eq!(components.scheme.as_deref(), Some("http"));
    assert_eq!(components.host.as_deref(), Some("www.test.com"));
    assert_eq!(components.query.as_deref(), Some("test=true"));
    assert_eq!(components.fragment, None);
}

#[test]
fn root_uri_path_is_slash() {
    assert_eq!(Request::new("http://www.test.com", "GET").unwrap().uri_path(), "/");
    assert_eq!(Request::new("https://www.test.com?page=2", "GET").unwrap().uri_path(), "/");
}

#[test]
fn uri_path_is_exactly_as_written() {
    let cases = [
        ("http://www.test.com/a/../b", "/a/../b"),
        ("http://www.test.com/café/x y", "/café/x y"),
        ("http://www.test.com/a%20b/", "/a%20b/"),
        ("/café/x y", "/café/x y"),
        ("/seg\\ment", "/seg\\ment"),
        ("segment1/segment2?x=1", "segment1/segment2"),
    ];

    for (uri, path) in cases {
        assert_eq!(Request::new(uri, "GET").unwrap().uri_path(), path, "path of {:?}", uri);
    }
}

#[test]
fn query_string_decoded_from_uri_as_written() {
    let request = Request::new("/search?q=b c&city=S%C3%A3o+Paulo", "GET").unwrap();

    assert_eq!(request.uri_components().query.as_deref(), Some("q=b c&city=S%C3%A3o+Paulo"));
    assert_eq!(request.query_data(), &data(json!({"q": "b c", "city": "São Paulo"})));
}

#[test]
fn serialized_maps_are_sorted() {
    let request = Request::builder("/")
        .server_data([("Z", "1"), ("A", "2"), ("M", "3")].iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        .build()
        .unwrap();

    let output = serde_json::to_string(&request).unwrap();
    assert!(output.contains(r#""server_data":{"A":"2","M":"3","Z":"1"}"#), "{}", output);
}

#[test]
fn query_last_value_wins() {
    let request = Request::new("/list?sort=asc&page=1&sort=desc&name=a+b", "GET").unwrap();

    assert_eq!(request.uri_path(), "/list");
    assert_eq!(request.query_parameters(), &data(json!({"sort": "desc", "page": "1", "name": "a b"})));
}

#[test]
fn malformed_uris_are_rejected() {
    for uri in ["//", "", "http://", "http://example.com:70000/"] {
        match Request::new(uri, "GET") {
            Err(RequestError::MalformedUri { uri: rejected, .. }) => assert_eq!(rejected, uri),
            other => panic!("expected {:?} to be rejected, got {:?}", uri, other),
        }
    }
}

#[test]
fn request_data_merge() {
    let mut request = Request::new(TEST_URI, "POST").unwrap();

    request.add_request_data(data(json!({"a": "1"})));
    request.add_request_data(data(json!({"a": "2", "b": "3"})));

    assert_eq!(request.request_data(), &data(json!({"a": "2", "b": "3"})));
    assert_eq!(request.query_data(), &data(json!({"test": "true"})));
}

#[test]
fn request_data_merge_keeps_untouched_keys() {
    let mut request = full_request();

    request.add_request_data(data(json!({"servings": 6})));

    assert_eq!(request.request_value("title"), Some(&json!("Naan")));
    assert_eq!(request.request_value("servings"), Some(&json!(6)));
}

#[test]
fn request_data_lookup() {
    let request = full_request();
    let fallback = json!("fallback");

    assert_eq!(request.request_value_or("title", &fallback), &json!("Naan"));
    assert_eq!(request.request_value_or("missing", &fallback), &fallback);
    assert_eq!(request.request_value("missing"), None);
}

#[test]
fn referer() {
    assert_eq!(full_request().referer(), Some("http://www.test.com/"));
    assert_eq!(Request::new(TEST_URI, "GET").unwrap().referer(), None);
}

#[test]
fn cookies() {
    let request = full_request();

    assert_eq!(request.cookie("session"), Some("abc123"));
    assert!(request.isset_cookie("session"));
    assert_eq!(request.cookie("unknown"), None);
    assert!(!request.isset_cookie("unknown"));
}

#[test]
fn file_data() {
    let request = full_request();

    assert_eq!(request.file_data().len(), 2);
    assert_eq!(request.file_data().get("notes"), Some(&json!("not an upload")));

    let photo = request.uploaded_file("photo").unwrap();
    assert_eq!(photo.name, "naan.jpg");
    assert_eq!(photo.tmp_name, Path::new("/tmp/upload1"));
    assert!(photo.is_ok());

    assert_eq!(request.uploaded_file("notes"), None);
    assert_eq!(request.uploaded_file("missing"), None);
}

#[test]
fn content() {
    assert_eq!(full_request().content_str(), Some("title=Naan&servings=4"));
}

#[test]
fn serializes_without_content() {
    let value = serde_json::to_value(full_request()).unwrap();

    assert_eq!(value["uri"], json!(TEST_URI));
    assert_eq!(value["method"], json!("POST"));
    assert_eq!(value["uri_components"]["path"], json!("/segment1/segment2"));
    assert!(value.get("content").is_none());
}
