use air_http::common::query::DataMap;
use air_http::common::server::HTTP_REFERER;
use air_http::{server_data, Request};
use serde_json::{json, Value};

pub const TEST_URI: &str = "http://www.test.com/segment1/segment2?test=true";

/// Converts a JSON object literal into a data map.
pub fn data(value: Value) -> DataMap {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {}", other),
    }
}

/// A POST request carrying every kind of data.
pub fn full_request() -> Request {
    Request::builder(TEST_URI)
        .method("POST")
        .request_data(data(json!({"title": "Naan", "servings": 4})))
        .server_data(server_data![(HTTP_REFERER, "http://www.test.com/"), ("REMOTE_ADDR", "10.0.0.1")])
        .cookies([("session".to_string(), "abc123".to_string())].into_iter().collect())
        .file_data(data(json!({
            "photo": {"name": "naan.jpg", "type": "image/jpeg", "size": 2048, "tmp_name": "/tmp/upload1", "error": 0},
            "notes": "not an upload"
        })))
        .content("title=Naan&servings=4")
        .build()
        .unwrap()
}
