use std::io::Read;

use log::{debug, warn};

use crate::common::cookie;
use crate::common::error::RequestError;
use crate::common::query::{self, DataMap};
use crate::common::request::Request;
use crate::common::server::{
    ServerData, CONTENT_LENGTH, CONTENT_TYPE, HTTP_COOKIE, PATH_INFO, QUERY_STRING, REQUEST_METHOD, REQUEST_URI,
    SCRIPT_NAME,
};

/// Media type of bodies that are decoded into request data.
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Largest body that is read.
pub const MAX_BODY_SIZE: u64 = 3 * 1024 * 1024; // 3 megabytes

/// Builds a request from CGI-style variables and the request body.
///
/// Every variable ends up in the server data. The URI comes from `REQUEST_URI`, or is put together
/// from `SCRIPT_NAME`, `PATH_INFO` and `QUERY_STRING` when that is missing. Url encoded form bodies
/// are decoded into the request data; the raw body is always kept as content.
///
/// Only `CONTENT_LENGTH` bytes of the body are read, none when it is missing or not a number.
/// Declared lengths above [`MAX_BODY_SIZE`] are refused.
pub fn from_env<I, K, V>(vars: I, body: impl Read) -> Result<Request, RequestError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let server: ServerData = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

    let uri = request_uri(&server);
    let content = read_body(&server, body)?;

    let request_data = if is_url_encoded(&server) {
        query::parse(&content)
    } else {
        DataMap::new()
    };

    let cookies = server
        .get(HTTP_COOKIE)
        .map(String::as_str)
        .map(cookie::parse_header)
        .unwrap_or_default();

    let mut builder = Request::builder(uri)
        .request_data(request_data)
        .cookies(cookies)
        .content(content);

    if let Some(method) = server.get(REQUEST_METHOD) {
        builder = builder.method(method.as_str());
    }

    debug!("building request from {} CGI variables", server.len());
    builder.server_data(server).build()
}

/// Builds a request from this process's environment and standard input.
///
/// Variables whose name or value is not valid unicode are left out.
pub fn from_process() -> Result<Request, RequestError> {
    let vars = std::env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    from_env(vars, std::io::stdin().lock())
}

fn request_uri(server: &ServerData) -> String {
    if let Some(uri) = server.get(REQUEST_URI).filter(|u| !u.is_empty()) {
        return uri.clone();
    }

    let mut uri = String::new();
    uri.push_str(server.get(SCRIPT_NAME).map(String::as_str).unwrap_or(""));
    uri.push_str(server.get(PATH_INFO).map(String::as_str).unwrap_or(""));
    if uri.is_empty() {
        uri.push('/');
    }

    if let Some(query) = server.get(QUERY_STRING).filter(|q| !q.is_empty()) {
        uri.push('?');
        uri.push_str(query);
    }

    uri
}

fn read_body(server: &ServerData, body: impl Read) -> Result<Vec<u8>, RequestError> {
    let length = match server.get(CONTENT_LENGTH) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(length) => length,
            Err(_) => {
                warn!("ignoring body with unreadable content length {:?}", raw);
                return Ok(vec![]);
            }
        },
        None => return Ok(vec![]),
    };

    if length > MAX_BODY_SIZE {
        return Err(RequestError::BodyTooLarge { length, limit: MAX_BODY_SIZE });
    }

    let mut content = vec![];
    body.take(length).read_to_end(&mut content)?;
    Ok(content)
}

fn is_url_encoded(server: &ServerData) -> bool {
    server
        .get(CONTENT_TYPE)
        .and_then(|t| t.split(';').next())
        .map(|t| t.trim().eq_ignore_ascii_case(FORM_URLENCODED))
        .unwrap_or(false)
}
