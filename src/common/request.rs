use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;

use crate::common::cookie::Cookies;
use crate::common::error::RequestError;
use crate::common::file::UploadedFile;
use crate::common::method::Method;
use crate::common::query::{self, DataMap};
use crate::common::server::{ServerData, HTTP_REFERER};
use crate::common::uri::UriComponents;

/// An incoming HTTP request, as seen by the code handling it.
///
/// Built once per request with [`Request::builder`] and read-only afterwards, except for
/// [`Request::add_request_data`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Request {
    uri: String,
    uri_components: UriComponents,
    method: String,
    request_data: DataMap,
    query_data: DataMap,
    server_data: ServerData,
    cookies: Cookies,
    file_data: DataMap,
    #[serde(skip)]
    content: Vec<u8>,
}

impl Request {
    /// Creates a request with the given URI and method and no other data.
    pub fn new(uri: impl Into<String>, method: impl Into<String>) -> Result<Request, RequestError> {
        Request::builder(uri).method(method).build()
    }

    /// Starts building a request for the given URI.
    pub fn builder(uri: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(uri)
    }

    /// The method, exactly as given.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The method, if it is one of the known methods.
    pub fn known_method(&self) -> Option<Method> {
        Method::try_from_str(&self.method)
    }

    /// The original URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The components the URI was decomposed into.
    pub fn uri_components(&self) -> &UriComponents {
        &self.uri_components
    }

    /// The URI's path, `/` when the URI has none.
    pub fn uri_path(&self) -> &str {
        &self.uri_components.path
    }

    /// The query parameters.
    pub fn query_data(&self) -> &DataMap {
        &self.query_data
    }

    /// Alias of [`Request::query_data`].
    pub fn query_parameters(&self) -> &DataMap {
        self.query_data()
    }

    /// A single query parameter.
    pub fn query_value(&self, key: &str) -> Option<&Value> {
        self.query_data.get(key)
    }

    /// The request (body) data.
    pub fn request_data(&self) -> &DataMap {
        &self.request_data
    }

    /// A single request data value, `None` when absent.
    pub fn request_value(&self, key: &str) -> Option<&Value> {
        self.request_data.get(key)
    }

    /// A single request data value, or `default` when absent.
    pub fn request_value_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.request_value(key).unwrap_or(default)
    }

    /// Merges `data` into the request data. Keys in `data` replace existing ones.
    pub fn add_request_data(&mut self, data: DataMap) {
        trace!("merging {} keys into request data", data.len());
        self.request_data.extend(data);
    }

    /// The server metadata.
    pub fn server_data(&self) -> &ServerData {
        &self.server_data
    }

    /// The referring page, if the client sent one.
    pub fn referer(&self) -> Option<&str> {
        self.server_data.get(HTTP_REFERER).map(String::as_str)
    }

    /// Every cookie.
    pub fn cookies(&self) -> &Cookies {
        &self.cookies
    }

    /// The value of the named cookie.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Returns true if the named cookie is set.
    pub fn isset_cookie(&self, name: &str) -> bool {
        self.cookie(name).is_some()
    }

    /// The uploaded file metadata, as given.
    pub fn file_data(&self) -> &DataMap {
        &self.file_data
    }

    /// The upload sent under the given form field, if that entry describes a single upload.
    pub fn uploaded_file(&self, field: &str) -> Option<UploadedFile> {
        self.file_data.get(field).and_then(UploadedFile::from_value)
    }

    /// The raw, unparsed body.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The raw body, if it is valid UTF-8.
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Builder for a [`Request`]. Everything except the URI is optional.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    uri: String,
    method: Option<String>,
    request_data: DataMap,
    query_data: Option<DataMap>,
    server_data: ServerData,
    cookies: Cookies,
    file_data: DataMap,
    content: Vec<u8>,
}

impl RequestBuilder {
    /// Creates a builder for the given URI.
    pub fn new(uri: impl Into<String>) -> RequestBuilder {
        RequestBuilder { uri: uri.into(), ..Default::default() }
    }

    /// Sets the method. Defaults to `GET`.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets the request (body) data.
    pub fn request_data(mut self, data: DataMap) -> Self {
        self.request_data = data;
        self
    }

    /// Sets the query data. When never set, it is decoded from the URI's query string.
    pub fn query_data(mut self, data: DataMap) -> Self {
        self.query_data = Some(data);
        self
    }

    /// Sets the server metadata.
    pub fn server_data(mut self, data: ServerData) -> Self {
        self.server_data = data;
        self
    }

    /// Sets the cookies.
    pub fn cookies(mut self, cookies: Cookies) -> Self {
        self.cookies = cookies;
        self
    }

    /// Sets the uploaded file metadata.
    pub fn file_data(mut self, data: DataMap) -> Self {
        self.file_data = data;
        self
    }

    /// Sets the raw body.
    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds the request. Fails if the URI is malformed.
    pub fn build(self) -> Result<Request, RequestError> {
        let uri_components = UriComponents::parse(&self.uri)?;

        let query_data = match self.query_data {
            Some(data) => data,
            None => uri_components
                .query
                .as_deref()
                .map(|q| query::parse(q.as_bytes()))
                .unwrap_or_default(),
        };

        let method = self.method.unwrap_or_else(|| Method::default().to_string());

        debug!("built request {} {}", method, self.uri);

        Ok(Request {
            uri: self.uri,
            uri_components,
            method,
            request_data: self.request_data,
            query_data,
            server_data: self.server_data,
            cookies: self.cookies,
            file_data: self.file_data,
            content: self.content,
        })
    }
}
