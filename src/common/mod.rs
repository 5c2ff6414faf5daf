/// Cookie map and `Cookie` header parsing.
pub mod cookie;
/// Errors raised while building a request.
pub mod error;
/// Uploaded file descriptors.
pub mod file;
/// HTTP method data type and functions.
pub mod method;
/// Form-urlencoded query and body decoding.
pub mod query;
/// HTTP request data type and functions.
pub mod request;
/// Server metadata keys and map.
pub mod server;
/// URI decomposition.
pub mod uri;
