/// Command-line argument parser
pub mod args;
/// HTTP request data types.
pub mod common;

/// Building requests from CGI-style environments.
pub mod cgi;

pub use common::error::RequestError;
pub use common::request::{Request, RequestBuilder};
