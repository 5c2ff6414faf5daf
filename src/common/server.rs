use std::collections::BTreeMap;

/// Transport and environment metadata accompanying a request, keyed like CGI variables.
pub type ServerData = BTreeMap<String, String>;

macro_rules! server_keys {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $value:expr);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: &str = $value;
        )+

        /// Every well-known server data key.
        pub const KNOWN_KEYS: &[&str] = &[$($name),+];
    }
}

server_keys! {
    /// The body's content length.
    (CONTENT_LENGTH, "CONTENT_LENGTH");
    /// The body's media type.
    (CONTENT_TYPE, "CONTENT_TYPE");
    /// The raw `Accept` header.
    (HTTP_ACCEPT, "HTTP_ACCEPT");
    /// The raw `Cookie` header.
    (HTTP_COOKIE, "HTTP_COOKIE");
    /// The raw `Host` header.
    (HTTP_HOST, "HTTP_HOST");
    /// The raw `Referer` header.
    (HTTP_REFERER, "HTTP_REFERER");
    /// The raw `User-Agent` header.
    (HTTP_USER_AGENT, "HTTP_USER_AGENT");
    /// Extra path information following the script name.
    (PATH_INFO, "PATH_INFO");
    /// The query string, without the leading `?`.
    (QUERY_STRING, "QUERY_STRING");
    /// The client's address.
    (REMOTE_ADDR, "REMOTE_ADDR");
    /// The request method.
    (REQUEST_METHOD, "REQUEST_METHOD");
    /// The request target as sent by the client.
    (REQUEST_URI, "REQUEST_URI");
    /// The path of the script handling the request.
    (SCRIPT_NAME, "SCRIPT_NAME");
    /// The server's host name.
    (SERVER_NAME, "SERVER_NAME");
    /// The server's port.
    (SERVER_PORT, "SERVER_PORT");
    /// The protocol version, e.g. `HTTP/1.1`.
    (SERVER_PROTOCOL, "SERVER_PROTOCOL");
}

/// Creates a map of server data.
/// ```
/// use air_http::common::server::{HTTP_REFERER, REMOTE_ADDR};
/// use air_http::server_data;
///
/// let server = server_data![
///    (HTTP_REFERER, "http://example.com/"),
///    (REMOTE_ADDR, "127.0.0.1"),
///    ("CUSTOM", "value"),
/// ];
///
/// assert_eq!(server.get(HTTP_REFERER).unwrap(), "http://example.com/");
/// assert_eq!(server.get("CUSTOM").unwrap(), "value");
/// ```
#[macro_export]
macro_rules! server_data {
    () => { $crate::common::server::ServerData::new() };
    ($(($key:expr, $value:expr)),+ $(,)?) => {
        <$crate::common::server::ServerData as ::std::iter::FromIterator<(String, String)>>::from_iter(vec![
            $(($key.to_string(), $value.to_string()),)+
        ])
    }
}
