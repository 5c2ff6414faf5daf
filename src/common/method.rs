use std::fmt::{Display, Formatter};

use serde::Serialize;

/// An HTTP method.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    /// CONNECT method.
    CONNECT,
    /// DELETE method.
    DELETE,
    /// GET method.
    #[default]
    GET,
    /// HEAD method.
    HEAD,
    /// OPTIONS method.
    OPTIONS,
    /// PATCH method.
    PATCH,
    /// POST method.
    POST,
    /// PUT method.
    PUT,
    /// TRACE method.
    TRACE,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! methods {
    ($($name:ident),+ $(,)?) => {
        impl Method {
            /// Every known method, in alphabetical order.
            pub const ALL: &'static [Method] = &[$(Method::$name),+];

            /// The method as it appears on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Method::$name => stringify!($name),)+
                }
            }

            /// Converts the given string to a method. Methods are case sensitive. Returns None if no Method matches.
            pub fn try_from_str(s: &str) -> Option<Method> {
                match s {
                    $(stringify!($name) => Some(Method::$name),)+
                    _ => None
                }
            }
        }
    }
}

methods!(CONNECT, DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT, TRACE);
