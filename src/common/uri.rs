use log::warn;
use serde::Serialize;
use url::{ParseError, Url};

use crate::common::error::RequestError;

/// Base that relative references are validated against.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// The decomposed parts of a URI.
///
/// The URI is validated by a WHATWG URL parser, which also supplies the scheme and authority parts.
/// Path, query and fragment are sliced out of the URI as written, without normalisation or
/// re-encoding. Relative references (`/path?x=1`) have no scheme or authority. Scheme-relative
/// references (`//host/path`) keep their authority but no scheme.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct UriComponents {
    /// The scheme, e.g. `https`.
    pub scheme: Option<String>,
    /// The user name from the authority.
    pub user: Option<String>,
    /// The password from the authority.
    pub password: Option<String>,
    /// The host name or address.
    pub host: Option<String>,
    /// The port, when given and not the scheme's default.
    pub port: Option<u16>,
    /// The path as written. Never empty, `/` when the URI has no explicit path.
    pub path: String,
    /// The query string as written, without the leading `?`.
    pub query: Option<String>,
    /// The fragment as written, without the leading `#`.
    pub fragment: Option<String>,
}

impl UriComponents {
    /// Decomposes the given URI. Fails when the URI is empty or can't be parsed.
    pub fn parse(raw: &str) -> Result<UriComponents, RequestError> {
        if raw.trim().is_empty() {
            warn!("rejecting empty URI");
            return Err(RequestError::malformed(raw, "empty URI"));
        }

        let (url, absolute) = match Url::parse(raw) {
            Ok(url) => (url, true),
            Err(ParseError::RelativeUrlWithoutBase) => (Self::resolve_relative(raw)?, false),
            Err(err) => {
                warn!("rejecting URI {:?}: {}", raw, err);
                return Err(RequestError::malformed(raw, err));
            }
        };

        // the URL parser ignores surrounding spaces and control characters too
        let written = raw.trim_matches(|c: char| c <= ' ');
        let (path, query, fragment) = split_written(written, absolute);

        let mut components = UriComponents {
            scheme: Some(url.scheme().to_string()),
            user: Some(url.username()).filter(|u| !u.is_empty()).map(String::from),
            password: url.password().map(String::from),
            host: url.host_str().map(String::from),
            port: url.port(),
            path,
            query,
            fragment,
        };

        if !absolute {
            components.scheme = None;
            if !written.starts_with("//") {
                components.user = None;
                components.password = None;
                components.host = None;
                components.port = None;
            }
        }

        Ok(components)
    }

    /// Returns true if the URI carried a scheme.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    fn resolve_relative(raw: &str) -> Result<Url, RequestError> {
        let base = Url::parse(RELATIVE_BASE).map_err(|err| RequestError::malformed(raw, err))?;
        base.join(raw).map_err(|err| {
            warn!("rejecting relative URI {:?}: {}", raw, err);
            RequestError::malformed(raw, err)
        })
    }
}

/// Splits a URI that already passed validation into its path, query and fragment, as written.
fn split_written(uri: &str, absolute: bool) -> (String, Option<String>, Option<String>) {
    let (rest, fragment) = match uri.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (uri, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query.to_string())),
        None => (rest, None),
    };

    // a scheme never contains ':', so the first one ends it
    let rest = match rest.split_once(':') {
        Some((_, rest)) if absolute => rest,
        _ => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(authority) => authority
            .find(|c: char| c == '/' || c == '\\')
            .map(|i| &authority[i..])
            .unwrap_or(""),
        None => rest,
    };

    let path = if path.is_empty() { "/" } else { path };

    (path.to_string(), query, fragment)
}
