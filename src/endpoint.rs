//! Event endpoint resolution.
//!
//! A client pointed at `localhost` talks to the development server on port
//! 42069; any other origin serves the stream itself.

use reqwest::Url;

use crate::error::ConfigError;

/// Origin used for any `localhost` origin.
pub const LOCAL_STREAM_ORIGIN: &str = "http://localhost:42069";

/// Path of the server-sent event endpoint.
pub const CONNECT_PATH: &str = "/connect";

/// Resolve the origin events are streamed from.
///
/// `localhost` (any scheme or port) maps to [`LOCAL_STREAM_ORIGIN`]; anything
/// else is used as is, without path, query or trailing slash.
pub fn resolve_origin(origin: &str) -> Result<String, ConfigError> {
    let url = parse_origin(origin)?;

    if url.host_str() == Some("localhost") {
        return Ok(LOCAL_STREAM_ORIGIN.to_string());
    }

    Ok(url.origin().ascii_serialization())
}

/// Validate an origin without resolving it.
pub fn parse_origin(origin: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidOrigin {
        value: origin.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(origin.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }
    Ok(url)
}

/// Build the subscription URL for a room on an already resolved origin.
///
/// Everything outside `A-Z a-z 0-9 - . _ ~` is percent-encoded, including
/// `! ' ( ) *`, which browsers' `encodeURIComponent` leaves alone. Servers
/// decode both forms to the same room id.
pub fn connect_url(stream_origin: &str, room: &str) -> String {
    format!(
        "{}{}?roomid={}",
        stream_origin.trim_end_matches('/'),
        CONNECT_PATH,
        urlencoding::encode(room)
    )
}

/// Resolved endpoint, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    stream_origin: String,
}

impl Endpoint {
    pub fn from_origin(origin: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            stream_origin: resolve_origin(origin)?,
        })
    }

    pub fn stream_origin(&self) -> &str {
        &self.stream_origin
    }

    pub fn url_for(&self, room: &str) -> String {
        connect_url(&self.stream_origin, room)
    }
}
