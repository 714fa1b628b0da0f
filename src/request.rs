//! Incoming HTTP request type.

use std::collections::HashMap;

use http::HeaderMap;

/// An incoming request, as seen by a handler.
///
/// Every catalog route is a `GET`, so the body is never read.
pub struct Request {
    pub(crate) headers: HeaderMap,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(headers: HeaderMap, params: HashMap<String, String>) -> Self {
        Self { headers, params }
    }

    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Case-insensitive header lookup.
    ///
    /// Returns `Some("")` for a header that is present but empty, and `None`
    /// for a missing header or one whose value is not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Whether the header is present at all, whatever its value.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/cards/{cardtype}`, `req.param("cardtype")` on
    /// `/cards/shoes` returns `Some("shoes")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl Request {
    pub(crate) fn blank() -> Self {
        Self::new(HeaderMap::new(), HashMap::new())
    }

    pub(crate) fn with_header(mut self, name: &'static str, value: &str) -> Self {
        let value = http::HeaderValue::from_str(value).expect("valid header value");
        self.headers.append(name, value);
        self
    }

    pub(crate) fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_owned(), value.to_owned());
        self
    }
}
