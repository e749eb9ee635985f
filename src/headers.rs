//! Glue between [`http`] header maps and the cookie state.

use http::{HeaderMap, HeaderValue, header::COOKIE};

use crate::{CookieState, SetCookieConfig, error::Result};

impl CookieState {
    /// Decodes every `Cookie` field in `headers`, in the order they appear.
    ///
    /// HTTP/2 clients may split one cookie header into several fields; they
    /// are decoded as if joined with `"; "`.
    pub fn parse_header_map(&mut self, headers: &HeaderMap) {
        self.parse(headers.get_all(COOKIE).iter().map(HeaderValue::as_bytes));
    }
}

impl SetCookieConfig {
    /// [`header_value`](Self::header_value) as a `Set-Cookie` header value.
    pub fn set_cookie_header(&self, value: &str) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&self.header_value(value))?)
    }

    /// [`removal_header_value`](Self::removal_header_value) as a `Set-Cookie`
    /// header value.
    pub fn removal_header(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&self.removal_header_value())?)
    }
}
