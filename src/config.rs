use std::borrow::Cow;

use time::{Duration, OffsetDateTime};

use crate::{
    CookieState, SameSite,
    encode::append_http_date,
    normalize::same_site_str,
};

/// Typed settings for building a `Set-Cookie` value.
///
/// Every setting is written through [`CookieState::set`], so the same
/// normalization applies as for parsed input (domains are lowercased, a
/// non-positive max-age means "expire now").
///
/// New configs start out `HttpOnly`, `Secure`, `SameSite=Lax` and scoped to
/// `/`, with no expiry.
#[derive(Debug, Clone)]
pub struct SetCookieConfig {
    name: Cow<'static, str>,
    path: Option<Cow<'static, str>>,
    domain: Option<Cow<'static, str>>,
    max_age: Option<Duration>,
    expires: Option<OffsetDateTime>,
    same_site: Option<SameSite>,
    http_only: bool,
    secure: bool,
}

impl SetCookieConfig {
    pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self {
            name: name.into(),
            path: Some("/".into()),
            domain: None,
            max_age: None,
            expires: None,
            same_site: Some(SameSite::Lax),
            http_only: true,
            secure: true,
        }
    }

    #[must_use]
    pub fn with_path<P: Into<Cow<'static, str>>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Leaves `Path` out, so the client defaults it from the request URL.
    #[must_use]
    pub fn without_path(mut self) -> Self {
        self.path = None;
        self
    }

    #[must_use]
    pub fn for_domain<D: Into<Cow<'static, str>>>(mut self, domain: D) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Max-Age wins over Expires when both are set and the duration is
    /// positive.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    #[must_use]
    pub fn with_expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    #[must_use]
    pub fn session_only(mut self) -> Self {
        self.max_age = None;
        self.expires = None;
        self
    }

    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    #[must_use]
    pub fn without_same_site(mut self) -> Self {
        self.same_site = None;
        self
    }

    #[must_use]
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes the configured attributes into `state`.
    ///
    /// This only ever adds: unset options and flags set to `false` leave
    /// whatever `state` already holds.
    pub fn apply(&self, state: &mut CookieState) {
        if let Some(max_age) = self.max_age {
            state.set("Max-Age", max_age.whole_seconds().to_string());
        }

        if let Some(expires) = self.expires {
            let mut raw = Vec::new();
            append_http_date(&mut raw, expires);
            if !raw.is_empty() {
                state.set("Expires", raw);
            }
        }

        if let Some(domain) = &self.domain {
            state.set("Domain", domain.as_bytes());
        }

        if let Some(path) = &self.path {
            state.set("Path", path.as_bytes());
        }

        if self.http_only {
            state.set("HttpOnly", "");
        }

        if self.secure {
            state.set("Secure", "");
        }

        if let Some(same_site) = self.same_site {
            state.set("SameSite", same_site_str(same_site));
        }
    }

    #[must_use]
    pub fn build_state(&self) -> CookieState {
        let mut state = CookieState::new();
        self.apply(&mut state);
        state
    }

    /// A complete `Set-Cookie` value: `name=value` followed by the attributes.
    pub fn header_value(&self, value: &str) -> String {
        format!("{}={}{}", self.name, value, self.build_state())
    }

    /// A `Set-Cookie` value that makes the client drop the cookie.
    ///
    /// Only path and domain are kept, since the client matches on them, and
    /// the expiry is moved to the epoch.
    pub fn removal_header_value(&self) -> String {
        let mut state = CookieState::new();
        let mut raw = Vec::new();
        append_http_date(&mut raw, OffsetDateTime::UNIX_EPOCH);
        state.set("Expires", raw);

        if let Some(domain) = &self.domain {
            state.set("Domain", domain.as_bytes());
        }
        if let Some(path) = &self.path {
            state.set("Path", path.as_bytes());
        }

        format!("{}={}", self.name, state)
    }
}
