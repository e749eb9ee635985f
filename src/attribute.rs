/// The cookie attributes recognized by [`CookieState`](crate::CookieState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Path,
    Domain,
    Secure,
    Expires,
    MaxAge,
    HttpOnly,
    SameSite,
}

impl Attribute {
    /// Classifies an already lowercased crumb name.
    ///
    /// Dispatches on the byte length first, so every comparison below works
    /// on an array of exactly that length.
    pub fn classify(lowercase_name: &[u8]) -> Option<Self> {
        match lowercase_name.len() {
            4 => match lowercase_name {
                b"path" => Some(Self::Path),
                _ => None,
            },
            6 => match lowercase_name {
                b"secure" => Some(Self::Secure),
                b"domain" => Some(Self::Domain),
                _ => None,
            },
            7 => match lowercase_name {
                b"expires" => Some(Self::Expires),
                b"max-age" => Some(Self::MaxAge),
                _ => None,
            },
            8 => match lowercase_name {
                b"samesite" => Some(Self::SameSite),
                b"httponly" => Some(Self::HttpOnly),
                _ => None,
            },
            _ => None,
        }
    }

    /// Name as emitted by the encoder.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Domain => "domain",
            Self::Secure => "secure",
            Self::Expires => "expires",
            Self::MaxAge => "max-age",
            Self::HttpOnly => "HttpOnly",
            Self::SameSite => "SameSite",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes the ASCII-lowercased `src` into `dst`, reusing its allocation.
pub(crate) fn lowercase_into(dst: &mut Vec<u8>, src: &[u8]) {
    dst.clear();
    dst.extend(src.iter().map(u8::to_ascii_lowercase));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> Option<Attribute> {
        let mut lower = Vec::new();
        lowercase_into(&mut lower, name.as_bytes());
        Attribute::classify(&lower)
    }

    #[test]
    fn matches_every_attribute_case_insensitively() {
        assert_eq!(classify("Path"), Some(Attribute::Path));
        assert_eq!(classify("DOMAIN"), Some(Attribute::Domain));
        assert_eq!(classify("sEcUrE"), Some(Attribute::Secure));
        assert_eq!(classify("Expires"), Some(Attribute::Expires));
        assert_eq!(classify("Max-Age"), Some(Attribute::MaxAge));
        assert_eq!(classify("HttpOnly"), Some(Attribute::HttpOnly));
        assert_eq!(classify("SameSite"), Some(Attribute::SameSite));
    }

    #[test]
    fn same_length_names_fall_through() {
        assert_eq!(classify("pats"), None);
        assert_eq!(classify("secund"), None);
        assert_eq!(classify("expired"), None);
        assert_eq!(classify("max_age"), None);
        assert_eq!(classify("sametime"), None);
    }

    #[test]
    fn other_lengths_fall_through() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("pat"), None);
        assert_eq!(classify("paths"), None);
        assert_eq!(classify("http-only"), None);
    }

    #[test]
    fn non_ascii_is_not_folded() {
        assert_eq!(classify("PATH\u{130}"), None);
        assert_eq!(classify("pÄth"), None);
    }
}
