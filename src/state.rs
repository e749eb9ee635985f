use std::fmt;

use time::OffsetDateTime;

use crate::{
    SameSite,
    attribute::{Attribute, lowercase_into},
    crumbs::{Crumbs, decode_arg},
    encode::encode_attributes,
    normalize::{normalize_domain, parse_expires, parse_max_age, same_site_from_lowercase},
};

/// A non-attribute `name=value` crumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pair {
    name: Vec<u8>,
    value: Vec<u8>,
}

impl Pair {
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

#[derive(Debug, Clone, Copy)]
enum PairWrite {
    Append,
    Upsert,
}

/// Decoded cookie pairs plus the attributes found alongside them.
///
/// A `CookieState` is meant to be owned by one request slot and reused:
/// [`reset`](Self::reset) empties it but keeps every allocation, and the
/// scratch buffers used while decoding are refilled rather than reallocated.
/// Pair slots past the live count keep their buffers and are refilled by the
/// next decode.
///
/// ```
/// use cookie_crumbs::CookieState;
///
/// let mut state = CookieState::new();
/// state.parse_header("id=abc; Path=/; Domain=.Example.com; Max-Age=60; HttpOnly");
///
/// assert_eq!(state.get("id"), Some(&b"abc"[..]));
/// assert_eq!(state.domain(), b"example.com");
/// assert_eq!(
///     state.to_string(),
///     "; max-age=60; domain=example.com; path=/; HttpOnly"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CookieState {
    pairs: Vec<Pair>,
    live: usize,
    scratch_name: Vec<u8>,
    scratch_value: Vec<u8>,
    scratch_lower: Vec<u8>,
    expires: Option<OffsetDateTime>,
    raw_expires: Vec<u8>,
    max_age: i64,
    raw_max_age: Vec<u8>,
    domain: Vec<u8>,
    path: Vec<u8>,
    http_only: bool,
    raw_http_only: Vec<u8>,
    secure: bool,
    raw_secure: Vec<u8>,
    same_site: Vec<u8>,
    same_site_kind: Option<SameSite>,
}

impl CookieState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes one or more `Cookie` header values into this state.
    ///
    /// Several values are treated as one value joined with `"; "`. Crumbs are
    /// appended, so repeated names are all kept. Malformed attribute values
    /// are dropped; this never fails.
    pub fn parse<'a, I>(&mut self, headers: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut name = std::mem::take(&mut self.scratch_name);
        let mut value = std::mem::take(&mut self.scratch_value);

        for (raw_name, raw_value) in Crumbs::new(headers) {
            decode_arg(&mut name, raw_name, false);
            decode_arg(&mut value, raw_value, true);
            self.store(&name, &value, PairWrite::Append);
        }

        self.scratch_name = name;
        self.scratch_value = value;
    }

    /// Decodes a single `Cookie` header value.
    pub fn parse_header(&mut self, header: impl AsRef<[u8]>) {
        self.parse([header.as_ref()]);
    }

    /// Sets an attribute, or upserts a pair when `name` is not an attribute.
    ///
    /// An existing pair with exactly this name has its value replaced in
    /// place; otherwise a new pair is appended.
    pub fn set(&mut self, name: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        self.store(name.as_ref(), value.as_ref(), PairWrite::Upsert);
    }

    /// Sets an attribute, or appends a pair even if the name already exists.
    pub fn add(&mut self, name: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        self.store(name.as_ref(), value.as_ref(), PairWrite::Append);
    }

    fn store(&mut self, name: &[u8], value: &[u8], write: PairWrite) {
        lowercase_into(&mut self.scratch_lower, name);
        match Attribute::classify(&self.scratch_lower) {
            Some(attribute) => self.set_attribute(attribute, value),
            None => match write {
                PairWrite::Append => self.append_pair(name, value),
                PairWrite::Upsert => self.upsert_pair(name, value),
            },
        }
    }

    // Once the name matched, the crumb belongs to the attribute even if its
    // value is rejected.
    fn set_attribute(&mut self, attribute: Attribute, value: &[u8]) {
        match attribute {
            Attribute::Path => copy_into(&mut self.path, value),
            Attribute::Domain => normalize_domain(&mut self.domain, value),
            Attribute::Secure => {
                self.secure = true;
                copy_into(&mut self.raw_secure, value);
            }
            Attribute::HttpOnly => {
                self.http_only = true;
                copy_into(&mut self.raw_http_only, value);
            }
            Attribute::Expires => {
                copy_into(&mut self.raw_expires, value);
                self.expires = match parse_expires(value) {
                    Ok(at) => Some(at),
                    Err(err) => {
                        tracing::trace!(%attribute, err = %err, "dropping cookie attribute value");
                        None
                    }
                };
            }
            Attribute::MaxAge => {
                copy_into(&mut self.raw_max_age, value);
                match parse_max_age(value) {
                    Ok(secs) => self.max_age = secs,
                    Err(err) => {
                        tracing::trace!(%attribute, err = %err, "dropping cookie attribute value");
                    }
                }
            }
            Attribute::SameSite => {
                lowercase_into(&mut self.scratch_lower, value);
                self.same_site_kind = same_site_from_lowercase(&self.scratch_lower);
                copy_into(&mut self.same_site, value);
            }
        }
    }

    fn append_pair(&mut self, name: &[u8], value: &[u8]) {
        match self.pairs.get_mut(self.live) {
            Some(slot) => {
                copy_into(&mut slot.name, name);
                copy_into(&mut slot.value, value);
            }
            None => self.pairs.push(Pair {
                name: name.to_vec(),
                value: value.to_vec(),
            }),
        }
        self.live += 1;
    }

    fn upsert_pair(&mut self, name: &[u8], value: &[u8]) {
        let live = self.live;
        match self.pairs[..live].iter_mut().find(|pair| pair.name == name) {
            Some(pair) => copy_into(&mut pair.value, value),
            None => self.append_pair(name, value),
        }
    }

    /// Returns the value of the first pair named `name`.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&[u8]> {
        let name = name.as_ref();
        self.pairs()
            .iter()
            .find(|pair| pair.name == name)
            .map(Pair::value)
    }

    /// Calls `visit` with every value named `name`, in arrival order, until it
    /// returns `false`.
    pub fn get_all<F>(&self, name: impl AsRef<[u8]>, mut visit: F)
    where
        F: FnMut(&[u8]) -> bool,
    {
        for value in self.values(name.as_ref()) {
            if !visit(value) {
                return;
            }
        }
    }

    /// Iterates over every value named `name`, in arrival order.
    pub fn values<'s>(&'s self, name: &'s [u8]) -> impl Iterator<Item = &'s [u8]> + 's {
        self.pairs()
            .iter()
            .filter(move |pair| pair.name == name)
            .map(Pair::value)
    }

    /// All stored pairs, in arrival order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs[..self.live]
    }

    /// Number of stored pairs; attributes are not counted.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Removes the first pair named `name`.
    ///
    /// The removed slot moves behind the live pairs, keeping its buffers.
    pub fn del(&mut self, name: impl AsRef<[u8]>) {
        let name = name.as_ref();
        if let Some(idx) = self.pairs().iter().position(|pair| pair.name == name) {
            self.pairs[idx..self.live].rotate_left(1);
            self.live -= 1;
        }
    }

    /// Removes every pair named `name`, keeping the order of the rest.
    pub fn del_all(&mut self, name: impl AsRef<[u8]>) {
        let name = name.as_ref();
        let mut kept = 0;
        for idx in 0..self.live {
            if self.pairs[idx].name != name {
                self.pairs.swap(kept, idx);
                kept += 1;
            }
        }
        self.live = kept;
    }

    /// Appends the attribute string to `dst`. See [`encode_attributes`].
    pub fn encode_into(&self, dst: &mut Vec<u8>) {
        encode_attributes(dst, self);
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut dst = Vec::new();
        self.encode_into(&mut dst);
        dst
    }

    /// Parsed `Expires`, in UTC. `None` when absent or unparseable.
    pub fn expires(&self) -> Option<OffsetDateTime> {
        self.expires
    }

    pub fn raw_expires(&self) -> &[u8] {
        &self.raw_expires
    }

    /// Parsed `Max-Age` in seconds: `0` when unset, `-1` for "expire now".
    pub fn max_age(&self) -> i64 {
        self.max_age
    }

    pub fn raw_max_age(&self) -> &[u8] {
        &self.raw_max_age
    }

    /// Domain without its leading dot, lowercased.
    pub fn domain(&self) -> &[u8] {
        &self.domain
    }

    pub fn path(&self) -> &[u8] {
        &self.path
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn raw_http_only(&self) -> &[u8] {
        &self.raw_http_only
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn raw_secure(&self) -> &[u8] {
        &self.raw_secure
    }

    /// `SameSite` exactly as received.
    pub fn same_site(&self) -> &[u8] {
        &self.same_site
    }

    /// `SameSite` as a known value, if it is one (matched case-insensitively).
    pub fn same_site_kind(&self) -> Option<SameSite> {
        self.same_site_kind
    }

    /// Empties the state while keeping its allocations.
    pub fn reset(&mut self) {
        self.live = 0;
        self.scratch_name.clear();
        self.scratch_value.clear();
        self.scratch_lower.clear();
        self.expires = None;
        self.raw_expires.clear();
        self.max_age = 0;
        self.raw_max_age.clear();
        self.domain.clear();
        self.path.clear();
        self.http_only = false;
        self.raw_http_only.clear();
        self.secure = false;
        self.raw_secure.clear();
        self.same_site.clear();
        self.same_site_kind = None;
    }
}

impl fmt::Display for CookieState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

fn copy_into(dst: &mut Vec<u8>, src: &[u8]) {
    dst.clear();
    dst.extend_from_slice(src);
}
