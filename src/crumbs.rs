//! Splitting of raw `Cookie` header values into crumbs.
//!
//! HTTP/2 allows a single `Cookie` header to be split into several header
//! fields (RFC 7540 section 8.1.2.5). Those fields are semantically the same
//! as one field joined with `"; "`, so [`Crumbs`] walks every buffer in order
//! and never yields a crumb spanning two buffers.

/// Lazy iterator over the `(name, value)` crumbs of one or more header values.
///
/// Names and values are yielded raw; run them through [`decode_arg`] before
/// classifying them. Empty parts between delimiters are skipped and a part
/// without `=` yields an empty value.
#[derive(Debug, Clone)]
pub struct Crumbs<'a, I> {
    headers: I,
    current: &'a [u8],
}

impl<'a, I> Crumbs<'a, I>
where
    I: Iterator<Item = &'a [u8]>,
{
    pub fn new<H>(headers: H) -> Self
    where
        H: IntoIterator<IntoIter = I>,
    {
        Self {
            headers: headers.into_iter(),
            current: &[],
        }
    }
}

impl<'a, I> Iterator for Crumbs<'a, I>
where
    I: Iterator<Item = &'a [u8]>,
{
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.current.is_empty() {
                self.current = self.headers.next()?;
            }

            // A delimiter at index 0 is still a split point; it produces an
            // empty part that is skipped below.
            let part = match find_byte(b';', self.current) {
                Some(idx) => {
                    let (part, rest) = self.current.split_at(idx);
                    self.current = &rest[1..];
                    part
                }
                None => std::mem::take(&mut self.current),
            };

            if part.is_empty() {
                continue;
            }

            return Some(match find_byte(b'=', part) {
                Some(idx) => (&part[..idx], &part[idx + 1..]),
                None => (part, &[][..]),
            });
        }
    }
}

fn find_byte(needle: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Copies `src` into `dst` with surrounding spaces removed.
///
/// When `strip_quotes` is set, one pair of enclosing double quotes is removed
/// after trimming. `dst` is truncated first so its allocation is reused.
pub fn decode_arg(dst: &mut Vec<u8>, src: &[u8], strip_quotes: bool) {
    let mut src = trim_spaces(src);
    if strip_quotes && src.len() > 1 && src[0] == b'"' && src[src.len() - 1] == b'"' {
        src = &src[1..src.len() - 1];
    }

    dst.clear();
    dst.extend_from_slice(src);
}

fn trim_spaces(mut src: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = src {
        src = rest;
    }
    while let [rest @ .., b' '] = src {
        src = rest;
    }
    src
}
