use std::io::Write as _;

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::state::CookieState;

const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Appends the attribute portion of `state` to `dst`.
///
/// Every attribute is prefixed with `"; "` so the output can follow a
/// `name=value` crumb directly. Pairs are never written. The order is fixed:
/// max-age or expires, domain, path, HttpOnly, secure, SameSite.
pub fn encode_attributes(dst: &mut Vec<u8>, state: &CookieState) {
    if state.max_age() > 0 {
        dst.extend_from_slice(b"; max-age=");
        // Writing into a Vec cannot fail.
        let _ = write!(dst, "{}", state.max_age());
    } else if let Some(expires) = state.expires() {
        dst.extend_from_slice(b"; expires=");
        append_http_date(dst, expires);
    }

    if !state.domain().is_empty() {
        dst.extend_from_slice(b"; domain=");
        dst.extend_from_slice(state.domain());
    }

    if !state.path().is_empty() {
        dst.extend_from_slice(b"; path=");
        dst.extend_from_slice(state.path());
    }

    if state.http_only() {
        dst.extend_from_slice(b"; HttpOnly");
    }

    if state.secure() {
        dst.extend_from_slice(b"; secure");
    }

    if !state.same_site().is_empty() {
        dst.extend_from_slice(b"; SameSite=");
        dst.extend_from_slice(state.same_site());
    }
}

/// Appends `at` as an IMF-fixdate (`Tue, 10 Nov 2009 23:00:00 GMT`).
///
/// Nothing is written when `at` cannot be expressed in UTC.
pub fn append_http_date(dst: &mut Vec<u8>, at: OffsetDateTime) {
    let Some(utc) = at.checked_to_offset(UtcOffset::UTC) else {
        tracing::warn!(%at, "expires date is out of range in utc");
        return;
    };

    let mark = dst.len();
    if let Err(err) = utc.format_into(dst, HTTP_DATE) {
        tracing::warn!(err = %err, "expires date could not be formatted");
        dst.truncate(mark);
    }
}
