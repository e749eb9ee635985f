//! Per-attribute value parsing.
//!
//! Each function here only validates and converts; deciding what to do with a
//! rejected value is left to [`CookieState`](crate::CookieState).

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::{
    SameSite,
    attribute::lowercase_into,
    error::{Error, Result},
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// The weekday and zone are split off by hand; only the remainder goes
// through these layouts.
const RFC1123_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[day] [month repr:short case_sensitive:false] [year] [hour padding:none]:[minute]:[second]"
);
const LEGACY_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[day]-[month repr:short case_sensitive:false]-[year] [hour padding:none]:[minute]:[second]"
);

/// Parses an `Expires` value into a UTC timestamp.
///
/// Accepts `Tue, 10 Nov 2009 23:00:00 GMT` and the older dashed form
/// `Tue, 10-Nov-2009 23:00:00 GMT`. Any uppercase zone abbreviation is read
/// as UTC.
pub fn parse_expires(raw: &[u8]) -> Result<OffsetDateTime> {
    let value = std::str::from_utf8(raw).map_err(|_| Error::NonUtf8)?;
    parse_http_date(value, RFC1123_DATE).or_else(|_| parse_http_date(value, LEGACY_DATE))
}

fn parse_http_date(value: &str, layout: &[BorrowedFormatItem<'_>]) -> Result<OffsetDateTime> {
    let invalid = || Error::InvalidExpires(value.to_string());

    let (weekday, rest) = value.split_once(", ").ok_or_else(invalid)?;
    if !WEEKDAYS.iter().any(|day| day.eq_ignore_ascii_case(weekday)) {
        return Err(invalid());
    }

    let (datetime, zone) = rest.rsplit_once(' ').ok_or_else(invalid)?;
    if !(3..=5).contains(&zone.len()) || !zone.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(invalid());
    }

    if !has_unsigned_year(datetime) {
        return Err(invalid());
    }

    let datetime = PrimitiveDateTime::parse(datetime, layout).map_err(|_| invalid())?;
    Ok(datetime.assume_utc())
}

// `[year]` takes an optional sign; the year must directly follow the month.
fn has_unsigned_year(datetime: &str) -> bool {
    let Some((date, _clock)) = datetime.rsplit_once(' ') else {
        return false;
    };
    let date = date.as_bytes();
    match date.len().checked_sub(6).map(|at| &date[at..]) {
        Some([month, b' ' | b'-', year @ ..]) => {
            month.is_ascii_alphabetic() && year.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Parses a `Max-Age` value into seconds.
///
/// A non-zero value written with a leading `0` is rejected. Zero and negative
/// values mean "expire now" and come back as `-1`, so the result is never `0`.
pub fn parse_max_age(raw: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(raw).map_err(|_| Error::NonUtf8)?;
    let secs: i64 = text
        .parse()
        .map_err(|_| Error::InvalidMaxAge(text.to_string()))?;

    if secs != 0 && raw.first() == Some(&b'0') {
        return Err(Error::LeadingZeroMaxAge(text.to_string()));
    }

    Ok(if secs <= 0 { -1 } else { secs })
}

/// Writes `value` into `dst` without one leading `.` and ASCII-lowercased.
pub fn normalize_domain(dst: &mut Vec<u8>, value: &[u8]) {
    let value = value.strip_prefix(b".").unwrap_or(value);
    lowercase_into(dst, value);
}

/// Maps an already lowercased `SameSite` value to a known variant.
pub fn same_site_from_lowercase(value: &[u8]) -> Option<SameSite> {
    match value {
        b"strict" => Some(SameSite::Strict),
        b"lax" => Some(SameSite::Lax),
        b"none" => Some(SameSite::None),
        _ => None,
    }
}

/// `SameSite` value as written by the encoder.
pub fn same_site_str(same_site: SameSite) -> &'static str {
    match same_site {
        SameSite::Strict => "Strict",
        SameSite::Lax => "Lax",
        SameSite::None => "None",
    }
}
