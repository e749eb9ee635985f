#![cfg(feature = "http")]

// Tests for decoding cookies straight from an `http::HeaderMap`, including the
// HTTP/2 form where one cookie header is split across several fields.
mod common;

use cookie_crumbs::{CookieState, SetCookieConfig};
use http::{HeaderMap, HeaderValue, header};

fn headers(values: &[&'static str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(header::COOKIE, HeaderValue::from_static(*value));
    }
    headers
}

#[test]
fn split_fields_keep_order() {
    let mut state = CookieState::new();
    state.parse_header_map(&headers(&["id=1", "theme=dark; id=2", "Max-Age=60"]));

    assert_eq!(state.values(b"id").collect::<Vec<_>>(), [&b"1"[..], &b"2"[..]]);
    assert_eq!(state.get("theme"), Some(&b"dark"[..]));
    assert_eq!(state.max_age(), 60);
}

#[test]
fn leading_delimiter_in_later_field() {
    let mut state = CookieState::new();
    state.parse_header_map(&headers(&["a=1", "; max-age=2"]));

    assert_eq!(state.get("a"), Some(&b"1"[..]));
    assert_eq!(common::encode(&state), "; max-age=2");
}

#[test]
fn no_cookie_fields() {
    let mut state = CookieState::new();
    state.parse_header_map(&HeaderMap::new());

    assert!(state.is_empty());
    assert_eq!(common::encode(&state), "");
}

#[test]
fn reused_state_between_requests() {
    let mut state = CookieState::new();
    state.parse_header_map(&headers(&["a=1; Secure; Path=/a"]));
    assert!(state.secure());

    state.reset();
    state.parse_header_map(&headers(&["b=2"]));

    assert_eq!(state.get("a"), None);
    assert!(!state.secure());
    assert!(state.path().is_empty());
    assert_eq!(state.get("b"), Some(&b"2"[..]));
}

#[test]
fn set_cookie_header_value() {
    let value = SetCookieConfig::new("session")
        .set_cookie_header("abc")
        .expect("set-cookie header builds");

    assert_eq!(
        value.to_str().expect("header is ascii"),
        "session=abc; path=/; HttpOnly; secure; SameSite=Lax"
    );
}

#[test]
fn removal_header_value() {
    let value = SetCookieConfig::new("session")
        .removal_header()
        .expect("removal header builds");

    assert_eq!(
        value.to_str().expect("header is ascii"),
        "session=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
    );
}
