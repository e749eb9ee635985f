#![allow(dead_code)]

// Shared helpers for integration tests.
//
// `tower_cookies::Cookie` is used as an independent `Set-Cookie` parser so the
// encoder's output is checked against what real clients would accept.
use cookie_crumbs::CookieState;
use tower_cookies::Cookie;

pub fn parse(input: &str) -> CookieState {
    // Decode a single header value into a fresh state.
    let mut state = CookieState::new();
    state.parse_header(input);
    state
}

pub fn encode(state: &CookieState) -> String {
    String::from_utf8(state.to_bytes()).expect("encoded attributes are valid utf-8")
}

pub fn reencode(encoded: &[u8]) -> Vec<u8> {
    // Decode previously encoded attributes into a fresh state and encode again.
    let mut state = CookieState::new();
    state.parse_header(encoded);
    state.to_bytes()
}

pub fn converge(input: &[u8]) -> (Vec<u8>, usize) {
    // Decode/encode until the output stops changing. Every pass after the
    // first can only shrink the output, so this is bounded by its length.
    // Returns the fixed point and the number of extra passes it took.
    let mut current = reencode(input);
    let mut passes = 0;
    loop {
        let next = reencode(&current);
        if next == current {
            return (current, passes);
        }
        assert!(
            next.len() < current.len(),
            "re-encoding grew: {:?} -> {:?}",
            String::from_utf8_lossy(&current),
            String::from_utf8_lossy(&next)
        );
        current = next;
        passes += 1;
    }
}

pub fn parse_set_cookie(set_cookie: &str) -> Cookie<'static> {
    // Parse a full `Set-Cookie` header value.
    Cookie::parse(set_cookie.to_string()).expect("set-cookie parses successfully")
}
