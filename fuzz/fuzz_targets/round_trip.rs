#![no_main]

use cookie_crumbs::CookieState;
use libfuzzer_sys::fuzz_target;

fn reencode(state: &mut CookieState, input: &[u8]) -> Vec<u8> {
    state.reset();
    state.parse_header(input);
    state.to_bytes()
}

fuzz_target!(|data: &[u8]| {
    let mut state = CookieState::new();

    // Split the input into several header fields as well, which must decode
    // the same as one joined field.
    let fields: Vec<&[u8]> = data.split(|&b| b == b'\n').collect();
    state.parse(fields.iter().copied());
    let split = state.to_bytes();

    let joined = fields.join(&b"; "[..]);
    let mut current = reencode(&mut state, &joined);
    assert_eq!(split, current, "split fields decoded differently");

    // Every pass after the first can only remove bytes, so decode/encode must
    // reach a fixed point within `current.len()` more passes.
    let bound = current.len() + 1;
    for _ in 0..bound {
        let next = reencode(&mut state, &current);
        if next == current {
            return;
        }
        assert!(
            next.len() < current.len(),
            "re-encoding grew: {:?} -> {:?}",
            String::from_utf8_lossy(&current),
            String::from_utf8_lossy(&next)
        );
        current = next;
    }
    panic!("decode/encode did not converge");
});
