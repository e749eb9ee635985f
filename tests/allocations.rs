// Tests that a reused `CookieState` decodes without touching the heap once
// its buffers have grown to fit the traffic.
use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use cookie_crumbs::CookieState;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

struct CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn allocations_during(f: impl FnOnce()) -> usize {
    let before = ALLOCATIONS.with(Cell::get);
    f();
    ALLOCATIONS.with(Cell::get) - before
}

#[test]
fn reparse_after_reset() {
    let input = "a=1; b=2; c=3; Path=/x";
    let mut state = CookieState::new();
    state.parse_header(input);

    let count = allocations_during(|| {
        state.reset();
        state.parse_header(input);
    });

    assert_eq!(count, 0);
    assert_eq!(state.len(), 3);
    assert_eq!(state.get("c"), Some(&b"3"[..]));
    assert_eq!(state.path(), b"/x");
}

#[test]
fn shorter_request_after_longer_one() {
    let mut state = CookieState::new();
    state.parse_header(
        "session=0123456789abcdef; theme=dark; lang=en; Path=/app; Domain=.Example.com; \
         Max-Age=60; Expires=Tue, 10 Nov 2009 23:00:00 GMT; HttpOnly; Secure; SameSite=Strict",
    );

    let count = allocations_during(|| {
        state.reset();
        state.parse_header("sid=42; Path=/; SameSite=None");
    });

    assert_eq!(count, 0);
    assert_eq!(state.len(), 1);
    assert_eq!(state.get("sid"), Some(&b"42"[..]));
    assert!(state.domain().is_empty());
    assert_eq!(state.same_site(), b"None");
}

#[test]
fn deleted_pairs_are_refilled() {
    let mut state = CookieState::new();
    state.parse_header("a=1; b=2; a=3");

    let count = allocations_during(|| {
        state.del_all("a");
        state.add("z", "9");
        state.add("y", "8");
    });

    assert_eq!(count, 0);
    let names: Vec<&[u8]> = state.pairs().iter().map(|pair| pair.name()).collect();
    assert_eq!(names, [&b"b"[..], &b"z"[..], &b"y"[..]]);
}
