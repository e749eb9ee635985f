//! Reusable decoder and encoder for HTTP `Cookie` headers.
//!
//! A [`CookieState`] decodes one or more `Cookie` header values (RFC 6265,
//! including the HTTP/2 split form) into ordered `name=value` pairs plus the
//! recognized attributes: `Path`, `Domain`, `Expires`, `Max-Age`, `HttpOnly`,
//! `Secure` and `SameSite`. The attributes can be written back out as the
//! attribute list of a `Set-Cookie` header.
//!
//! Decoding never fails. A malformed `Expires` or `Max-Age` value is dropped
//! and its crumb is not stored as a pair.
//!
//! ```
//! use cookie_crumbs::CookieState;
//!
//! let mut state = CookieState::new();
//! state.parse([&b"a=1; Max-Age=3600"[..], &b"a=2; Secure"[..]]);
//!
//! assert_eq!(state.get("a"), Some(&b"1"[..]));
//! assert_eq!(state.values(b"a").count(), 2);
//! assert_eq!(state.to_string(), "; max-age=3600; secure");
//!
//! state.reset();
//! assert!(state.is_empty());
//! assert_eq!(state.max_age(), 0);
//! ```
//!
//! # Reuse
//! Every buffer is owned by the state and refilled in place, so keeping one
//! `CookieState` per worker and calling [`CookieState::reset`] between
//! requests avoids reallocating on every decode.

mod attribute;
mod config;
pub mod crumbs;
pub mod encode;
mod error;
#[cfg(feature = "http")]
mod headers;
pub mod normalize;
mod state;

pub use crate::attribute::Attribute;
pub use crate::config::SetCookieConfig;
pub use crate::error::{Error, Result};
pub use crate::state::{CookieState, Pair};
pub use tower_cookies::cookie::SameSite;
