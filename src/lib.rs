//! Build and update the HTTP `Vary` response header.
//!
//! [`append`] merges field names into a `Vary` header value: names are
//! compared without regard to case, keep the casing they were first written
//! with, and `*` replaces everything else. [`vary`] applies the same merge to
//! the `Vary` field of any [`HeaderFields`] collection.
//!
//! ```
//! use vary::{vary, HttpHeaders};
//!
//! let mut headers = HttpHeaders::new();
//! vary(&mut headers, ["Origin", "User-Agent"]).unwrap();
//! vary(&mut headers, "origin").unwrap();
//! assert_eq!(headers.get("Vary"), Some("Origin, User-Agent"));
//! ```
//!
//! # Features
//!
//! - `http`: implements [`HeaderFields`] for `http::HeaderMap`.

pub mod config;
pub mod http;

pub use crate::config::{ConfigError, VaryConfig};
pub use crate::http::vary::{append, vary, VARY};
pub use crate::http::{Field, FieldList, HeaderFields, HttpHeaders, NameFault, VaryError};
