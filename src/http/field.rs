//! Field names as they are handed to [`vary`](crate::http::vary::vary) and as
//! they are listed inside a `Vary` header value.
//!
//! [`Field`] is what callers pass in: either one string or a sequence of
//! strings, where every string may itself be a comma-separated list.
//!
//! [`FieldList`] is the parsed form of a header value. It keeps names in
//! first-seen order, compares them case-insensitively, and remembers the case
//! they were first written with. Once `*` is seen the list collapses to `*`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::http::validator::{Validator, VaryError};

pub const WILDCARD: &str = "*";

/// One or more field names to add to a `Vary` header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Single(String),
    Multiple(Vec<String>),
}

impl Field {
    /// All non-empty names in argument order, trimmed but not validated.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        let parts: &[String] = match self {
            Field::Single(s) => std::slice::from_ref(s),
            Field::Multiple(v) => v,
        };
        parts.iter().flat_map(|p| split_list(p))
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::Multiple(Vec::new())
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Single(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Single(s)
    }
}

impl From<&String> for Field {
    fn from(s: &String) -> Self {
        Field::Single(s.clone())
    }
}

impl<S: Into<String>> From<Vec<S>> for Field {
    fn from(vec: Vec<S>) -> Self {
        Field::Multiple(vec.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize, S: Into<String>> From<[S; N]> for Field {
    fn from(arr: [S; N]) -> Self {
        Field::Multiple(arr.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for Field {
    fn from(slice: &[&str]) -> Self {
        Field::Multiple(slice.iter().map(|s| s.to_string()).collect())
    }
}

/// Splits a comma-separated list, trimming optional whitespace and skipping
/// empty entries.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(trim_ows).filter(|name| !name.is_empty())
}

fn trim_ows(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

/// Ordered, case-insensitively unique list of field names.
#[derive(Debug, Clone, Default, Eq)]
pub struct FieldList {
    // lowercase name -> name as first written
    names: IndexMap<String, String>,
    wildcard: bool,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a header value.
    ///
    /// A `*` anywhere in the value turns the whole list into a wildcard, but
    /// the remaining entries are still validated.
    pub fn parse(value: &str) -> Result<Self, VaryError> {
        let mut list = FieldList::new();
        for name in split_list(value) {
            list.insert_token(Validator::validate_field_name(name)?);
        }
        Ok(list)
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// `true` when rendering would produce an empty header value.
    pub fn is_empty(&self) -> bool {
        !self.wildcard && self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        if self.wildcard { 1 } else { self.names.len() }
    }

    pub fn contains(&self, name: &str) -> bool {
        if self.wildcard {
            return true;
        }
        self.names.contains_key(&name.to_ascii_lowercase())
    }

    /// Validates and adds a single name. Returns `true` if the rendered value
    /// changed; on error the list is left as it was.
    pub fn insert(&mut self, name: &str) -> Result<bool, VaryError> {
        let name = Validator::validate_field_name(name)?;
        Ok(self.insert_token(name))
    }

    pub(crate) fn insert_token(&mut self, name: &str) -> bool {
        if self.wildcard {
            return false;
        }
        if name == WILDCARD {
            self.wildcard = true;
            self.names.clear();
            return true;
        }

        let key = name.to_ascii_lowercase();
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, name.to_string());
        true
    }

    /// Names in insertion order, or just `*`.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let wildcard = self.wildcard.then_some(WILDCARD);
        let names = self.names.values().map(String::as_str);
        wildcard.into_iter().chain(names)
    }
}

// Order matters: two lists render the same value only if their names line up.
impl PartialEq for FieldList {
    fn eq(&self, other: &Self) -> bool {
        self.wildcard == other.wildcard && self.names.iter().eq(other.names.iter())
    }
}

impl FromStr for FieldList {
    type Err = VaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldList::parse(s)
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
