//! Header collections that [`vary`](crate::http::vary::vary) can update.
//!
//! The [`HeaderFields`] trait is the only thing the `Vary` logic needs from a
//! header collection: read a field, write a field, and test for presence, all
//! with case-insensitive names.
//!
//! [`HttpHeaders`] is a small in-memory implementation. Headers are stored in
//! an ordered map to preserve insertion order. Names are matched without
//! regard to case, but a header keeps the casing it was first stored with.
//! Values are stored as raw strings, without validation.
//!
//! With the `http` feature, [`http::HeaderMap`] implements the trait as well.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Get, set and presence check on named header fields.
pub trait HeaderFields {
    /// The field value, with repeated fields joined by `", "`.
    fn get(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Replaces every value of `name` with `value`.
    fn set(&mut self, name: &str, value: &str);

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    // lowercase name -> (name as stored, value)
    headers: IndexMap<String, (String, String)>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Sets a header, keeping the stored casing when it already exists.
    pub fn set_raw(&mut self, name: &str, value: &str) {
        let entry = self
            .headers
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| (name.to_string(), String::new()));
        entry.1 = value.to_string();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers
            .shift_remove(&name.to_ascii_lowercase())
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// `(name, value)` pairs in insertion order, names in stored casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.headers
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in self.iter() {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }
}

impl HeaderFields for HttpHeaders {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        HttpHeaders::get(self, name).map(Cow::Borrowed)
    }

    fn set(&mut self, name: &str, value: &str) {
        self.set_raw(name, value)
    }

    fn has(&self, name: &str) -> bool {
        HttpHeaders::has(self, name)
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for HttpHeaders {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = HttpHeaders::new();
        for (name, value) in iter {
            headers.set_raw(name.as_ref(), value.as_ref());
        }
        headers
    }
}

#[cfg(feature = "http")]
mod header_map {
    use std::borrow::Cow;

    use http::header::{HeaderMap, HeaderName, HeaderValue};
    use tracing::warn;

    use super::HeaderFields;

    fn value_text(value: &HeaderValue) -> Cow<'_, str> {
        match value.to_str() {
            Ok(text) => Cow::Borrowed(text),
            // obs-text and invalid UTF-8 reach the validator as lossy text
            Err(_) => String::from_utf8_lossy(value.as_bytes()),
        }
    }

    impl HeaderFields for HeaderMap {
        fn get(&self, name: &str) -> Option<Cow<'_, str>> {
            let mut values = self.get_all(name).into_iter().map(value_text);
            let first = values.next()?;

            let mut rest = values.peekable();
            if rest.peek().is_none() {
                return Some(first);
            }

            let mut joined = first.into_owned();
            for value in rest {
                joined.push_str(", ");
                joined.push_str(&value);
            }
            Some(Cow::Owned(joined))
        }

        fn set(&mut self, name: &str, value: &str) {
            let name_res = HeaderName::from_bytes(name.as_bytes());
            let value_res = HeaderValue::from_str(value);
            match (name_res, value_res) {
                (Ok(name), Ok(value)) => {
                    self.insert(name, value);
                }
                _ => warn!(name, value, "dropping header that cannot be represented"),
            }
        }

        fn has(&self, name: &str) -> bool {
            self.contains_key(name)
        }
    }
}
