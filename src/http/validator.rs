//! Field name validation for the [`vary`](crate::http::vary) module.
//!
//! A field name listed in `Vary` must be an HTTP `token`:
//!
//! ```text
//! token = 1*tchar
//! tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
//!         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
//! ```
//!
//! Nothing else of the header grammar is checked here.

use thiserror::Error;
use tracing::debug;

/// What made a field name fail the token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFault {
    /// Printable ASCII that is not a token character, such as a space or `:`.
    Separator,
    /// A control byte or a non-ASCII character.
    NonVisible,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VaryError {
    #[error("{}", invalid_name_message(.name, .fault))]
    InvalidHeaderName { name: String, fault: NameFault },
}

impl VaryError {
    /// The rejected field name, exactly as it was found after trimming.
    pub fn name(&self) -> &str {
        match self {
            VaryError::InvalidHeaderName { name, .. } => name,
        }
    }

    pub fn fault(&self) -> NameFault {
        match self {
            VaryError::InvalidHeaderName { fault, .. } => *fault,
        }
    }
}

fn invalid_name_message(name: &str, fault: &NameFault) -> String {
    match fault {
        NameFault::Separator => format!("field argument contains an invalid header name `{name}`"),
        NameFault::NonVisible => format!("invalid header name `{name}`"),
    }
}

/// Returns `true` if `b` is a `tchar`.
pub fn is_token_char(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'^' | b'_' | b'`' | b'|' | b'~' |
        b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

pub fn is_token(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_token_char)
}

pub struct Validator;

impl Validator {
    /// Checks a single, already trimmed field name.
    pub fn validate_field_name(name: &str) -> Result<&str, VaryError> {
        if is_token(name) {
            return Ok(name);
        }

        let fault = if name.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
            NameFault::Separator
        } else {
            NameFault::NonVisible
        };

        debug!(name, ?fault, "rejected Vary field name");
        Err(VaryError::InvalidHeaderName {
            name: name.to_string(),
            fault,
        })
    }

    /// Validates every name, stopping at the first failure.
    pub fn validate_field_names<'a, I>(names: I) -> Result<Vec<&'a str>, VaryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(Self::validate_field_name).collect()
    }
}
