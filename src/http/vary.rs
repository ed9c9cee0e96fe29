//! Building and updating the `Vary` response header.
//!
//! [`append`] merges field names into an existing header value and returns
//! the new value. [`vary`] does the same on a header collection, reading and
//! writing its `Vary` field.
//!
//! ```
//! use vary::{append, vary, HttpHeaders};
//!
//! assert_eq!(append("Accept", ["Origin", "accept"]).unwrap(), "Accept, Origin");
//! assert_eq!(append("Accept, Origin", "*").unwrap(), "*");
//!
//! let mut headers = HttpHeaders::new();
//! vary(&mut headers, "Accept-Encoding").unwrap();
//! assert_eq!(headers.get("vary"), Some("Accept-Encoding"));
//! ```

use tracing::trace;

use crate::http::field::{Field, FieldList, WILDCARD};
use crate::http::headers::HeaderFields;
use crate::http::validator::{Validator, VaryError};

pub const VARY: &str = "Vary";

/// Appends `field` to the `Vary` header value `header`.
///
/// Names already present (compared without regard to case) are not repeated,
/// and new names keep their own casing. A `*` in either input makes the
/// result `*`. If `header` is already `*`, it is returned as is.
///
/// Every name is validated before anything is merged.
pub fn append(header: &str, field: impl Into<Field>) -> Result<String, VaryError> {
    if header.trim_matches(|c: char| c == ' ' || c == '\t') == WILDCARD {
        return Ok(WILDCARD.to_string());
    }

    let field = field.into();
    let mut list = FieldList::parse(header)?;
    let names = Validator::validate_field_names(field.names())?;

    for name in names {
        list.insert_token(name);
        if list.is_wildcard() {
            break;
        }
    }

    let value = list.to_string();
    trace!(header, value = value.as_str(), "appended Vary fields");
    Ok(value)
}

/// Adds `field` to the `Vary` header of `headers`.
///
/// A missing header is created as `Vary`. When the merged value is empty the
/// header is left untouched, so an empty list never creates it. On error the
/// headers are not modified.
pub fn vary<H>(headers: &mut H, field: impl Into<Field>) -> Result<(), VaryError>
where
    H: HeaderFields + ?Sized,
{
    let value = append(headers.get(VARY).as_deref().unwrap_or(""), field)?;
    if !value.is_empty() {
        headers.set(VARY, &value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::headers::HttpHeaders;
    use crate::http::validator::NameFault;

    #[test]
    fn existing_wildcard_short_circuits() {
        assert_eq!(append("*", "Origin").unwrap(), "*");
        assert_eq!(append(" * ", ["Origin", "User-Agent"]).unwrap(), "*");
        // nothing else is looked at
        assert_eq!(append("*", "bad name").unwrap(), "*");
    }

    #[test]
    fn wildcard_in_fields_stops_merging() {
        assert_eq!(append("", ["Origin", "*", "Accept"]).unwrap(), "*");
        assert_eq!(append("Accept", "Origin,*").unwrap(), "*");
    }

    #[test]
    fn names_after_wildcard_are_still_validated() {
        let err = append("", ["*", "bad name"]).unwrap_err();
        assert_eq!(err.name(), "bad name");
    }

    #[test]
    fn invalid_existing_value_is_rejected() {
        let err = append("Accept, x:y", "Origin").unwrap_err();
        assert_eq!(err.name(), "x:y");
        assert_eq!(err.fault(), NameFault::Separator);
    }

    #[test]
    fn existing_value_is_normalized() {
        let value = append("Accept,,accept ,  Origin", Vec::<&str>::new()).unwrap();
        assert_eq!(value, "Accept, Origin");
    }

    #[test]
    fn empty_inputs_give_empty_value() {
        assert_eq!(append("", Vec::<String>::new()).unwrap(), "");
        assert_eq!(append("", " , ").unwrap(), "");
    }

    #[test]
    fn vary_leaves_headers_untouched_on_error() {
        let mut headers: HttpHeaders = [("Vary", "Accept")].into_iter().collect();
        let err = vary(&mut headers, ["Origin", "invalid header"]).unwrap_err();
        assert_eq!(err.name(), "invalid header");
        assert_eq!(headers.get("Vary"), Some("Accept"));
    }

    #[test]
    fn vary_does_not_create_empty_header() {
        let mut headers = HttpHeaders::new();
        vary(&mut headers, Vec::<&str>::new()).unwrap();
        vary(&mut headers, ",").unwrap();
        assert!(!headers.has("vary"));
    }

    #[test]
    fn vary_keeps_existing_header_casing() {
        let mut headers: HttpHeaders = [("vary", "Accept")].into_iter().collect();
        vary(&mut headers, "Origin").unwrap();
        assert_eq!(headers.stringify(), "vary: Accept, Origin\r\n");
    }

    #[test]
    fn vary_creates_canonical_name() {
        let mut headers = HttpHeaders::new();
        vary(&mut headers, "Origin").unwrap();
        assert_eq!(headers.stringify(), "Vary: Origin\r\n");
    }

    #[test]
    fn vary_through_trait_object() {
        let mut headers = HttpHeaders::new();
        let fields: &mut dyn HeaderFields = &mut headers;
        vary(fields, ["Origin", "User-Agent"]).unwrap();
        vary(fields, "origin").unwrap();
        assert_eq!(headers.get("Vary"), Some("Origin, User-Agent"));
    }
}
