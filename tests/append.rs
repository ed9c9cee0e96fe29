use vary::{append, NameFault};

#[test]
fn field_accepts_string_list_and_array() {
    assert!(append("", "foo").is_ok());
    assert!(append("", "foo, bar").is_ok());
    assert!(append("", ["foo", "bar"]).is_ok());
}

#[test]
fn field_rejects_separators() {
    for name in ["invalid:header", "invalid header"] {
        let err = append("", name).unwrap_err();
        assert_eq!(err.fault(), NameFault::Separator);
        assert_eq!(
            err.to_string(),
            format!("field argument contains an invalid header name `{name}`")
        );
    }
}

#[test]
fn field_rejects_non_token_characters() {
    for name in ["invalid\nheader", "invalid\u{0080}header"] {
        let err = append("", name).unwrap_err();
        assert_eq!(err.fault(), NameFault::NonVisible);
        assert_eq!(err.name(), name);
        assert!(err.to_string().contains("invalid header name"));
        assert!(err.to_string().contains(name));
    }
}

#[test]
fn empty_header() {
    assert_eq!(append("", "Origin").unwrap(), "Origin");
    assert_eq!(append("", ["Origin", "User-Agent"]).unwrap(), "Origin, User-Agent");
    assert_eq!(
        append("", ["ORIGIN", "user-agent", "AccepT"]).unwrap(),
        "ORIGIN, user-agent, AccepT"
    );
}

#[test]
fn header_with_values() {
    assert_eq!(append("Accept", "Origin").unwrap(), "Accept, Origin");
    assert_eq!(
        append("Accept", ["Origin", "User-Agent"]).unwrap(),
        "Accept, Origin, User-Agent"
    );
    assert_eq!(append("Accept", "Accept").unwrap(), "Accept");
    assert_eq!(append("Accept", "accEPT").unwrap(), "Accept");
    assert_eq!(append("Accept", "AccepT").unwrap(), "Accept");
}

#[test]
fn wildcard() {
    assert_eq!(append("", "*").unwrap(), "*");
    assert_eq!(append("*", "Origin").unwrap(), "*");
    assert_eq!(append("Accept, Accept-Encoding", "*").unwrap(), "*");
    assert_eq!(append("Accept, Accept-Encoding, *", "Origin").unwrap(), "*");
}

#[test]
fn field_is_string() {
    assert_eq!(append("", "Accept").unwrap(), "Accept");
    assert_eq!(
        append("", "Accept, Accept-Encoding").unwrap(),
        "Accept, Accept-Encoding"
    );
    assert_eq!(
        append("", "  Accept     ,     Origin    ").unwrap(),
        "Accept, Origin"
    );
    assert_eq!(append("", "Accept,*").unwrap(), "*");
}

#[test]
fn field_is_array() {
    assert_eq!(
        append("", ["Accept", "Accept-Language"]).unwrap(),
        "Accept, Accept-Language"
    );
    assert_eq!(append("", ["Accept", "Accept"]).unwrap(), "Accept");
    assert_eq!(append("", ["Accept", "ACCEPT"]).unwrap(), "Accept");
    assert_eq!(
        append("", ["Origin", "User-Agent", "*", "Accept"]).unwrap(),
        "*"
    );
    assert_eq!(
        append(
            "Accept, Accept-Encoding",
            ["origin", "accept", "accept-charset"]
        )
        .unwrap(),
        "Accept, Accept-Encoding, origin, accept-charset"
    );
}

#[test]
fn field_is_slice_or_owned() {
    let names: &[&str] = &["Origin", "Accept"];
    assert_eq!(append("", names).unwrap(), "Origin, Accept");

    let owned = vec![String::from("Origin"), String::from("origin")];
    assert_eq!(append("", owned).unwrap(), "Origin");

    let single = String::from("User-Agent");
    assert_eq!(append("Origin", &single).unwrap(), "Origin, User-Agent");
}

#[test]
fn empty_array() {
    assert_eq!(append("", Vec::<&str>::new()).unwrap(), "");
}
