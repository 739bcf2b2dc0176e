use super::*;

#[test]
fn server_error_message_prefixes_underlying_message() {
    let err = RequestError::Network("Failed to fetch".to_owned());
    assert_eq!(server_error_message(&err), "Server error - Failed to fetch");
}

#[test]
fn display_is_bare_message_for_every_variant() {
    assert_eq!(RequestError::Network("refused".to_owned()).to_string(), "refused");
    assert_eq!(RequestError::Body("body used".to_owned()).to_string(), "body used");
    assert_eq!(RequestError::Form("no form".to_owned()).to_string(), "no form");
    assert_eq!(RequestError::Unavailable.to_string(), "not available on server");
}

#[test]
fn server_error_message_keeps_empty_message() {
    let err = RequestError::Network(String::new());
    assert_eq!(server_error_message(&err), "Server error - ");
}
