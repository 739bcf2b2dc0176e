use super::*;

#[test]
fn diagnostic_line_includes_variant_and_message() {
    let err = RequestError::Network("Failed to fetch".to_owned());
    assert_eq!(diagnostic_line(&err), "auth request failed: Network(\"Failed to fetch\")");
}

#[test]
fn diagnostic_line_for_unavailable_runtime() {
    assert_eq!(diagnostic_line(&RequestError::Unavailable), "auth request failed: Unavailable");
}
