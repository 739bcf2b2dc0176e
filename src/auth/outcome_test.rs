use super::*;

#[test]
fn ok_body_navigates_to_target() {
    assert_eq!(
        interpret("OK".to_owned(), "../portals"),
        Outcome::Navigate("../portals".to_owned())
    );
}

#[test]
fn other_body_is_notified_verbatim() {
    assert_eq!(
        interpret("Invalid credentials".to_owned(), "../portals"),
        Outcome::Notify("Invalid credentials".to_owned())
    );
}

#[test]
fn sentinel_match_is_exact() {
    for body in ["ok", "Ok", " OK", "OK\n", "OK.", ""] {
        assert!(!is_success(body), "{body:?} must not count as success");
    }
    assert!(is_success("OK"));
}

#[test]
fn empty_body_is_notified() {
    assert_eq!(interpret(String::new(), "../login"), Outcome::Notify(String::new()));
}

#[test]
fn from_result_maps_transport_failure_to_server_error() {
    let outcome = from_result(Err(RequestError::Network("Failed to fetch".to_owned())), "../login");
    assert_eq!(outcome, Outcome::Notify("Server error - Failed to fetch".to_owned()));
}

#[test]
fn from_result_passes_body_through_interpret() {
    assert_eq!(
        from_result(Ok("OK".to_owned()), "../login"),
        Outcome::Navigate("../login".to_owned())
    );
    assert_eq!(
        from_result(Ok("Session expired".to_owned()), "../login"),
        Outcome::Notify("Session expired".to_owned())
    );
}
