use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn detail_message_surfaces_verbatim() {
    let err = from_response(400, r#"{"detail": "Already checked in today"}"#);
    assert_eq!(
        err,
        ApiError::Api {
            status: 400,
            message: "Already checked in today".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Already checked in today");
}

#[test]
fn status_401_becomes_unauthorized() {
    let err = from_response(401, r#"{"detail": "Could not validate credentials"}"#);
    assert!(err.is_auth_failure());
    assert_eq!(err.to_string(), "Could not validate credentials");
}

#[test]
fn non_json_body_falls_back_to_status_message() {
    let err = from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Api {
            status: 502,
            message: "request failed with status 502".to_owned(),
        }
    );
}

#[test]
fn empty_detail_falls_back_to_status_message() {
    let err = from_response(404, r"{}");
    assert_eq!(err.to_string(), "request failed with status 404");
}

#[test]
fn only_401_counts_as_auth_failure() {
    assert!(!from_response(403, r#"{"detail": "Not authorized"}"#).is_auth_failure());
    assert!(!ApiError::Network("timeout".to_owned()).is_auth_failure());
}
