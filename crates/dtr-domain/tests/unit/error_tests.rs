//! Unit tests for domain error types

use dtr_domain::Error;
use dtr_domain::ports::PeerError;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("urn:aas:1");
    match error {
        Error::NotFound { ref id } => assert_eq!(id, "urn:aas:1"),
        _ => panic!("Expected NotFound error"),
    }
    assert!(error.is_not_found());
    assert!(error.is_recoverable());
}

#[test]
fn test_submodel_not_found_error() {
    let error = Error::submodel_not_found("shell", "sm");
    assert_eq!(
        error.to_string(),
        "Submodel descriptor 'sm' not found in shell descriptor 'shell'"
    );
    assert!(!error.is_not_found());
    assert!(error.is_recoverable());
}

#[test]
fn test_cursor_errors_are_recoverable() {
    assert!(Error::cursor_not_found("B").is_recoverable());
    assert!(Error::invalid_cursor("***").is_recoverable());
    assert!(!Error::already_exists("A").is_recoverable());
}

#[test]
fn test_delegation_failure_keeps_source() {
    let peer = PeerError::Status {
        code: 503,
        body: "unavailable".to_string(),
    };
    let error = Error::delegation_failure("urn:aas:1", peer);
    match &error {
        Error::DelegationFailure { id, source } => {
            assert_eq!(id, "urn:aas:1");
            assert!(source.to_string().contains("503"));
        }
        _ => panic!("Expected DelegationFailure error"),
    }
    assert!(std::error::Error::source(&error).is_some());
    assert!(!error.is_recoverable());
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("cannot read dtr.toml", io);
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "cannot read dtr.toml");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_peer_not_found_classification() {
    assert!(
        PeerError::NotFound {
            url: "http://peer/x".to_string()
        }
        .is_not_found()
    );
    assert!(
        PeerError::Status {
            code: 404,
            body: String::new()
        }
        .is_not_found()
    );
    assert!(!PeerError::decode("bad json").is_not_found());
}
