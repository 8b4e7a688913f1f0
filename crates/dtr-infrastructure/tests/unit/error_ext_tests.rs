//! Error Extension Tests

use dtr_domain::error::{Error, Result};
use dtr_infrastructure::error_ext::{ErrorContext, registry_error};
use std::io;

fn failing() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_config_context_keeps_source() {
    let result: Result<()> = failing().config_context("failed to read config");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.contains("failed to read config"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_context_is_internal() {
    let err = failing().context("loading seed").unwrap_err();
    assert!(matches!(err, Error::Internal { ref message } if message.starts_with("loading seed")));
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| {
            evaluated = true;
            "never"
        })
        .unwrap();
    assert_eq!(value, 1);
    assert!(!evaluated);
}

#[test]
fn test_registry_error_is_configuration() {
    let err = registry_error("Unknown event sink provider 'x'".to_string());
    assert!(matches!(err, Error::Configuration { source: None, .. }));
}
