//! Error context conversion

use std::io;

use align_domain::error::Error;
use align_infrastructure::error_ext::{ErrorContext, registry_error};

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_variants() {
    assert!(matches!(
        failing().context("loading"),
        Err(Error::Infrastructure { .. })
    ));
    assert!(matches!(
        failing().io_context("reading"),
        Err(Error::Io { .. })
    ));
    assert!(matches!(
        failing().config_context("parsing"),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        failing().network_context("connecting"),
        Err(Error::Network { .. })
    ));
}

#[test]
fn test_context_message_and_source() {
    let err = failing()
        .with_context(|| format!("step {}", 3))
        .unwrap_err();

    assert_eq!(err.to_string(), "Infrastructure error: step 3: missing");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.io_context("unused").unwrap(), 7);
}

#[test]
fn test_registry_error_is_configuration() {
    let err = registry_error("cache", "Unknown cache provider 'x'".to_string());

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("cache provider"));
}
