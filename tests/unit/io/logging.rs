//! Tests for subscriber setup

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use graphart::io::logging::{DEFAULT_FILTER, LogFormat, init_logging};

    // Tests repeated initialization is harmless
    // Verified by calling init on the subscriber directly
    #[test]
    fn test_init_is_idempotent() {
        init_logging(LogFormat::Json);
        init_logging(LogFormat::Pretty);
        tracing::info!("logging initialized");
    }

    // Tests formats parse from their command line names
    #[test]
    fn test_format_names() {
        assert_eq!(LogFormat::from_str("pretty", true), Ok(LogFormat::Pretty));
        assert_eq!(LogFormat::from_str("json", true), Ok(LogFormat::Json));
        assert!(LogFormat::from_str("xml", true).is_err());
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
        assert_eq!(DEFAULT_FILTER, "info");
    }
}
