//! # Logging Configuration Tests
//!
//! Tests for structured logging setup and configuration.

mod logging_config_tests {
    use logging::LoggingConfig;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
            log_file: Some("/var/log/keystone.log".to_string()),
            environment: "production".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: LoggingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert!(back.is_production());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let back: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(back.level, "info");
        assert_eq!(back.format, "json");
        assert_eq!(back.log_file, None);
    }
}

mod subscriber_build_tests {
    use logging::LoggingConfig;

    #[test]
    fn test_every_format_builds() {
        for format in ["json", "pretty", "compact", "unknown"] {
            let config = LoggingConfig {
                format: format.to_string(),
                ..Default::default()
            };
            let _subscriber = config.build();
        }
    }

    #[test]
    fn test_tracing_setup_is_idempotent() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }
}

mod macro_tests {
    use logging::measure_duration;

    #[test]
    fn test_measure_duration_returns_block_value() {
        let value = measure_duration!("test", "addition", { 20 + 22 });
        assert_eq!(value, 42);
    }

    #[test]
    fn test_auth_event_macro_compiles() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        logging::log_auth_event!("login", "565225438", true);
        logging::log_auth_event!("login", "565225438", false);
    }
}
