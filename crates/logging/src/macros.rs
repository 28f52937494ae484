//! # Logging Macros
//!
//! Convenience macros for structured logging.
//! These macros provide additional metadata and structured fields.

/// Log an authentication event.
#[macro_export]
macro_rules! log_auth_event {
    ($event:expr, $mobile:expr, $success:expr) => {
        tracing::info!(
            target: "auth",
            event = %$event,
            mobile = %$mobile,
            success = $success,
            "Authentication event"
        )
    };
}

/// Measure and log the duration of a block of code.
///
/// # Example
///
/// ```rust
/// use logging::measure_duration;
///
/// let total = measure_duration!("scan", "deadline", {
///     1 + 1
/// });
/// assert_eq!(total, 2);
/// ```
#[macro_export]
macro_rules! measure_duration {
    ($target:expr, $context:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        tracing::debug!(
            target: $target,
            context = %$context,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Operation completed"
        );
        result
    }};
}
