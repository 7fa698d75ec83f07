//! # Logging Macros
//!
//! Convenience macros for structured logging.

/// Log the outcome of a seeding phase.
///
/// # Example
///
/// ```rust
/// logging::log_seed_phase!("products", 15);
/// logging::log_seed_phase!("customers", 9, skipped = 1);
/// ```
#[macro_export]
macro_rules! log_seed_phase {
    ($phase:expr, $created:expr) => {
        tracing::info!(
            target: "seed",
            phase = %$phase,
            created = $created,
            "Seed phase completed"
        )
    };
    ($phase:expr, $created:expr, $($k:ident = $v:expr),+) => {
        tracing::info!(
            target: "seed",
            phase = %$phase,
            created = $created,
            $($k = $v),+,
            "Seed phase completed"
        )
    };
}

/// Log a phase that was skipped because the rows it depends on are missing.
#[macro_export]
macro_rules! log_seed_skip {
    ($phase:expr, $reason:expr) => {
        tracing::warn!(
            target: "seed",
            phase = %$phase,
            reason = %$reason,
            "Seed phase skipped"
        )
    };
}

/// Log a bulk delete with table name and affected rows.
#[macro_export]
macro_rules! log_db_delete {
    ($table:expr, $rows:expr) => {
        tracing::debug!(
            target: "database",
            table = %$table,
            rows = $rows,
            "Rows deleted"
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
/// let total = measure_duration!("seed", "collections", {
///     (0 .. 5).sum::<u32>()
/// });
/// assert_eq!(total, 10);
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
