//! Shared error classification.
//!
//! Every subsystem error enum implements [`ErrorCode`]: a stable, grepable
//! `E_*` code for logs and JSON error bodies, and a retryable flag so callers
//! can tell transient upstream failures from permanent ones.

/// Stable error code + retry hint for an error value.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
