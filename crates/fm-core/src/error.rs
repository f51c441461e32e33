//! Shared error type for formation data.
//!
//! Sub-crates define their own error enums (see `fm-transition`) and keep
//! `FormationError` for problems with the formation layouts themselves.
//! Math utilities and solvers never return errors; they fall back to neutral
//! values and log instead.

use thiserror::Error;

/// Problems detected in a formation layout or its configuration.
#[derive(Debug, Error, PartialEq)]
pub enum FormationError {
    #[error("formation has no anchor positions")]
    EmptyFormation,

    #[error("formation spacing must be positive, got {0}")]
    InvalidSpacing(f32),

    #[error("formation size must be non-negative, got ({x}, {y})")]
    NegativeSize { x: f32, y: f32 },
}

/// Shorthand result type for formation-level operations.
pub type FormationResult<T> = Result<T, FormationError>;
