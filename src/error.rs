//! Error Types
//!
//! Site-level failures. Form validation errors live in `reservation`.

use thiserror::Error;

use crate::reservation::ReservationError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failures of the booking lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error(transparent)]
    Invalid(#[from] ReservationError),
    #[error("this reservation request has already been sent")]
    AlreadySubmitted,
}
