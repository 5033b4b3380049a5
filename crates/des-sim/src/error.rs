use des_core::{CustomerId, DesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A Completion event referenced a customer who is not in the waiting
    /// line.  Identity tracking is broken — a defect, not a runtime
    /// condition, so the run aborts loudly.
    #[error("completion dispatched at t={at} for {customer}, who is not in the waiting line")]
    CustomerNotInLine { customer: CustomerId, at: f64 },

    /// Configuration or clock error from `des-core`.
    #[error(transparent)]
    Core(#[from] DesError),
}

pub type SimResult<T> = Result<T, SimError>;
