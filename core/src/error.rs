//! Error taxonomy of the showroom operations.
//!
//! Both conditions are expected and recoverable: the driver renders the
//! message and the session continues with the inventory untouched.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowroomError {
    /// The requester's stated salary is below the fixed threshold.
    ///
    /// Raised before any lookup happens, so the caller cannot tell
    /// whether the requested model exists.
    #[error("Access Denied! Salary must be at least ₹1,00,000 to view car details.")]
    LowSalary,

    /// No inventory entry's model matches the requested name.
    #[error("Car with model '{0}' not found in showroom inventory.")]
    CarNotFound(String),
}
