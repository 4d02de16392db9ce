//! # Showroom Inventory Core
//!
//! The domain model of the car showroom: the [`Car`] record with its
//! kind variants, the [`Showroom`] inventory and its operations, and the
//! error taxonomy shared by every operation.
//!
//! This crate is presentation-free. It hands structured values and
//! rendered text back to the caller and never prints; the driver decides
//! how results and failures reach the terminal.

pub mod car;
pub mod error;
pub mod showroom;

pub use car::{Car, CarKind};
pub use error::ShowroomError;
pub use showroom::{SALARY_THRESHOLD, Showroom};
