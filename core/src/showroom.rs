//! # Showroom Inventory
//!
//! Owns the ordered collection of [`Car`] records and implements every
//! operation the driver can ask for: listing, gated detail lookup,
//! selling and buying.
//!
//! Insertion order is significant. Lookups scan the sequence in order
//! and resolve to the first case-insensitive model match; duplicate
//! models may coexist and are never collapsed.

use tracing::debug;

use crate::car::Car;
use crate::error::ShowroomError;

/// Minimum salary, in rupees, required to view car details.
pub const SALARY_THRESHOLD: u64 = 100_000;

/// The showroom inventory.
///
/// Created empty at startup, mutated one operation at a time by the
/// single in-process caller, discarded at process end. Every car in the
/// sequence is exclusively owned by the inventory until sold.
#[derive(Debug, Default)]
pub struct Showroom {
    inventory: Vec<Car>,
}

impl Showroom {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cars in insertion order.
    ///
    /// An empty slice means the driver should report that no cars are
    /// available; that is an informational state, not an error.
    pub fn cars(&self) -> &[Car] {
        &self.inventory
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Resolves `model` to the first matching car in insertion order.
    ///
    /// Matching is a case-insensitive exact comparison on the model
    /// name. With duplicate models in stock the earliest entry wins.
    pub fn find(&self, model: &str) -> Result<&Car, ShowroomError> {
        self.inventory
            .iter()
            .find(|car| car.matches_model(model))
            .ok_or_else(|| ShowroomError::CarNotFound(model.to_string()))
    }

    /// Gated detail lookup.
    ///
    /// The salary gate runs strictly before the lookup: an
    /// under-threshold requester always gets [`ShowroomError::LowSalary`]
    /// and never learns whether `model` exists. Keep this ordering.
    pub fn view_details(&self, model: &str, salary: u64) -> Result<&Car, ShowroomError> {
        if salary < SALARY_THRESHOLD {
            debug!(salary, "detail view refused below salary threshold");
            return Err(ShowroomError::LowSalary);
        }
        self.find(model)
    }

    /// Removes and returns the first car matching `model`.
    ///
    /// On [`ShowroomError::CarNotFound`] the sequence is left untouched.
    /// Only one instance is removed even when duplicates exist.
    pub fn sell(&mut self, model: &str) -> Result<Car, ShowroomError> {
        let idx = self
            .inventory
            .iter()
            .position(|car| car.matches_model(model))
            .ok_or_else(|| ShowroomError::CarNotFound(model.to_string()))?;

        let car = self.inventory.remove(idx);
        debug!(model = car.model(), remaining = self.inventory.len(), "car sold");
        Ok(car)
    }

    /// Appends `car` to the inventory.
    ///
    /// Unconditional: no duplicate check, previously present entries are
    /// untouched.
    pub fn buy(&mut self, car: Car) {
        debug!(model = car.model(), kind = %car.kind(), "car added to inventory");
        self.inventory.push(car);
    }
}
