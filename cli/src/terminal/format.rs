use colored::*;
use showroom_core::{Car, CarKind};

use crate::terminal::colors;

/// Renders a car as key-value pairs for the detail tree.
///
/// Mirrors the field order of [`Car::details`], with the kind-specific
/// attribute as the final row.
pub fn detail_pairs(car: &Car) -> Vec<(String, ColoredString)> {
    let mut pairs: Vec<(String, ColoredString)> = vec![
        ("Brand".to_string(), car.brand().color(colors::PRIMARY)),
        ("Model".to_string(), car.model().color(colors::ACCENT)),
        (
            "Price".to_string(),
            format!("₹{}", car.price()).color(colors::PRICE),
        ),
        ("Fuel Type".to_string(), car.fuel_type().normal()),
        ("Transmission".to_string(), car.transmission().normal()),
        ("Color".to_string(), car.color().normal()),
    ];

    match *car.kind() {
        CarKind::Base => {}
        CarKind::Suv {
            ground_clearance_mm,
        } => {
            pairs.push((
                "Ground Clearance".to_string(),
                format!("{ground_clearance_mm} mm").normal(),
            ));
        }
        CarKind::Sedan { boot_space_l } => {
            pairs.push((
                "Boot Space".to_string(),
                format!("{boot_space_l} liters").normal(),
            ));
        }
    }

    pairs
}
