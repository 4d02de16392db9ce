//! # Car Record
//!
//! An immutable-after-construction value describing one car on the
//! showroom floor.
//!
//! Specializations (SUV, Sedan) are a closed set of kinds carrying one
//! extra attribute each, rather than an open type hierarchy; rendering
//! dispatches on the kind tag.

use std::fmt;

/// The closed set of car specializations.
///
/// Every kind shares the base field set; SUV and Sedan each carry one
/// extra attribute that shows up as a trailing line in the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarKind {
    /// No specialization.
    Base,
    /// Sport utility vehicle, measured by its ground clearance.
    Suv { ground_clearance_mm: u32 },
    /// Sedan, measured by its boot space.
    Sedan { boot_space_l: u32 },
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Car"),
            Self::Suv { .. } => write!(f, "SUV"),
            Self::Sedan { .. } => write!(f, "Sedan"),
        }
    }
}

/// One car in the showroom inventory.
///
/// Fields are fixed at purchase time and never mutated; the inventory
/// owns the record until it is sold. The caller supplies every field
/// as-is, no value validation happens here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    brand: String,
    model: String,
    price: u64,
    fuel_type: String,
    transmission: String,
    color: String,
    kind: CarKind,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: u64,
        fuel_type: impl Into<String>,
        transmission: impl Into<String>,
        color: impl Into<String>,
        kind: CarKind,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
            fuel_type: fuel_type.into(),
            transmission: transmission.into(),
            color: color.into(),
            kind,
        }
    }

    /// The model name, the lookup key within an inventory.
    ///
    /// Matching against it is case-insensitive and the name is not
    /// guaranteed to be unique.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Price in whole rupees.
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn transmission(&self) -> &str {
        &self.transmission
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> &CarKind {
        &self.kind
    }

    /// Whether `model` names this car, ignoring case.
    pub fn matches_model(&self, model: &str) -> bool {
        self.model.eq_ignore_ascii_case(model)
    }

    /// One-line rendering for inventory listings.
    pub fn summary(&self) -> String {
        format!("{} {} - ₹{}", self.brand, self.model, self.price)
    }

    /// Multi-line rendering of every field.
    ///
    /// The base block is identical for all kinds; SUV and Sedan append
    /// their extra attribute as a final labeled line.
    pub fn details(&self) -> String {
        let mut out = format!(
            "Brand: {}\n\
             Model: {}\n\
             Price: ₹{}\n\
             Fuel Type: {}\n\
             Transmission: {}\n\
             Color: {}\n",
            self.brand, self.model, self.price, self.fuel_type, self.transmission, self.color
        );
        match self.kind {
            CarKind::Base => {}
            CarKind::Suv { ground_clearance_mm } => {
                out.push_str(&format!("Ground Clearance: {ground_clearance_mm} mm\n"));
            }
            CarKind::Sedan { boot_space_l } => {
                out.push_str(&format!("Boot Space: {boot_space_l} liters\n"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_one_line() {
        let car = Car::new(
            "Maruti",
            "Baleno",
            900_000,
            "Petrol",
            "Automatic",
            "Red",
            CarKind::Base,
        );
        assert_eq!(car.summary(), "Maruti Baleno - ₹900000");
    }

    #[test]
    fn base_details_list_all_fields() {
        let car = Car::new(
            "Maruti",
            "Baleno",
            900_000,
            "Petrol",
            "Automatic",
            "Red",
            CarKind::Base,
        );
        let details = car.details();

        assert_eq!(
            details,
            "Brand: Maruti\nModel: Baleno\nPrice: ₹900000\n\
             Fuel Type: Petrol\nTransmission: Automatic\nColor: Red\n"
        );
    }

    #[test]
    fn suv_details_append_ground_clearance() {
        let car = Car::new(
            "Toyota",
            "Fortuner",
            3_200_000,
            "Diesel",
            "Automatic",
            "White",
            CarKind::Suv {
                ground_clearance_mm: 225,
            },
        );
        let details = car.details();

        assert!(details.ends_with("Ground Clearance: 225 mm\n"));
        assert!(details.starts_with("Brand: Toyota\n"));
    }

    #[test]
    fn sedan_details_append_boot_space() {
        let car = Car::new(
            "Hyundai",
            "Verna",
            1_500_000,
            "Petrol",
            "Manual",
            "Black",
            CarKind::Sedan { boot_space_l: 480 },
        );

        assert!(car.details().ends_with("Boot Space: 480 liters\n"));
    }

    #[test]
    fn model_match_ignores_case() {
        let car = Car::new(
            "TATA",
            "Tiago",
            800_000,
            "EV",
            "Manual",
            "Blue",
            CarKind::Base,
        );

        assert!(car.matches_model("tiago"));
        assert!(car.matches_model("TIAGO"));
        assert!(!car.matches_model("tiag"));
    }

    #[test]
    fn kind_displays_its_name() {
        assert_eq!(CarKind::Base.to_string(), "Car");
        assert_eq!(
            CarKind::Suv {
                ground_clearance_mm: 225
            }
            .to_string(),
            "SUV"
        );
        assert_eq!(CarKind::Sedan { boot_space_l: 480 }.to_string(), "Sedan");
    }

    #[test]
    fn zero_price_is_accepted() {
        let car = Car::new("Brand", "Model", 0, "Petrol", "Manual", "Grey", CarKind::Base);
        assert_eq!(car.summary(), "Brand Model - ₹0");
    }
}
