#![cfg(test)]
use showroom_core::{Car, CarKind, SALARY_THRESHOLD, Showroom, ShowroomError};

fn base_car(brand: &str, model: &str, price: u64) -> Car {
    Car::new(brand, model, price, "Petrol", "Automatic", "Red", CarKind::Base)
}

/// Full buy-then-view flow: a buyer above the salary threshold looks up
/// the SUV with a differently-cased model name and sees the extra
/// attribute in the rendered details.
#[test]
fn suv_details_visible_above_threshold() -> anyhow::Result<()> {
    let mut showroom = Showroom::new();
    showroom.buy(Car::new(
        "Toyota",
        "Fortuner",
        3_200_000,
        "Diesel",
        "Automatic",
        "White",
        CarKind::Suv {
            ground_clearance_mm: 225,
        },
    ));

    let car = showroom.view_details("fortuner", 150_000)?;
    let details = car.details();

    assert!(details.contains("Ground Clearance: 225 mm"));
    assert!(details.contains("Brand: Toyota"));
    Ok(())
}

#[test]
fn car_sells_once_then_is_gone() {
    let mut showroom = Showroom::new();
    showroom.buy(base_car("Maruti", "Baleno", 900_000));

    assert!(showroom.sell("Baleno").is_ok());
    assert_eq!(
        showroom.sell("Baleno"),
        Err(ShowroomError::CarNotFound("Baleno".to_string()))
    );
}

/// The salary gate runs before the lookup, so a refused buyer cannot
/// probe the inventory: stocked and unknown models are refused alike,
/// and the stock is untouched.
#[test]
fn low_salary_is_refused_before_lookup() {
    let mut showroom = Showroom::new();
    showroom.buy(base_car("Maruti", "Baleno", 900_000));
    let size = showroom.len();

    assert_eq!(
        showroom.view_details("Baleno", 50_000),
        Err(ShowroomError::LowSalary)
    );
    assert_eq!(
        showroom.view_details("Nexon", 50_000),
        Err(ShowroomError::LowSalary)
    );
    assert_eq!(showroom.len(), size);
}

#[test]
fn threshold_salary_is_enough() {
    let mut showroom = Showroom::new();
    showroom.buy(base_car("Maruti", "Baleno", 900_000));

    assert!(showroom.view_details("Baleno", SALARY_THRESHOLD).is_ok());
}

/// Listing order is insertion order, through an arbitrary buy/sell mix.
#[test]
fn listing_follows_buy_order_through_restock() {
    let mut showroom = Showroom::new();
    showroom.buy(base_car("Hyundai", "Creta", 1_500_000));
    showroom.buy(base_car("Maruti", "Baleno", 900_000));
    showroom.buy(base_car("TATA", "Tiago", 800_000));

    showroom.sell("Baleno").unwrap();
    showroom.buy(base_car("Maruti", "Baleno", 950_000));

    let models: Vec<&str> = showroom.cars().iter().map(Car::model).collect();
    assert_eq!(models, ["Creta", "Tiago", "Baleno"]);
}

#[test]
fn empty_showroom_reports_no_stock() {
    let showroom = Showroom::new();
    assert!(showroom.is_empty());
    assert!(showroom.cars().is_empty());
}

/// Every failing operation leaves the inventory exactly as it was.
#[test]
fn failures_never_change_stock() {
    let mut showroom = Showroom::new();
    showroom.buy(base_car("Hyundai", "Creta", 1_500_000));
    let before: Vec<Car> = showroom.cars().to_vec();

    assert!(showroom.find("Nexon").is_err());
    assert!(showroom.view_details("Nexon", 150_000).is_err());
    assert!(showroom.view_details("Creta", 1).is_err());
    assert!(showroom.sell("Nexon").is_err());

    assert_eq!(showroom.cars(), &before[..]);
}
