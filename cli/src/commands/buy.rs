use showroom_common::success;
use showroom_core::{Car, Showroom};

/// Adds `car` to the floor. Always succeeds; duplicates are allowed.
pub fn buy(showroom: &mut Showroom, car: Car) {
    let model = car.model().to_string();
    showroom.buy(car);
    success!("Car '{model}' added to showroom successfully!");
}
