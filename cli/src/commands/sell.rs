use showroom_common::{error, success};
use showroom_core::Showroom;

/// Sells the first car matching `model`, echoing the name as entered.
pub fn sell(showroom: &mut Showroom, model: &str) {
    match showroom.sell(model) {
        Ok(_) => success!("Car '{model}' sold successfully!"),
        Err(err) => error!("{err}"),
    }
}
