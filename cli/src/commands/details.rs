use showroom_common::{config::Config, error};
use showroom_core::Showroom;

use crate::terminal::{format, print};

/// Interactive detail view: salary gate, then a key-value tree.
pub fn view(showroom: &Showroom, model: &str, salary: u64, cfg: &Config) {
    match showroom.view_details(model, salary) {
        Ok(car) => {
            print::header("Car Details", cfg.quiet);
            print::as_tree(format::detail_pairs(car));
        }
        Err(err) => error!("{err}"),
    }
}

/// One-shot detail view: the raw multi-line rendering, for scripting.
pub fn view_plain(showroom: &Showroom, model: &str, salary: u64) {
    match showroom.view_details(model, salary) {
        Ok(car) => print!("{}", car.details()),
        Err(err) => error!("{err}"),
    }
}
