use showroom_common::{config::Config, info};
use showroom_core::Showroom;

use crate::terminal::print;

/// Prints the 1-indexed inventory listing, or the empty-floor notice.
pub fn list(showroom: &Showroom, cfg: &Config) {
    if showroom.is_empty() {
        info!("No cars available in the showroom.");
        return;
    }

    print::header("Available Cars", cfg.quiet);
    for (idx, car) in showroom.cars().iter().enumerate() {
        print::numbered(idx + 1, car.summary());
    }
}
