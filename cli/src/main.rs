mod commands;
mod terminal;

use anyhow::Result;
use commands::{CommandLine, Commands, buy, details, list, menu, sell};
use showroom_common::config::Config;
use showroom_core::{Car, CarKind, Showroom};
use terminal::{logging, print};

fn main() -> Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    if commands.no_color {
        colored::control::set_override(false);
    }

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_seed: commands.no_seed,
    };

    let mut showroom = Showroom::new();
    if !cfg.no_seed {
        seed_demo_stock(&mut showroom);
    }

    match commands.command {
        Some(Commands::List) => list::list(&showroom, &cfg),
        Some(Commands::Details { model, salary }) => {
            details::view_plain(&showroom, &model, salary);
        }
        Some(Commands::Sell { model }) => sell::sell(&mut showroom, &model),
        Some(Commands::Buy(args)) => buy::buy(&mut showroom, args.into_car()),
        None => {
            print::banner(cfg.no_banner, cfg.quiet);
            menu::run(&mut showroom, &cfg)?;
        }
    }

    Ok(())
}

/// Stocks the floor the way every session of the original showroom
/// opened, so the tool is usable out of the box.
fn seed_demo_stock(showroom: &mut Showroom) {
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
    showroom.buy(Car::new(
        "Hyundai",
        "Verna",
        1_500_000,
        "Petrol",
        "Manual",
        "Black",
        CarKind::Sedan { boot_space_l: 480 },
    ));
    showroom.buy(Car::new(
        "Maruti",
        "Baleno",
        900_000,
        "Petrol",
        "Automatic",
        "Red",
        CarKind::Base,
    ));
    showroom.buy(Car::new(
        "TATA",
        "Tiago",
        800_000,
        "EV",
        "Manual",
        "Blue",
        CarKind::Base,
    ));

    tracing::debug!(count = showroom.len(), "demo stock seeded");
}
