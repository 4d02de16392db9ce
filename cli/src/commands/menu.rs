//! # Interactive Session
//!
//! The menu loop the tool drops into when no subcommand is given.
//!
//! Every numeric field is parsed here, before the core is involved; a
//! bad number aborts the current command with a message and returns to
//! the menu with the inventory untouched.

use anyhow::Result;
use showroom_common::{config::Config, error, info, warn};
use showroom_core::{Car, CarKind, Showroom};

use crate::commands::{buy, details, list, sell};
use crate::terminal::{print, prompt};

const MENU: &[&str] = &[
    "View Available Cars",
    "Display Car Details",
    "Sell a Car",
    "Buy a Car",
    "Exit",
];

/// Runs the session until the operator exits or stdin closes.
pub fn run(showroom: &mut Showroom, cfg: &Config) -> Result<()> {
    loop {
        print::header("Car Showroom Management", cfg.quiet);
        for (idx, entry) in MENU.iter().enumerate() {
            print::numbered(idx + 1, entry);
        }

        let choice = prompt::read_line("Enter your choice:")?;
        match choice.as_str() {
            "1" => list::list(showroom, cfg),
            "2" => view_details(showroom, cfg)?,
            "3" => sell_car(showroom)?,
            "4" => buy_car(showroom)?,
            "5" => {
                info!("Exiting... Thank you for visiting!");
                print::end_of_session(cfg.quiet);
                return Ok(());
            }
            _ => warn!("Invalid choice! Please try again."),
        }
    }
}

fn view_details(showroom: &Showroom, cfg: &Config) -> Result<()> {
    let model = prompt::read_line("Enter car model to view details:")?;
    let raw = prompt::read_line("Enter your salary:")?;
    let Some(salary) = prompt::parse_number(&raw) else {
        error!("Please enter a valid numeric salary.");
        return Ok(());
    };

    details::view(showroom, &model, salary, cfg);
    Ok(())
}

fn sell_car(showroom: &mut Showroom) -> Result<()> {
    let model = prompt::read_line("Enter car model to sell:")?;
    sell::sell(showroom, &model);
    Ok(())
}

fn buy_car(showroom: &mut Showroom) -> Result<()> {
    let brand = prompt::read_line("Enter Car Brand:")?;
    let model = prompt::read_line("Enter Car Model:")?;
    let raw = prompt::read_line("Enter Car Price:")?;
    let Some(price) = prompt::parse_number(&raw) else {
        error!("Price must be a number.");
        return Ok(());
    };
    let fuel_type = prompt::read_line("Enter Fuel Type:")?;
    let transmission = prompt::read_line("Enter Transmission (Manual/Automatic):")?;
    let color = prompt::read_line("Enter Color:")?;

    let Some(kind) = prompt_kind()? else {
        return Ok(());
    };

    let car = Car::new(brand, model, price, fuel_type, transmission, color, kind);
    buy::buy(showroom, car);
    Ok(())
}

/// Asks for the car kind and its extra attribute.
///
/// `None` means the payload was not a number and the buy is aborted.
/// Unrecognized kind answers fall back to a base car.
fn prompt_kind() -> Result<Option<CarKind>> {
    let raw = prompt::read_line("Enter Car Type (SUV/Sedan/Other):")?;

    let kind = match raw.to_ascii_lowercase().as_str() {
        "suv" => {
            let raw = prompt::read_line("Enter Ground Clearance (mm):")?;
            let Some(ground_clearance_mm) = prompt::parse_number(&raw) else {
                error!("Ground clearance must be a number.");
                return Ok(None);
            };
            CarKind::Suv {
                ground_clearance_mm,
            }
        }
        "sedan" => {
            let raw = prompt::read_line("Enter Boot Space (liters):")?;
            let Some(boot_space_l) = prompt::parse_number(&raw) else {
                error!("Boot space must be a number.");
                return Ok(None);
            };
            CarKind::Sedan { boot_space_l }
        }
        _ => CarKind::Base,
    };

    Ok(Some(kind))
}
