pub mod buy;
pub mod details;
pub mod list;
pub mod menu;
pub mod sell;

use clap::{Args, Parser, Subcommand};
use showroom_core::{Car, CarKind};

#[derive(Parser)]
#[command(name = "showroom")]
#[command(about = "A car showroom inventory manager.", version)]
pub struct CommandLine {
    /// One-shot command; omit it for an interactive session.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Trim decoration; repeat to trim more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Start with an empty inventory instead of the demo stock
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every car currently on the floor
    #[command(alias = "l")]
    List,
    /// Show full details for one model (salary-gated)
    #[command(alias = "d")]
    Details {
        model: String,
        /// Your stated salary in rupees
        #[arg(short, long)]
        salary: u64,
    },
    /// Sell the first car matching a model
    #[command(alias = "s")]
    Sell { model: String },
    /// Buy a car onto the floor
    #[command(alias = "b")]
    Buy(BuyArgs),
}

#[derive(Args)]
pub struct BuyArgs {
    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub model: String,

    /// Price in whole rupees
    #[arg(long)]
    pub price: u64,

    #[arg(long)]
    pub fuel_type: String,

    /// Manual or Automatic
    #[arg(long)]
    pub transmission: String,

    #[arg(long)]
    pub color: String,

    /// Stock the car as an SUV with this ground clearance in millimeters
    #[arg(long, value_name = "MM", conflicts_with = "boot_space")]
    pub ground_clearance: Option<u32>,

    /// Stock the car as a sedan with this boot space in liters
    #[arg(long, value_name = "LITERS")]
    pub boot_space: Option<u32>,
}

impl BuyArgs {
    pub fn into_car(self) -> Car {
        let kind = match (self.ground_clearance, self.boot_space) {
            (Some(ground_clearance_mm), _) => CarKind::Suv {
                ground_clearance_mm,
            },
            (_, Some(boot_space_l)) => CarKind::Sedan { boot_space_l },
            (None, None) => CarKind::Base,
        };

        Car::new(
            self.brand,
            self.model,
            self.price,
            self.fuel_type,
            self.transmission,
            self.color,
            kind,
        )
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
