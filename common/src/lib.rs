pub mod config;
mod macros;

// Re-exported so the status macros can resolve the `Colorize` trait
// from any downstream crate without its own `colored` dependency.
pub use colored;
