mod config;
mod driver_state;

pub use config::AppConfig;
pub use driver_state::DriverState;
