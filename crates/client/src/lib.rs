pub mod config;
pub mod gateway;

pub mod mock;

pub use config::ClientConfig;
pub use gateway::{BookingApi, HttpBookingClient};
