#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod debug_display;
mod defaults;
pub mod endpoint;
pub mod wifi;

pub use config::{Config, CONFIG};
pub use constants::*;
pub use debug_display::DebugDisplay;
pub use endpoint::PushEndpoint;
pub use wifi::WifiCredentials;
