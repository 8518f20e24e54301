use core::fmt;

use log::{info, warn};

use crate::constants::{DEFAULT_GC_PATH, DEFAULT_GC_PORT, DEFAULT_LCD_SHOW_DEBUG_INFO};
use crate::debug_display::DebugDisplay;
use crate::endpoint::PushEndpoint;
use crate::wifi::WifiCredentials;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to connect to (2.4GHz access point)
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: &'static str,

    // Owner name and sensor location label
    pub your_name: &'static str,

    // Metrics backend hostname
    pub gc_url: &'static str,

    // Metrics push endpoint path
    pub gc_path: &'static str,

    // Metrics backend port (443 for TLS)
    pub gc_port: u16,

    // Metrics backend username
    pub gc_user: &'static str,

    // Metrics backend token or password
    pub gc_pass: &'static str,

    // "1" to show debug information on the LCD, "0" to hide it
    pub lcd_show_debug_info: &'static str,
}

impl Config {
    /// Configuration as shipped, before any values are filled in.
    pub const DEFAULT: Config = Config {
        wifi_ssid: "",
        wifi_password: "",
        your_name: "",
        gc_url: "",
        gc_path: DEFAULT_GC_PATH,
        gc_port: DEFAULT_GC_PORT,
        gc_user: "",
        gc_pass: "",
        lcd_show_debug_info: DEFAULT_LCD_SHOW_DEBUG_INFO,
    };

    pub fn wifi(&self) -> WifiCredentials<'_> {
        WifiCredentials::from_config(self)
    }

    pub fn push_endpoint(&self) -> PushEndpoint<'_> {
        PushEndpoint::from_config(self)
    }

    /// Parsed debug display flag. Falls back to the default for a
    /// hand-built config holding something other than "0" or "1".
    pub fn debug_display(&self) -> DebugDisplay {
        match self.lcd_show_debug_info.parse() {
            Ok(flag) => flag,
            Err(e) => {
                warn!(
                    "Invalid lcd_show_debug_info {:?} ({:?}), using default",
                    self.lcd_show_debug_info, e
                );
                DebugDisplay::default()
            }
        }
    }
}

// Secrets only show whether they are set.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &set_or_unset(self.wifi_password))
            .field("your_name", &self.your_name)
            .field("gc_url", &self.gc_url)
            .field("gc_path", &self.gc_path)
            .field("gc_port", &self.gc_port)
            .field("gc_user", &self.gc_user)
            .field("gc_pass", &set_or_unset(self.gc_pass))
            .field("lcd_show_debug_info", &self.lcd_show_debug_info)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Logs the configuration without secrets.
pub fn log_summary(config: &Config) {
    info!("WiFi SSID: {}", or_unset(config.wifi_ssid));
    info!("WiFi password: {}", set_or_unset(config.wifi_password));
    info!("Sensor name: {}", or_unset(config.your_name));
    info!(
        "Metrics endpoint: {}:{}{}",
        or_unset(config.gc_url),
        config.gc_port,
        config.gc_path
    );
    info!("Metrics user: {}", or_unset(config.gc_user));
    info!("Metrics password: {}", set_or_unset(config.gc_pass));
    info!("LCD debug info: {:?}", config.debug_display());
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "<unset>"
    } else {
        value
    }
}

pub(crate) fn set_or_unset(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<set>"
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
