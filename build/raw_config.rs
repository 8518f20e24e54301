use std::error::Error;

use serde::Deserialize;

use crate::defaults::{DEFAULT_GC_PATH, DEFAULT_GC_PORT, DEFAULT_LCD_SHOW_DEBUG_INFO};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub your_name: String,
    pub gc_url: String,
    pub gc_path: String,
    pub gc_port: u16,
    pub gc_user: String,
    pub gc_pass: String,
    pub lcd_show_debug_info: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            wifi_ssid: String::new(),
            wifi_password: String::new(),
            your_name: String::new(),
            gc_url: String::new(),
            gc_path: DEFAULT_GC_PATH.into(),
            gc_port: DEFAULT_GC_PORT,
            gc_user: String::new(),
            gc_pass: String::new(),
            lcd_show_debug_info: DEFAULT_LCD_SHOW_DEBUG_INFO.into(),
        }
    }
}

impl RawConfig {
    /// Parses `cfg.toml` contents. Missing keys take their defaults.
    pub fn parse(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let raw: RawConfig = toml::from_str(toml_str)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.gc_port == 0 {
            return Err("cfg.toml: gc_port must be between 1 and 65535".into());
        }
        if !matches!(self.lcd_show_debug_info.as_str(), "0" | "1") {
            return Err(format!(
                "cfg.toml: lcd_show_debug_info must be \"0\" or \"1\", got {:?}",
                self.lcd_show_debug_info
            )
            .into());
        }
        Ok(())
    }

    /// Rust source defining `CONFIG`, included by `src/config.rs`.
    pub fn to_rust(&self) -> String {
        format!(
            r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_password: {psk:?},
            your_name: {name:?},
            gc_url: {url:?},
            gc_path: {path:?},
            gc_port: {port},
            gc_user: {user:?},
            gc_pass: {pass:?},
            lcd_show_debug_info: {lcd:?},
        }};
    "#,
            ssid = self.wifi_ssid,
            psk = self.wifi_password,
            name = self.your_name,
            url = self.gc_url,
            path = self.gc_path,
            port = self.gc_port,
            user = self.gc_user,
            pass = self.gc_pass,
            lcd = self.lcd_show_debug_info,
        )
    }
}
