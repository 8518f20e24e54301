use crate::config::CONFIG;

/// Network identifier for a 2.4GHz access point
pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
/// Network authentication secret
pub const WIFI_PASSWORD: &str = CONFIG.wifi_password;

/// Owner name and location of the sensor
pub const YOUR_NAME: &str = CONFIG.your_name;

/// Metrics backend host
pub const GC_URL: &str = CONFIG.gc_url;
/// Metrics push endpoint path
pub const GC_PATH: &str = CONFIG.gc_path;
/// Metrics backend TCP port
pub const GC_PORT: u16 = CONFIG.gc_port;
/// Metrics backend username
pub const GC_USER: &str = CONFIG.gc_user;
/// Metrics backend token or password
pub const GC_PASS: &str = CONFIG.gc_pass;

/// "1" to show debug information on the LCD, "0" to hide it
pub const LCD_SHOW_DEBUG_INFO: &str = CONFIG.lcd_show_debug_info;

pub use crate::defaults::*;

/// Capacity of a rendered push URL
pub const URL_MAX_LEN: usize = 256;

/// Longest SSID accepted by 802.11
pub const WIFI_SSID_MAX_LEN: usize = 32;
/// Shortest WPA2 passphrase
pub const WIFI_PASSWORD_MIN_LEN: usize = 8;
/// Longest WPA2 passphrase
pub const WIFI_PASSWORD_MAX_LEN: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_in_range() {
        assert!(GC_PORT >= 1);
        assert!(u32::from(GC_PORT) <= 65535);
    }

    #[test]
    fn debug_flag_is_literal() {
        assert!(LCD_SHOW_DEBUG_INFO == "0" || LCD_SHOW_DEBUG_INFO == "1");
    }

    #[test]
    fn constants_mirror_config() {
        assert_eq!(WIFI_SSID, CONFIG.wifi_ssid);
        assert_eq!(WIFI_PASSWORD, CONFIG.wifi_password);
        assert_eq!(YOUR_NAME, CONFIG.your_name);
        assert_eq!(GC_URL, CONFIG.gc_url);
        assert_eq!(GC_PATH, CONFIG.gc_path);
        assert_eq!(GC_PORT, CONFIG.gc_port);
        assert_eq!(GC_USER, CONFIG.gc_user);
        assert_eq!(GC_PASS, CONFIG.gc_pass);
        assert_eq!(LCD_SHOW_DEBUG_INFO, CONFIG.lcd_show_debug_info);
    }
}
